//! Client administration workflows.
//!
//! [`ClientAdmin`] owns every collaborator the create and delete workflows
//! need. Nothing is looked up globally: the store, the output sink, the
//! prompts and the secret and identifier sources are all handed in once at
//! construction and never swapped afterwards.

use crate::db::Store;
use crate::util::output::OutputSink;
use crate::util::prompt::Prompts;

pub mod create;
pub mod delete;
pub mod factory;
pub mod input;
pub mod secret;

pub use factory::ClientFactory;
pub use input::CreateArgs;
pub use secret::{SecretIssuer, SECRET_LENGTH};

pub struct ClientAdmin<S, O> {
    store: S,
    output: O,
    prompts: Prompts,
    issuer: SecretIssuer,
    factory: ClientFactory,
}

impl<S: Store, O: OutputSink> ClientAdmin<S, O> {
    pub fn new(
        store: S,
        output: O,
        prompts: Prompts,
        issuer: SecretIssuer,
        factory: ClientFactory,
    ) -> Self {
        Self {
            store,
            output,
            prompts,
            issuer,
            factory,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
