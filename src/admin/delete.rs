use tracing::{event, Level};

use super::ClientAdmin;
use crate::core::types::ClientId;
use crate::db::Store;
use crate::error::Result;
use crate::util::output::{Color, OutputSink};

impl<S: Store, O: OutputSink> ClientAdmin<S, O> {
    /// Removes the client with exactly this id. Nothing is printed unless the
    /// store confirms the removal.
    #[tracing::instrument(skip(self))]
    pub fn delete_client(&mut self, id: &str) -> Result<()> {
        let id = ClientId(id.to_string());
        self.store.remove_by_id(&id)?;
        event!(Level::INFO, client_id = %id, "Removed client");

        self.output.blank_line();
        self.output.write_line("* Client removed *", Some(Color::Green));
        Ok(())
    }
}
