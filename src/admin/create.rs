use tracing::{event, Level};

use super::input::{self, CreateArgs};
use super::ClientAdmin;
use crate::core::models::Client;
use crate::core::types::GrantTypes;
use crate::db::Store;
use crate::error::Result;
use crate::util::output::{Color, OutputSink};

impl<S: Store, O: OutputSink> ClientAdmin<S, O> {
    /// Creates and stores a new client, then reports it.
    ///
    /// Every input is resolved and the record fully built before the store is
    /// touched, so a failure or cancellation on the way leaves nothing behind.
    /// Store errors are returned as they are.
    #[tracing::instrument(skip_all)]
    pub fn create_client(&mut self, args: &CreateArgs) -> Result<Client> {
        let resolved = input::resolve(args, &mut self.prompts)?;

        let credentials = self.issuer.issue(resolved.is_public)?;
        let grant_types = GrantTypes::parse(resolved.grant_types.as_deref());
        let client = self.factory.build(
            credentials,
            grant_types,
            resolved.description,
            resolved.redirect_uri,
        )?;

        self.store.save_client(&client)?;
        event!(
            Level::INFO,
            client_id = %client.id(),
            public = client.is_public(),
            "Created client"
        );

        self.report_created(&client);
        Ok(client)
    }

    fn report_created(&mut self, client: &Client) {
        let out = &mut self.output;

        out.blank_line();
        out.write_line("* Client created *", Some(Color::Green));
        if client.secret().is_some() {
            out.write_line(
                "The client secret was auto-generated and only its hash has been stored. \
                 It cannot be retrieved again, please store it safely.",
                None,
            );
            out.write_line(
                "Don't ever disclose the client secret publicly",
                Some(Color::Yellow),
            );
            out.blank_line();
        }
        out.write_line(&format!("ID: \t\t{}", client.id()), None);
        if let Some(secret) = client.secret() {
            out.write_line(&format!("Secret: \t{}", secret.as_ref()), None);
        }
        out.write_line(&format!("Grant types: \t{}", client.grant_types()), None);
        out.write_line(
            &format!("Description: \t{}", client.description().unwrap_or_default()),
            None,
        );
        out.write_line(
            &format!(
                "Redirect URI: \t{}",
                client.redirect_uri().map(|u| u.0.as_str()).unwrap_or_default()
            ),
            None,
        );
    }
}
