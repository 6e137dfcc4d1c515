use crate::admin::{ClientAdmin, ClientFactory, CreateArgs, SecretIssuer};
use crate::config::{Config, DEFAULT_HASH_COST};
use crate::db::diesel::DbStore;
use crate::error::Result;
use crate::util::hash::HashingService;
use crate::util::output::ConsoleSink;
use crate::util::prompt::Prompts;
use crate::util::random::{ThreadRngGenerator, UuidGenerator};

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(
    name = "tomiko-admin",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Manage tomiko OAuth 2.0 clients"
)]
pub struct Options {
    #[clap(long, env = "DATABASE_URL")]
    database_url: String,
    #[clap(long, env = "HASH_SECRET", hide_env_values = true)]
    hash_secret: String,
    #[clap(long, env = "HASH_COST", default_value_t = DEFAULT_HASH_COST)]
    hash_cost: u32,
    #[clap(subcommand)]
    command: SubCommand,
}

#[derive(Subcommand, Debug)]
enum SubCommand {
    /// Create or delete OAuth 2.0 clients
    #[clap(subcommand)]
    Client(ClientCommand),
}

#[derive(Subcommand, Debug)]
enum ClientCommand {
    /// Create a new client, prompting for anything not given
    Create(CreateClient),
    /// Delete a client
    Delete(DeleteClient),
}

#[derive(Args, Debug)]
struct CreateClient {
    /// Create a public client (no secret)
    #[clap(long)]
    public: bool,
    #[clap(long)]
    description: Option<String>,
    /// Comma separated grant types; leave unset to allow any
    #[clap(long)]
    grant_types: Option<String>,
    #[clap(long)]
    redirect_uri: Option<String>,
}

#[derive(Args, Debug)]
struct DeleteClient {
    /// Identifier of the client to delete
    id: String,
}

impl From<CreateClient> for CreateArgs {
    fn from(c: CreateClient) -> Self {
        Self {
            public: c.public,
            description: c.description,
            grant_types: c.grant_types,
            redirect_uri: c.redirect_uri,
        }
    }
}

impl Options {
    pub fn config(&self) -> Config {
        Config {
            database_url: self.database_url.clone(),
            hash_secret: self.hash_secret.clone(),
            hash_cost: self.hash_cost,
        }
    }
}

fn get_admin(config: &Config) -> Result<ClientAdmin<DbStore, ConsoleSink>> {
    let store = DbStore::new(config.database_url.as_str());
    let hasher = HashingService::with_secret_key(config.hash_secret.clone());

    Ok(ClientAdmin::new(
        store,
        ConsoleSink,
        Prompts::interactive(),
        SecretIssuer::new(Box::new(ThreadRngGenerator), Box::new(hasher), config.hash_cost),
        ClientFactory::new(Box::new(UuidGenerator)),
    ))
}

pub fn run_cli_action(opts: Options) -> Result<()> {
    use ClientCommand::*;

    let config = opts.config();
    config.validate()?;

    let SubCommand::Client(command) = opts.command;
    let mut admin = get_admin(&config)?;

    match command {
        Create(c) => admin.create_client(&c.into()).map(|_| ()),
        Delete(c) => admin.delete_client(&c.id),
    }
}
