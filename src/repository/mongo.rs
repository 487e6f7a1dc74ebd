//! Process-wide MongoDB client.
//!
//! The driver keeps its own connection pool, so every repository shares the
//! one client created on first use.

use mongodb::{
    options::{ClientOptions, Credential, ResolverConfig},
    Client, Database,
};
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{info, instrument};

use crate::config::MongoConfig;

static CLIENT: OnceCell<Client> = OnceCell::const_new();

/// Returns the configured database, connecting on the first call.
pub async fn database(config: &MongoConfig) -> Result<Database, mongodb::error::Error> {
    let client = CLIENT.get_or_try_init(|| connect(config)).await?;
    Ok(client.database(&config.database))
}

#[instrument(skip(config), fields(database = %config.database))]
async fn connect(config: &MongoConfig) -> Result<Client, mongodb::error::Error> {
    let mut client_options = ClientOptions::parse_with_resolver_config(&config.uri, ResolverConfig::cloudflare()).await?;
    client_options.app_name = Some("RentalsBackend".to_string());
    client_options.max_pool_size = Some(config.pool_size);
    client_options.connect_timeout = Some(Duration::from_secs(config.connection_timeout_secs));
    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        client_options.credential = Some(
            Credential::builder()
                .username(username.clone())
                .password(password.clone())
                .build(),
        );
    }
    let client = Client::with_options(client_options)?;
    info!("MongoDB client initialized");
    Ok(client)
}
