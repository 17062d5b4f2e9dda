//! Check command.
//!
//! Fetches the secret and parses it without touching the environment, then
//! lists the keys it would set. Values are never printed.

use serde::Serialize;

use crate::cli::{close_after, output, SourceArgs};
use crate::core::access::GcloudFactory;
use crate::core::client::Client;
use crate::core::env::MemoryEnv;
use crate::error::Result;

#[derive(Serialize)]
struct Report<'a> {
    resource: String,
    keys: Vec<&'a str>,
}

/// Validate the configured secret.
pub async fn execute(source: &SourceArgs, json: bool) -> Result<()> {
    let config = source.resolve()?;
    let resource = config.resource_name().to_string();

    let client = Client::connect_with(config, &GcloudFactory::default()).await?;
    let mut env = MemoryEnv::new();
    let loaded = client.load_secret_into(&mut env).await;
    close_after(client, loaded).await?;

    if json {
        let report = Report {
            resource,
            keys: env.keys().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::section(&resource);
    if env.is_empty() {
        output::dimmed("no entries");
    } else {
        for key in env.keys() {
            output::list_item(&output::key(key));
        }
    }
    println!();
    output::success(&format!(
        "{} entr{} valid",
        env.len(),
        if env.len() == 1 { "y" } else { "ies" }
    ));

    Ok(())
}
