//! Example: Log in to a FileVault server and save the access token.
//!
//! Usage:
//!   cargo run --example login -- --email EMAIL --password PASSWORD [--server URL]

mod cli;

use cli::{usage_and_exit, ArgParser};
use vaultlib::{Client, ClientConfig};

const USAGE: &str =
    "Usage: cargo run --example login -- --email EMAIL --password PASSWORD [--server URL]";

#[tokio::main]
async fn main() -> vaultlib::Result<()> {
    let mut parser = ArgParser::new(USAGE);
    let email = parser
        .take_value(&["--email", "-e"])
        .unwrap_or_else(|| usage_and_exit(USAGE));
    let password = parser
        .take_value(&["--password", "-p"])
        .unwrap_or_else(|| usage_and_exit(USAGE));

    let mut config = ClientConfig::load_default()?;
    if let Some(server) = parser.take_value(&["--server", "-s"]) {
        config.server_url = server;
    }

    println!("Logging in to {}...", config.server_url);
    let mut client = Client::new(&config.server_url);
    let login = client.login(&email, &password).await?;

    println!("Login successful!");
    println!("  User: {}", login.user.username);
    println!("  Email: {}", login.user.email);

    config.access_token = Some(login.access_token);
    config.user = Some(login.user);
    config.save_default()?;
    println!("Token saved to {}", ClientConfig::default_path().display());

    Ok(())
}
