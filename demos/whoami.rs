//! Example: Show the identity of the logged-in user.
//!
//! Usage:
//!   cargo run --example whoami -- [--server URL]

mod cli;

use cli::ArgParser;

const USAGE: &str = "Usage: cargo run --example whoami -- [--server URL]";

#[tokio::main]
async fn main() -> vaultlib::Result<()> {
    let mut parser = ArgParser::new(USAGE);
    let (client, config) = cli::connect_authenticated(&mut parser)?;

    let user = client.me().await?;
    println!("Current user:");
    println!("  Username: {}", user.username);
    println!("  Email: {}", user.email);
    println!("  Server: {}", config.server_url);

    Ok(())
}
