use std::env;
use std::process;

use vaultlib::{Client, ClientConfig};

#[allow(dead_code)] // Some examples only need a subset of these helpers.
pub fn usage_and_exit(usage: &str) -> ! {
    eprintln!("{usage}");
    process::exit(1);
}

pub struct ArgParser {
    args: Vec<String>,
    usage: &'static str,
}

impl ArgParser {
    pub fn new(usage: &'static str) -> Self {
        let args: Vec<String> = env::args().skip(1).collect();

        if args.iter().any(|a| a == "--help" || a == "-h") {
            println!("{usage}");
            process::exit(0);
        }

        Self { args, usage }
    }

    pub fn take_value(&mut self, names: &[&str]) -> Option<String> {
        let mut i = 0;
        while i < self.args.len() {
            if names.contains(&self.args[i].as_str()) {
                let value = self.args.get(i + 1).cloned();
                if value.is_none() {
                    usage_and_exit(self.usage);
                }
                self.args.drain(i..=i + 1);
                return value;
            }
            i += 1;
        }
        None
    }

    #[allow(dead_code)]
    pub fn remaining(self) -> Vec<String> {
        self.args
    }
}

/// Parse an optional integer option, exiting on a malformed value.
#[allow(dead_code)]
pub fn take_id(parser: &mut ArgParser, names: &[&str], usage: &'static str) -> Option<i64> {
    parser
        .take_value(names)
        .map(|v| v.parse().unwrap_or_else(|_| usage_and_exit(usage)))
}

/// Build a client from the saved config, honoring a `--server` override.
///
/// The token (if any) was saved by the `login` example; demos that need
/// authentication check `client.is_authenticated()` themselves.
#[allow(dead_code)]
pub fn connect(parser: &mut ArgParser) -> vaultlib::Result<(Client, ClientConfig)> {
    let mut config = ClientConfig::load_default()?;
    if let Some(server) = parser.take_value(&["--server", "-s"]) {
        config.server_url = server;
    }
    Ok((Client::from_config(&config), config))
}

/// Like `connect`, but exits when no token is saved.
#[allow(dead_code)]
pub fn connect_authenticated(parser: &mut ArgParser) -> vaultlib::Result<(Client, ClientConfig)> {
    let (client, config) = connect(parser)?;
    if !client.is_authenticated() {
        eprintln!("Not logged in. Run: cargo run --example login -- --email EMAIL --password PASSWORD");
        process::exit(1);
    }
    Ok((client, config))
}
