use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub redis_url: String,
    pub roster_url: Option<String>,
    pub ledger_url: Option<String>,
    pub ledger_account: Option<String>,
    pub ledger_key: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        let ledger_url = maybe("LEDGER_URL");
        let ledger_account = maybe("LEDGER_ACCOUNT");

        // The gateway key only matters once a relay target exists.
        let ledger_key = ledger_url
            .as_ref()
            .and(ledger_account.as_ref())
            .map(|_| read_secret("LEDGER_KEY"));

        Self {
            port: try_load("RUST_PORT", "1111"),
            redis_url: try_load("REDIS_URL", "redis://127.0.0.1:6379"),
            roster_url: maybe("ROSTER_URL"),
            ledger_url,
            ledger_account,
            ledger_key,
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn maybe(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) => Some(value),
        Err(_) => {
            info!("{key} not set");
            None
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn read_secret(secret_name: &str) -> String {
    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from file: {e}");
        })
        .expect("Secrets misconfigured!")
}
