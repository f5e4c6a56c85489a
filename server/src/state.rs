use std::sync::{Arc, Mutex};

use ledger::LedgerClient;
use redis::aio::ConnectionManager;
use roster::{registry::Roster, remote::get_roster_remote};
use tracing::{info, warn};

use super::{config::Config, database::init_redis};

pub struct State {
    pub config: Config,
    pub redis_connection: ConnectionManager,
    pub roster: Mutex<Roster>,
    pub ledger: Option<LedgerClient>,
}

impl State {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let redis_connection = init_redis(&config.redis_url).await;

        let roster = match &config.roster_url {
            Some(url) => match get_roster_remote(url).await {
                Ok(roster) => {
                    info!("Loaded roster with {} assignments", roster.entries.len());
                    roster
                }
                Err(e) => {
                    warn!("Failed to load roster from {url}: {e}");
                    Roster::default()
                }
            },
            None => Roster::default(),
        };

        let ledger = match (&config.ledger_url, &config.ledger_account, &config.ledger_key) {
            (Some(url), Some(account), Some(key)) => Some(LedgerClient::new(
                url.clone(),
                account.clone(),
                key.clone(),
            )),
            (Some(_), None, _) => {
                warn!("LEDGER_URL set without LEDGER_ACCOUNT, feedback relay disabled");
                None
            }
            _ => None,
        };

        Arc::new(Self {
            config,
            redis_connection,
            roster: Mutex::new(roster),
            ledger,
        })
    }

    /// Feedback id for a registry key, assigning one in memory when the
    /// loaded roster has not seen the triple yet.
    pub fn candidate_id(&self, key: String) -> u32 {
        let mut roster = self.roster.lock().unwrap();

        roster::candidate_id(&mut roster, key)
    }
}
