use anyhow::Error;
use prost::Message;
use reqwest::get;

use crate::registry::Roster;

/// Fetches a published roster blob, for servers that do not share a disk
/// with the enroll job.
pub async fn get_roster_remote(url: &str) -> Result<Roster, Error> {
    let response = get(url).await?;
    let bytes = response.bytes().await?;

    Ok(Roster::decode(&*bytes)?)
}
