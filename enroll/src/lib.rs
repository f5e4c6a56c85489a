//! # Enroll
//!
//! Assigns feedback ids for every (board, expert, candidate) triple the
//! server has saved, then rewrites the roster blob.
//!
//! Run it after new boards are submitted so the published roster already
//! covers them before reviewers start scoring. Triples the roster has seen
//! keep their ids, only unseen ones consume new ones.
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use roster::{
    candidate_id, get_roster,
    models::Detail,
    normalize::triple_key,
    registry::Roster,
    write_roster,
};

pub async fn enroll_candidates(server_url: &str) {
    let mut roster = get_roster();

    println!("Loaded assignments: {}\n", roster.entries.len());

    let client = Client::new();
    let details = fetch_details(&client, server_url).await;

    let pb = ProgressBar::new(details.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    let mut new_assignments = 0;

    for detail in &details {
        pb.set_message(format!("Enrolling {}", detail.requirement));

        new_assignments += assign(&mut roster, detail);

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    if new_assignments == 0 {
        println!("No new candidates found. Exiting.");
    } else {
        println!("New assignments: {}", new_assignments);
        println!("Total assignments: {}", roster.entries.len());
    }

    write_roster(&roster);
}

pub async fn fetch_details(client: &Client, server_url: &str) -> Vec<Detail> {
    client
        .get(format!("{server_url}/details"))
        .send()
        .await
        .unwrap()
        .json::<Vec<Detail>>()
        .await
        .unwrap()
}

/// Assigns ids for every candidate on one board, returning how many were
/// new. Triples with unusable names are skipped.
pub fn assign(roster: &mut Roster, detail: &Detail) -> usize {
    let before = roster.next_id;

    for entry in &detail.experts {
        for candidate in &entry.candidates {
            let key = triple_key(&detail.requirement, &entry.name, &candidate.name);

            if key.is_empty() {
                continue;
            }

            #[cfg(feature = "verbose")]
            if !roster.entries.contains_key(&key) {
                println!("New assignment! {key}");
            }

            candidate_id(roster, key);
        }
    }

    (roster.next_id - before) as usize
}
