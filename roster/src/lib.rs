//! # Roster
//!
//! Shared registry of candidate feedback ids.
//!
//! Every scored candidate is addressed on the feedback ledger by a small
//! integer id rather than by name. The id is assigned to the
//! (board, expert, candidate) triple the first time it is seen and is never
//! reassigned, so a republished roster blob stays compatible with feedback
//! that was already relayed.
//!
//! ## Implementation
//!
//! - One protobuf blob holding key -> id pairs plus the next free id
//! - Keys are normalized names joined with `_`, see [`normalize`]
//! - `enroll` rewrites the blob from the saved boards, the server loads it
//!   at startup and extends it in memory for triples the blob has not seen
use std::{collections::hash_map::Entry, fs};

use prost::Message;

pub mod registry {
    include!(concat!(env!("OUT_DIR"), "/registry.rs"));
}

pub mod models;
pub mod normalize;
pub mod remote;

use registry::Roster;

pub const ROSTER_PATH: &str = "../roster.bin";

pub fn get_roster() -> Roster {
    match fs::read(ROSTER_PATH) {
        Ok(data) => Roster::decode(&*data).unwrap(),
        Err(_) => Roster::default(),
    }
}

pub fn write_roster(roster: &Roster) {
    fs::write(ROSTER_PATH, roster.encode_to_vec()).unwrap();
}

/// Id for a registry key, assigning the next free id on first sight.
pub fn candidate_id(roster: &mut Roster, key: String) -> u32 {
    match roster.entries.entry(key) {
        Entry::Occupied(entry) => *entry.get(),
        Entry::Vacant(entry) => {
            let id = roster.next_id;
            entry.insert(id);
            roster.next_id += 1;

            id
        }
    }
}

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::{candidate_id, registry::Roster};

    #[test]
    fn test_ids_are_sequential() {
        let mut roster = Roster::default();

        assert_eq!(candidate_id(&mut roster, "a_b_c".to_string()), 0);
        assert_eq!(candidate_id(&mut roster, "a_b_d".to_string()), 1);
        assert_eq!(candidate_id(&mut roster, "x_y_z".to_string()), 2);
        assert_eq!(roster.next_id, 3);
    }

    #[test]
    fn test_same_key_same_id() {
        let mut roster = Roster::default();

        let first = candidate_id(&mut roster, "a_b_c".to_string());
        let second = candidate_id(&mut roster, "a_b_c".to_string());

        assert_eq!(first, second);
        assert_eq!(roster.next_id, 1);
    }

    #[test]
    fn test_assignments_survive_encoding() {
        let mut roster = Roster::default();
        candidate_id(&mut roster, "a_b_c".to_string());
        candidate_id(&mut roster, "a_b_d".to_string());

        let decoded = Roster::decode(&*roster.encode_to_vec()).unwrap();

        assert_eq!(decoded.next_id, 2);
        assert_eq!(decoded.entries, roster.entries);
    }
}
