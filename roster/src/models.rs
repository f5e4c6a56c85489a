//! Wire and storage models shared by the server, the enroll CLI and the
//! sample payload generator.
//!
//! Field names follow the submission form the frontend sends, so candidates
//! keep their capitalized keys and the score is accepted both as
//! `"Relevancy Score"` (form) and `RelevancyScore` (stored).
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "Candidate")]
    pub name: String,

    #[serde(rename = "RelevancyScore", alias = "Relevancy Score")]
    pub relevancy_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertEntry {
    pub name: String,
    pub email: String,
    pub candidates: Vec<Candidate>,

    #[serde(rename = "acceptanceStatus")]
    pub acceptance_status: String,

    pub token: String,
}

/// A saved interview board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detail {
    pub requirement: String,
    pub date: String,
    pub experts: Vec<ExpertEntry>,
}

impl Detail {
    pub fn entry_for(&self, expert_name: &str) -> Option<&ExpertEntry> {
        self.experts.iter().find(|entry| entry.name == expert_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expert {
    pub name: String,
    pub email: String,
}

/// Per-expert block of the save-details form, keyed by expert name in the
/// enclosing map.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpertForm {
    pub email: String,

    #[serde(default)]
    pub candidates: Vec<Candidate>,

    #[serde(rename = "acceptanceStatus")]
    pub acceptance_status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveDetailsRequest {
    pub requirement: String,
    pub date: String,
    pub experts: HashMap<String, ExpertForm>,
}

pub fn build_entry(name: String, form: ExpertForm, token: String) -> ExpertEntry {
    ExpertEntry {
        name,
        email: form.email,
        candidates: form.candidates,
        acceptance_status: form
            .acceptance_status
            .unwrap_or_else(|| "pending".to_string()),
        token,
    }
}
