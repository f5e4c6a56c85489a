//! # Ledger
//!
//! Relay client for the feedback ledger gateway.
//!
//! The gateway fronts the review contract, so the backend never signs
//! transactions itself. It only posts a `giveFeedback` envelope from a
//! configured account and treats any non-2xx answer as a rejected
//! submission.
//!
//! ## Scores
//!
//! A candidate is scored on skills, experience and engagement, each an
//! integer between 0 and 10 inclusive. Incomplete or out-of-range score
//! sets are never relayed, callers skip them.
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

pub const MAX_SCORE: u8 = 10;

/// Raw per-candidate scores as submitted by a reviewer, possibly partial.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Scores {
    pub skills: Option<u8>,
    pub experience: Option<u8>,
    pub engagement: Option<u8>,
}

/// A complete, range-checked score set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTriple {
    pub skills: u8,
    pub experience: u8,
    pub engagement: u8,
}

impl Scores {
    /// The validated triple, or `None` when any score is missing or out of
    /// range.
    pub fn complete(&self) -> Option<ScoreTriple> {
        match (self.skills, self.experience, self.engagement) {
            (Some(skills), Some(experience), Some(engagement))
                if skills <= MAX_SCORE && experience <= MAX_SCORE && engagement <= MAX_SCORE =>
            {
                Some(ScoreTriple {
                    skills,
                    experience,
                    engagement,
                })
            }
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("gateway rejected feedback: {0}")]
    Rejected(StatusCode),
}

pub struct LedgerClient {
    client: Client,
    endpoint: String,
    account: String,
    key: String,
}

impl LedgerClient {
    pub fn new(endpoint: String, account: String, key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            account,
            key,
        }
    }

    pub async fn give_feedback(
        &self,
        candidate_id: u32,
        scores: ScoreTriple,
    ) -> Result<(), LedgerError> {
        let payload = json!({
            "method": "giveFeedback",
            "account": self.account,
            "params": [candidate_id, scores.skills, scores.experience, scores.engagement],
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LedgerError::Rejected(response.status()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::{LedgerClient, LedgerError, ScoreTriple, Scores};

    #[test]
    fn test_complete_scores_accepted() {
        let scores = Scores {
            skills: Some(0),
            experience: Some(10),
            engagement: Some(7),
        };

        assert_eq!(
            scores.complete(),
            Some(ScoreTriple {
                skills: 0,
                experience: 10,
                engagement: 7,
            })
        );
    }

    #[test]
    fn test_partial_scores_skipped() {
        let scores = Scores {
            skills: Some(5),
            experience: None,
            engagement: Some(5),
        };

        assert_eq!(scores.complete(), None);
    }

    #[test]
    fn test_out_of_range_scores_skipped() {
        let scores = Scores {
            skills: Some(11),
            experience: Some(5),
            engagement: Some(5),
        };

        assert_eq!(scores.complete(), None);
    }

    #[tokio::test]
    async fn test_give_feedback_posts_envelope() {
        let gateway = MockServer::start();

        let mock = gateway.mock(|when, then| {
            when.method(POST)
                .path("/feedback")
                .header("authorization", "Bearer secret")
                .json_body(json!({
                    "method": "giveFeedback",
                    "account": "0xabc",
                    "params": [4, 8, 9, 6],
                }));
            then.status(200);
        });

        let client = LedgerClient::new(
            gateway.url("/feedback"),
            "0xabc".to_string(),
            "secret".to_string(),
        );

        client
            .give_feedback(
                4,
                ScoreTriple {
                    skills: 8,
                    experience: 9,
                    engagement: 6,
                },
            )
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_gateway_rejection_is_an_error() {
        let gateway = MockServer::start();

        gateway.mock(|when, then| {
            when.method(POST).path("/feedback");
            then.status(422);
        });

        let client = LedgerClient::new(
            gateway.url("/feedback"),
            "0xabc".to_string(),
            "secret".to_string(),
        );

        let result = client
            .give_feedback(
                0,
                ScoreTriple {
                    skills: 1,
                    experience: 2,
                    engagement: 3,
                },
            )
            .await;

        assert!(matches!(result, Err(LedgerError::Rejected(status)) if status.as_u16() == 422));
    }
}
