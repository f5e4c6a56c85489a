use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    extract::{Path, State},
};
use ledger::Scores;
use roster::{
    models::{Detail, Expert, SaveDetailsRequest, build_entry},
    normalize::triple_key,
};
use serde::{Deserialize, Serialize};

use crate::{
    database::{all_details, all_experts, get_detail, put_detail, put_expert},
    error::AppError,
    state::State as AppState,
    token::{create_token, detail_id, parse_date},
};

pub async fn save_details_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SaveDetailsRequest>,
) -> Result<Json<Detail>, AppError> {
    let date = parse_date(&payload.date)?;

    let experts = payload
        .experts
        .into_iter()
        .map(|(name, form)| {
            let token = create_token(&name, &payload.requirement, date);
            build_entry(name, form, token)
        })
        .collect();

    let detail = Detail {
        requirement: payload.requirement,
        date: payload.date,
        experts,
    };

    let mut connection = state.redis_connection.clone();
    put_detail(&mut connection, &detail_id(&detail.requirement, date), &detail).await?;

    for entry in &detail.experts {
        let expert = Expert {
            name: entry.name.clone(),
            email: entry.email.clone(),
        };
        put_expert(&mut connection, &expert).await?;
    }

    Ok(Json(detail))
}

pub async fn details_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Detail>>, AppError> {
    let mut connection = state.redis_connection.clone();

    Ok(Json(all_details(&mut connection).await?))
}

pub async fn experts_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Expert>>, AppError> {
    let mut connection = state.redis_connection.clone();

    Ok(Json(all_experts(&mut connection).await?))
}

pub async fn agenda_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Detail>>, AppError> {
    let mut connection = state.redis_connection.clone();
    let details = all_details(&mut connection).await?;

    Ok(Json(agenda_for(details, &name)))
}

/// The boards a reviewer sits on, each narrowed to that reviewer's own
/// entry. Other experts' entries, tokens included, never leave the server.
fn agenda_for(details: Vec<Detail>, expert_name: &str) -> Vec<Detail> {
    details
        .into_iter()
        .filter_map(|detail| {
            let entry = detail.entry_for(expert_name)?.clone();

            Some(Detail {
                requirement: detail.requirement,
                date: detail.date,
                experts: vec![entry],
            })
        })
        .collect()
}

#[derive(Deserialize)]
pub struct FeedbackRequest {
    pub requirement: String,
    pub date: String,
    pub expert: String,
    pub token: String,
    pub scores: HashMap<String, Scores>,
}

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub submitted: usize,
}

pub async fn feedback_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let ledger = state.ledger.as_ref().ok_or(AppError::LedgerUnavailable)?;

    let date = parse_date(&payload.date)?;

    let mut connection = state.redis_connection.clone();
    let detail = get_detail(&mut connection, &detail_id(&payload.requirement, date))
        .await?
        .ok_or(AppError::UnknownSubmission)?;

    let entry = detail
        .entry_for(&payload.expert)
        .ok_or(AppError::UnknownSubmission)?;

    if entry.token != payload.token {
        return Err(AppError::UnknownSubmission);
    }

    let mut submitted = 0;

    for candidate in &entry.candidates {
        // Incomplete or out-of-range score sets are skipped, not rejected.
        let Some(scores) = payload
            .scores
            .get(&candidate.name)
            .and_then(Scores::complete)
        else {
            continue;
        };

        let key = triple_key(&detail.requirement, &entry.name, &candidate.name);
        if key.is_empty() {
            continue;
        }

        let candidate_id = state.candidate_id(key);
        ledger.give_feedback(candidate_id, scores).await?;

        submitted += 1;
    }

    if submitted == 0 {
        return Err(AppError::EmptyFeedback);
    }

    Ok(Json(FeedbackResponse { submitted }))
}
