use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Parses a submitted date into the canonical instant that feeds the
/// hashes. Accepts RFC 3339, a bare datetime, or a bare date at midnight
/// UTC, anything else is rejected before any write happens.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(parsed.and_utc());
    }

    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(parsed.and_time(NaiveTime::MIN).and_utc());
    }

    Err(AppError::InvalidDate)
}

/// Per-expert submission token. Deterministic in
/// (expert, requirement, date), resubmitting a board reproduces it.
pub fn create_token(expert_name: &str, requirement: &str, date: DateTime<Utc>) -> String {
    let data = format!("{expert_name}-{requirement}-{}", date.to_rfc3339());

    hex::encode(Sha256::digest(data.as_bytes()))
}

/// Board id, shared by every expert entry of one (requirement, date) save.
pub fn detail_id(requirement: &str, date: DateTime<Utc>) -> String {
    let data = format!("{requirement}-{}", date.to_rfc3339());

    hex::encode(Sha256::digest(data.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::{create_token, detail_id, parse_date};

    #[test]
    fn test_token_is_deterministic() {
        let date = parse_date("2026-03-02T10:00:00Z").unwrap();

        assert_eq!(
            create_token("Alice Moreau", "Senior Backend Engineer", date),
            create_token("Alice Moreau", "Senior Backend Engineer", date),
        );
    }

    #[test]
    fn test_distinct_triples_distinct_tokens() {
        let date = parse_date("2026-03-02T10:00:00Z").unwrap();
        let other_date = parse_date("2026-03-03T10:00:00Z").unwrap();

        let token = create_token("Alice Moreau", "Senior Backend Engineer", date);

        assert_ne!(
            token,
            create_token("Bruno Kask", "Senior Backend Engineer", date)
        );
        assert_ne!(token, create_token("Alice Moreau", "Data Engineer", date));
        assert_ne!(
            token,
            create_token("Alice Moreau", "Senior Backend Engineer", other_date)
        );
    }

    #[test]
    fn test_token_is_hex_sha256() {
        let date = parse_date("2026-03-02").unwrap();
        let token = create_token("Alice", "Engineer", date);

        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_invalid_dates_rejected() {
        assert!(parse_date("not a date").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("2026-13-40").is_err());
    }

    #[test]
    fn test_equivalent_dates_share_canonical_form() {
        let explicit = parse_date("2026-03-02T00:00:00Z").unwrap();
        let bare = parse_date("2026-03-02").unwrap();

        assert_eq!(explicit, bare);
        assert_eq!(
            detail_id("Engineer", explicit),
            detail_id("Engineer", bare)
        );
    }

    #[test]
    fn test_detail_id_differs_from_token() {
        let date = parse_date("2026-03-02T10:00:00Z").unwrap();

        assert_ne!(
            detail_id("Engineer", date),
            create_token("Engineer", "Engineer", date)
        );
    }
}
