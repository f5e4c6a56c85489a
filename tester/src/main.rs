use std::fs;

use roster::models::SaveDetailsRequest;
use serde_json::json;

fn main() {
    let payload = json!({
        "requirement": "Senior Backend Engineer",
        "date": "2026-03-02T10:00:00Z",
        "experts": {
            "Alice Moreau": {
                "email": "alice@example.com",
                "candidates": [
                    { "Candidate": "Sam Carter", "Relevancy Score": 7.5 },
                    { "Candidate": "Dana Li", "Relevancy Score": 6.0 }
                ],
                "acceptanceStatus": "pending"
            },
            "Bruno Kask": {
                "email": "bruno@example.com",
                "candidates": [
                    { "Candidate": "Sam Carter", "Relevancy Score": 8.0 }
                ]
            }
        }
    });

    let request: SaveDetailsRequest = serde_json::from_value(payload.clone()).unwrap();

    println!("requirement: {}", request.requirement);
    println!("experts: {}", request.experts.len());

    fs::write(
        "../sample-details.json",
        serde_json::to_string_pretty(&payload).unwrap(),
    )
    .unwrap();
}
