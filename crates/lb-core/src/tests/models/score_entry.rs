use crate::{RankTier, ScoreEntry};

#[test]
fn test_score_entry_deserializes_endpoint_payload() {
    let json = r#"{"username":"alice","score":1234.56,"accuracy":0.875,"pops":42,"rank":2}"#;

    let entry: ScoreEntry = serde_json::from_str(json).unwrap();

    assert_eq!(entry.username, "alice");
    assert_eq!(entry.pops, 42);
    assert_eq!(entry.rank, 2);
    assert_eq!(entry.tier(), RankTier::Cyan);
}
