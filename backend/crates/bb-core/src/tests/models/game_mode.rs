use crate::GameMode;

use std::str::FromStr;

#[test]
fn test_game_mode_from_str() {
    assert_eq!(GameMode::from_str("creative").unwrap(), GameMode::Creative);
    assert_eq!(GameMode::from_str("survival").unwrap(), GameMode::Survival);
}

#[test]
fn test_game_mode_rejects_unknown_and_wrong_case() {
    assert!(GameMode::from_str("bogus").is_err());
    assert!(GameMode::from_str("Creative").is_err());
    assert!(GameMode::from_str("").is_err());
}

#[test]
fn test_game_mode_display_matches_properties_value() {
    assert_eq!(GameMode::Creative.to_string(), "creative");
    assert_eq!(GameMode::Survival.to_string(), "survival");
}
