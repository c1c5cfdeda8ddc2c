mod common;

use common::player;
use rusty_golf_handicap::EngineError;
use rusty_golf_handicap::handicap::team_handicap;
use rusty_golf_handicap::model::Team;

#[test]
fn test_team_handicap_half_percent() -> Result<(), Box<dyn std::error::Error>> {
    let team = Team::new("t1", "Sharks", vec![player("a", 10.0), player("b", 14.0)]).with_percent(50.0);
    assert!((team_handicap(&team)? - 12.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_team_handicap_defaults_to_full() -> Result<(), Box<dyn std::error::Error>> {
    let team = Team::new("t1", "Sharks", vec![player("a", 10.0), player("b", 14.0)]);
    assert!((team_handicap(&team)? - 24.0).abs() < 1e-9);

    let with_plus = Team::new("t2", "Minnows", vec![player("a", -2.0), player("b", 8.0)]);
    assert!((team_handicap(&with_plus)? - 6.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_empty_team_is_zero() -> Result<(), Box<dyn std::error::Error>> {
    let team = Team::new("t0", "Nobody", vec![]).with_percent(35.0);
    assert_eq!(team_handicap(&team)?, 0.0);
    Ok(())
}

#[test]
fn test_team_handicap_rejects_bad_input() {
    let over = Team::new("t", "Over", vec![player("a", 10.0)]).with_percent(150.0);
    assert!(matches!(team_handicap(&over), Err(EngineError::InvalidInput(_))));

    let nan = Team::new("t", "Nan", vec![player("a", f64::NAN)]);
    assert!(matches!(team_handicap(&nan), Err(EngineError::InvalidInput(_))));
}

#[test]
fn test_team_deserializes_without_percent() -> Result<(), Box<dyn std::error::Error>> {
    let json = r#"{"id":"t","name":"Json","players":[{"id":"a","name":"A","handicapIndex":7.5}]}"#;
    let team: Team = serde_json::from_str(json)?;
    assert_eq!(team.percent_of_handicap, None);
    assert!((team_handicap(&team)? - 7.5).abs() < 1e-9);
    Ok(())
}
