use rusty_golf_handicap::EngineError;
use rusty_golf_handicap::model::{
    GameCatalog, GameplayFormat, MatchupFormat, ScoringFormat, is_valid_combination,
};

#[test]
fn test_bundled_catalog_loads() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = GameCatalog::bundled()?;
    assert_eq!(catalog.games().len(), 10);
    for id in ["skins", "nassau", "wolf", "stableford", "vegas"] {
        assert!(catalog.get(id).is_some(), "missing {id}");
    }
    let wolf = catalog.get("wolf").ok_or("wolf")?;
    assert!(wolf.supports_player_count(4));
    assert!(!wolf.supports_player_count(3));
    Ok(())
}

#[test]
fn test_catalog_filters_by_player_count() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = GameCatalog::bundled()?;
    let two: Vec<&str> = catalog
        .for_player_count(2)
        .iter()
        .map(|g| g.id.as_str())
        .collect();
    assert!(two.contains(&"skins"));
    assert!(!two.contains(&"wolf"));
    assert!(!two.contains(&"best-ball"));
    assert!(catalog.for_player_count(9).is_empty());
    Ok(())
}

#[test]
fn test_compatibility_table() {
    use GameplayFormat::*;
    use MatchupFormat::*;

    for m in [Solo, H2H, H2HModified, TeamPlay] {
        assert!(is_valid_combination(ScoringFormat::StrokePlay, Individual, m));
    }
    for g in [BestBall, Scramble, Shamble, AlternateShot] {
        assert!(is_valid_combination(ScoringFormat::StrokePlay, g, TeamPlay));
        assert!(!is_valid_combination(ScoringFormat::StrokePlay, g, H2H));
    }
    assert!(!is_valid_combination(ScoringFormat::MatchPlay, Individual, Solo));
    assert!(is_valid_combination(ScoringFormat::PointsBased, Individual, Solo));
}

#[test]
fn test_catalog_rejects_incompatible_game() {
    let json = r#"[{
        "id": "bad-scramble",
        "name": "Head to head scramble",
        "minPlayers": 2,
        "maxPlayers": 4,
        "scoringFormats": ["StrokePlay"],
        "gameplayFormats": ["Scramble"],
        "matchupFormats": ["H2H"]
    }]"#;
    assert!(matches!(
        GameCatalog::from_json(json),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn test_catalog_rejects_dangling_format_and_duplicates() {
    let dangling = r#"[{
        "id": "mixed",
        "name": "Mixed",
        "minPlayers": 2,
        "maxPlayers": 4,
        "scoringFormats": ["StrokePlay"],
        "gameplayFormats": ["Individual", "Scramble"],
        "matchupFormats": ["H2H"]
    }]"#;
    assert!(GameCatalog::from_json(dangling).is_err());

    let game = r#"{
        "id": "dup",
        "name": "Dup",
        "minPlayers": 2,
        "maxPlayers": 4,
        "scoringFormats": ["StrokePlay"],
        "gameplayFormats": ["Individual"],
        "matchupFormats": ["H2H"]
    }"#;
    assert!(GameCatalog::from_json(&format!("[{game}]")).is_ok());
    assert!(GameCatalog::from_json(&format!("[{game},{game}]")).is_err());
}

#[test]
fn test_catalog_rejects_bad_player_range_and_json() {
    let backwards = r#"[{
        "id": "backwards",
        "name": "Backwards",
        "minPlayers": 5,
        "maxPlayers": 2,
        "scoringFormats": ["StrokePlay"],
        "gameplayFormats": ["Individual"],
        "matchupFormats": ["Solo"]
    }]"#;
    assert!(matches!(
        GameCatalog::from_json(backwards),
        Err(EngineError::InvalidInput(_))
    ));
    assert!(matches!(
        GameCatalog::from_json("not json"),
        Err(EngineError::Parse(_))
    ));
}

#[test]
fn test_format_descriptions() {
    assert!(ScoringFormat::MatchPlay.description().contains("won/lost"));
    assert!(GameplayFormat::Scramble.description().contains("best shot"));
    for g in [
        GameplayFormat::Individual,
        GameplayFormat::BestBall,
        GameplayFormat::Shamble,
        GameplayFormat::AlternateShot,
    ] {
        assert!(!g.description().is_empty());
    }
    assert_eq!(ScoringFormat::PointsBased.to_string(), "Points");
}
