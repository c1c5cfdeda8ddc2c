mod common;

use common::player;
use rusty_golf_handicap::storage::{
    DirKv, KvStore, MemoryKv, PLAYER_KEY, PlayerProfiles, kv_get_json, kv_put_json,
};
use std::sync::Arc;

fn exercise_store(store: &dyn KvStore) -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(store.get("course-a")?, None);
    store.put("course-b", b"two")?;
    store.put("course-a", b"one")?;
    store.put("other", b"x")?;
    assert_eq!(store.get("course-a")?, Some(b"one".to_vec()));

    store.put("course-a", b"uno")?;
    assert_eq!(store.get("course-a")?, Some(b"uno".to_vec()));
    assert_eq!(
        store.keys_with_prefix("course-")?,
        vec!["course-a".to_string(), "course-b".to_string()]
    );

    kv_put_json(store, "numbers", &vec![1, 2, 3])?;
    let back: Vec<i32> = kv_get_json(store, "numbers")?;
    assert_eq!(back, vec![1, 2, 3]);
    assert!(kv_get_json::<Vec<i32>>(store, "missing").is_err());
    Ok(())
}

#[test]
fn test_memory_store() -> Result<(), Box<dyn std::error::Error>> {
    exercise_store(&MemoryKv::new())
}

#[test]
fn test_dir_store() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let store = DirKv::open(dir.path().join("kv"))?;
    exercise_store(&store)?;

    // a second handle on the same directory sees the data
    let reopened = DirKv::open(dir.path().join("kv"))?;
    assert_eq!(reopened.get("course-b")?, Some(b"two".to_vec()));
    assert!(reopened.put("../escape", b"no").is_err());
    assert!(reopened.put("", b"no").is_err());
    Ok(())
}

#[test]
fn test_profiles_upsert_and_lookup() -> Result<(), Box<dyn std::error::Error>> {
    let profiles = PlayerProfiles::new(Arc::new(MemoryKv::new()));
    assert!(profiles.all_players()?.is_empty());

    profiles.save_player(&player("a", 10.0))?;
    profiles.save_player(&player("b", 3.5))?;
    let mut updated = player("a", 8.2);
    updated.email = Some("a@example.com".into());
    profiles.save_player(&updated)?;

    let all = profiles.all_players()?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, "a");
    assert_eq!(all[0].handicap_index, 8.2);
    assert_eq!(
        profiles.player_by_id("a")?.and_then(|p| p.email),
        Some("a@example.com".to_string())
    );
    assert_eq!(profiles.player_by_id("zzz")?, None);
    Ok(())
}

#[test]
fn test_profiles_unreadable_json_reads_as_empty() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(MemoryKv::new());
    store.put(PLAYER_KEY, b"{not json")?;
    let profiles = PlayerProfiles::new(store);
    assert!(profiles.all_players()?.is_empty());

    // saving replaces the broken value
    profiles.save_player(&player("a", 1.0))?;
    assert_eq!(profiles.all_players()?.len(), 1);
    Ok(())
}
