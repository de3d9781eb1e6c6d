use super::*;

/// Tests that a designation survives a reload from disk.
///
/// Verifies that `set_role_channel` persists immediately: a second store
/// loaded from the same path sees the entry.
///
/// Expected: Ok with the entry visible after reload
#[tokio::test]
async fn persists_across_reload() {
    let (_dir, path) = store_path();

    let store = RoleChannelStore::load(path.clone()).await.unwrap();
    store.set_role_channel(100, 200).await.unwrap();

    let reloaded = RoleChannelStore::load(path).await.unwrap();
    assert_eq!(reloaded.role_channel(100).await, Some(200));
}

/// Tests that reconfiguring a guild overwrites the previous designation.
///
/// Verifies that only the latest channel is kept; no history accumulates in
/// memory or on disk.
///
/// Expected: Ok with the newer channel winning
#[tokio::test]
async fn overwrites_existing_designation() {
    let (_dir, path) = store_path();

    let store = RoleChannelStore::load(path.clone()).await.unwrap();
    store.set_role_channel(100, 200).await.unwrap();
    store.set_role_channel(100, 201).await.unwrap();

    assert_eq!(store.role_channel(100).await, Some(201));

    let text = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(text, "100=201\n");
}

/// Tests that the file is rewritten in full on every change.
///
/// Verifies that after configuring two guilds the file holds exactly one line
/// per guild, ordered by guild ID.
///
/// Expected: Ok with both lines present
#[tokio::test]
async fn rewrites_whole_file() {
    let (_dir, path) = store_path();

    let store = RoleChannelStore::load(path.clone()).await.unwrap();
    store.set_role_channel(300, 400).await.unwrap();
    store.set_role_channel(100, 200).await.unwrap();

    let text = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(text, "100=200\n300=400\n");
}
