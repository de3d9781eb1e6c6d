use super::*;

/// Tests loading a well-formed role channel file.
///
/// Verifies that every `guildID=channelID` line becomes an entry and that
/// unknown guilds resolve to None.
///
/// Expected: Ok with both entries present
#[tokio::test]
async fn loads_entries_from_file() {
    let (_dir, path) = store_path();
    tokio::fs::write(&path, "100=200\n300=400\n").await.unwrap();

    let store = RoleChannelStore::load(path).await.unwrap();

    assert_eq!(store.role_channel(100).await, Some(200));
    assert_eq!(store.role_channel(300).await, Some(400));
    assert_eq!(store.role_channel(999).await, None);
}

/// Tests loading a file containing a malformed line.
///
/// Verifies that a line that is not `u64=u64` is skipped without failing the
/// load and without affecting the surrounding well-formed lines.
///
/// Expected: Ok with the malformed line discarded
#[tokio::test]
async fn skips_malformed_lines() {
    let (_dir, path) = store_path();
    tokio::fs::write(&path, "100=200\nmalformed\n300=400\n")
        .await
        .unwrap();

    let store = RoleChannelStore::load(path).await.unwrap();

    assert_eq!(store.role_channel(100).await, Some(200));
    assert_eq!(store.role_channel(300).await, Some(400));
}

/// Tests loading lines with a non-numeric half.
///
/// Verifies that `abc=200` and `100=xyz` are both discarded.
///
/// Expected: Ok with no entries
#[tokio::test]
async fn skips_non_numeric_ids() {
    let (_dir, path) = store_path();
    tokio::fs::write(&path, "abc=200\n100=xyz\n").await.unwrap();

    let store = RoleChannelStore::load(path).await.unwrap();

    assert_eq!(store.role_channel(100).await, None);
}

/// Tests loading when the file does not exist yet.
///
/// Verifies that a missing file starts the store empty instead of failing;
/// the file is only created on the first write.
///
/// Expected: Ok with no entries
#[tokio::test]
async fn missing_file_starts_empty() {
    let (_dir, path) = store_path();

    let store = RoleChannelStore::load(path).await.unwrap();

    assert_eq!(store.role_channel(100).await, None);
}
