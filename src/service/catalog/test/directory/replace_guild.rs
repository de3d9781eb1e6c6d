use super::*;

/// Tests that a rebuild is a full replace, not a merge.
///
/// Verifies that a message present in the old snapshot but absent from the
/// fresh map disappears from lookups after the swap, even though no explicit
/// removal event was processed for it.
///
/// Expected: the dropped message is gone from the new snapshot
#[tokio::test]
async fn replace_is_a_full_swap() {
    let directory = BindingDirectory::new();
    let guild = GuildId::new(1);

    let mut first = GuildBindings::new();
    first.insert(MessageId::new(10), parse_bindings("🎉 <@&555>"));
    first.insert(MessageId::new(11), parse_bindings("🐸 <@&556>"));
    directory.replace_guild(guild, first).await;

    let mut second = GuildBindings::new();
    second.insert(MessageId::new(11), parse_bindings("🐸 <@&556>"));
    directory.replace_guild(guild, second).await;

    let snapshot = directory.guild(guild).await.unwrap();
    assert!(!snapshot.contains_key(&MessageId::new(10)));
    assert!(snapshot.contains_key(&MessageId::new(11)));
}

/// Tests that an unknown guild has no snapshot.
///
/// A reaction event for a guild that never completed a rebuild must find
/// nothing to act on.
///
/// Expected: None
#[tokio::test]
async fn unknown_guild_has_no_snapshot() {
    let directory = BindingDirectory::new();

    assert!(directory.guild(GuildId::new(42)).await.is_none());
}

/// Tests that a snapshot handed to a reader stays intact across a swap.
///
/// Readers that cloned the snapshot before a rebuild keep observing the old
/// state; they are never exposed to a partially rebuilt map.
///
/// Expected: the old Arc still holds the dropped message
#[tokio::test]
async fn old_snapshot_survives_swap() {
    let directory = BindingDirectory::new();
    let guild = GuildId::new(1);

    let mut first = GuildBindings::new();
    first.insert(MessageId::new(10), parse_bindings("🎉 <@&555>"));
    directory.replace_guild(guild, first).await;

    let before = directory.guild(guild).await.unwrap();
    directory.replace_guild(guild, GuildBindings::new()).await;

    assert!(before.contains_key(&MessageId::new(10)));
    let after = directory.guild(guild).await.unwrap();
    assert!(after.is_empty());
}
