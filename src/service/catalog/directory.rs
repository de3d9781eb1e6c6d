//! In-memory binding directory.
//!
//! The directory is a cache derived entirely from catalog messages and is
//! rebuilt wholesale whenever the catalog channel's content changes. Readers
//! (the role synchronizer) clone out an `Arc` snapshot and never block a
//! rebuild; a rebuild assembles a fresh map off to the side and swaps it in
//! atomically, so no observer ever sees a partially rebuilt guild.

use std::collections::HashMap;
use std::sync::Arc;

use serenity::all::{GuildId, MessageId};
use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::service::catalog::parser::MessageBindings;

/// All binding tables of one guild's catalog channel, keyed by message.
pub type GuildBindings = HashMap<MessageId, MessageBindings>;

/// Guild-to-snapshot table with single-writer rebuild discipline.
///
/// Overlapping rebuild triggers (say, a message edit arriving while the
/// ready-time rebuild is still paging through history) queue on the rebuild
/// gate; each completed rebuild replaces the guild's snapshot as a whole, so
/// the last writer wins.
pub struct BindingDirectory {
    guilds: RwLock<HashMap<GuildId, Arc<GuildBindings>>>,
    rebuild_gate: Mutex<()>,
}

impl BindingDirectory {
    pub fn new() -> Self {
        Self {
            guilds: RwLock::new(HashMap::new()),
            rebuild_gate: Mutex::new(()),
        }
    }

    /// Returns the current snapshot for a guild, if any rebuild has completed
    /// for it. The snapshot stays valid (and stale) across later rebuilds.
    pub async fn guild(&self, guild_id: GuildId) -> Option<Arc<GuildBindings>> {
        self.guilds.read().await.get(&guild_id).cloned()
    }

    /// Atomically replaces a guild's snapshot with a freshly built map.
    pub async fn replace_guild(&self, guild_id: GuildId, fresh: GuildBindings) {
        self.guilds.write().await.insert(guild_id, Arc::new(fresh));
    }

    /// Serializes rebuild runs. Held for the full duration of a rebuild.
    pub(crate) async fn lock_rebuild(&self) -> MutexGuard<'_, ()> {
        self.rebuild_gate.lock().await
    }
}

impl Default for BindingDirectory {
    fn default() -> Self {
        Self::new()
    }
}
