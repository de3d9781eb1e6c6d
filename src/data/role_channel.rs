use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::sync::Mutex;

use crate::error::AppError;

/// Per-guild role channel designations, backed by a plain text file.
///
/// The file holds one `guildID=channelID` line per guild and is rewritten in
/// full on every change. Malformed lines are skipped on load rather than
/// treated as fatal, so a damaged file degrades to fewer configured guilds.
///
/// All access goes through an async mutex: lookups are point reads, and
/// `set_role_channel` performs its read-modify-write and the file rewrite
/// under the same guard.
pub struct RoleChannelStore {
    path: PathBuf,
    channels: Mutex<BTreeMap<u64, u64>>,
}

impl RoleChannelStore {
    /// Loads the store from `path`.
    ///
    /// A missing file is not an error; the store starts empty and the file is
    /// created on the first write.
    ///
    /// # Arguments
    /// - `path` - Location of the role channel file
    ///
    /// # Returns
    /// - `Ok(RoleChannelStore)` - Store loaded (possibly empty)
    /// - `Err(AppError::IoErr)` - The file exists but could not be read
    pub async fn load(path: PathBuf) -> Result<Self, AppError> {
        let channels = match tokio::fs::read_to_string(&path).await {
            Ok(text) => parse_role_channels(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            "Loaded {} role channel entries from {}",
            channels.len(),
            path.display()
        );

        Ok(Self {
            path,
            channels: Mutex::new(channels),
        })
    }

    /// Returns the designated role channel for a guild, if one is configured.
    pub async fn role_channel(&self, guild_id: u64) -> Option<u64> {
        self.channels.lock().await.get(&guild_id).copied()
    }

    /// Designates `channel_id` as the role channel for `guild_id` and rewrites
    /// the backing file.
    ///
    /// Overwrites any previous designation for the guild. The in-memory update
    /// and the full file rewrite happen under one lock acquisition.
    pub async fn set_role_channel(&self, guild_id: u64, channel_id: u64) -> Result<(), AppError> {
        let mut channels = self.channels.lock().await;
        channels.insert(guild_id, channel_id);

        let mut text = String::new();
        for (guild, channel) in channels.iter() {
            text.push_str(&format!("{}={}\n", guild, channel));
        }
        tokio::fs::write(&self.path, text).await?;

        Ok(())
    }
}

/// Parses the role channel file format: one `guildID=channelID` line per
/// guild. Lines that do not split on `=` into two u64 values are skipped.
fn parse_role_channels(text: &str) -> BTreeMap<u64, u64> {
    let mut channels = BTreeMap::new();
    for line in text.lines() {
        let Some((guild, channel)) = line.split_once('=') else {
            continue;
        };
        let (Ok(guild), Ok(channel)) = (guild.parse::<u64>(), channel.parse::<u64>()) else {
            continue;
        };
        channels.insert(guild, channel);
    }
    channels
}
