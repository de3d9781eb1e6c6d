//! Persistence layer for guild configuration.
//!
//! The only persistent state the bot owns is the per-guild role channel
//! designation. Everything else (bindings, reactions, role membership) is
//! derived from Discord itself and rebuilt on demand.

pub mod role_channel;

#[cfg(test)]
mod test;
