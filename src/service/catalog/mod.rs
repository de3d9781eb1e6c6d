//! The role catalog engine.
//!
//! A guild's designated role channel holds "catalog" messages whose lines each
//! bind an emoji to a role mention (`<emoji> <@&role> - ignored comment`).
//! This module owns the three pieces that keep Discord state converged with
//! that text:
//!
//! - `parser` turns one message's text into an ordered binding table
//! - `directory` caches the binding tables per guild as swap-on-rebuild
//!   snapshots, and `rebuild` repopulates a guild's snapshot from the full
//!   channel history
//! - `reconcile` diffs a message's bindings against its live reactions and
//!   converges them
//! - `role_sync` grants or revokes the bound role when a user adds or removes
//!   a reaction
//!
//! The reconciler and the role synchronizer are each split into a pure
//! planning function and an effectful applier, so the decision logic is
//! testable without a gateway connection.

pub mod directory;
pub mod parser;
pub mod rebuild;
pub mod reconcile;
pub mod role_sync;

#[cfg(test)]
mod test;
