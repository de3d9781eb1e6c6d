//! Roleboard Test Utils
//!
//! Shared testing utilities for the roleboard bot. Serenity model structs
//! (`Message`, `Role`, reactions) cannot be constructed directly because their
//! fields are `#[non_exhaustive]`; these factories build them the same way the
//! Discord API would deliver them, by deserializing JSON payloads.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_role};
//!
//! #[test]
//! fn resolves_role_mention() {
//!     let role = create_test_role(555, "party");
//!     assert_eq!(role.id.get(), 555);
//!
//!     let message = create_test_message(1, 200, "🎉 <@&555> - party role", &[("🎉", None)]);
//!     assert_eq!(message.reactions.len(), 1);
//! }
//! ```

pub mod serenity;
