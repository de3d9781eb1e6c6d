//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Message, Role, etc.) for testing purposes. These factories create valid
//! Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects with
//!   content and an existing reaction set
//! - `role::create_test_role` - Create Serenity Role objects

pub mod message;
pub mod role;

// Re-export commonly used functions for convenience
pub use message::create_test_message;
pub use role::create_test_role;
