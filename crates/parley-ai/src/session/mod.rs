//! Conversation session management.
//!
//! A `Session` holds the conversation history and commits one turn per
//! successful provider round trip.

mod chat;
mod manager;

pub use manager::Session;
