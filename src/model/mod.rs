//! Wire-level data transfer objects.
//!
//! These are the JSON shapes exchanged over HTTP. Field names are camelCase on the wire.
//! Related collections are optional and omitted from the JSON unless the handler
//! attaches them, so no DTO ever embeds a back-reference to its parent.

pub mod api;
pub mod city;
pub mod log;
pub mod recommendation;
pub mod upvote;
pub mod user;
