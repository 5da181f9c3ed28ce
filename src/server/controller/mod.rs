//! HTTP request handlers.
//!
//! Each submodule owns one resource: its handlers, their OpenAPI annotations, and a
//! `router()` registering them on an `OpenApiRouter`. Handlers convert DTOs into
//! params, call the matching service, and turn a missing entity into `AppError::NotFound`.

pub mod city;
pub mod log;
pub mod recommendation;
pub mod upvote;
pub mod user;

#[cfg(test)]
mod test;
