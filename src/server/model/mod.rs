//! Domain models and operation parameters.
//!
//! Domain models are transient per-request values converted from SeaORM entities at the
//! repository boundary (`from_entity`) and into wire DTOs at the controller boundary
//! (`into_dto`). Parameter types carry validated request data from controllers down to
//! repositories (`from_dto`).

pub mod city;
pub mod log;
pub mod recommendation;
pub mod upvote;
pub mod user;
