//! SeaORM entities for the travel logger schema.
//!
//! Entities declare no relations: foreign keys are plain id columns and joins
//! are resolved explicitly by the server's service layer.

pub mod prelude;

pub mod city;
pub mod log;
pub mod recommendation;
pub mod upvote;
pub mod user;
