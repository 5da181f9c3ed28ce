//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They resolve the joins
//! between users, cities, logs, recommendations and upvotes, compute upvote totals at
//! read time, and enforce the few preconditions the API has.

pub mod city;
pub mod log;
pub mod recommendation;
pub mod upvote;
pub mod user;
