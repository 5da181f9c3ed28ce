//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the entity types out of the service and controller layers. All
//! database queries, inserts, updates, and deletes are performed through these repositories.

pub mod city;
pub mod log;
pub mod recommendation;
pub mod seed;
pub mod upvote;
pub mod user;
