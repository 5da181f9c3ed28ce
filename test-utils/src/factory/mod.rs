//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Foreign keys are plain id columns, so factories take the
//! referenced ids directly and never require the referenced rows to exist.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let city = factory::create_city(&db).await?;
//!     let log = factory::create_log(&db, user.id, city.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .name("Ava Singh")
//!     .email("ava.singh@example.com")
//!     .build()
//!     .await?;
//! ```

pub mod city;
pub mod helpers;
pub mod log;
pub mod recommendation;
pub mod upvote;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use city::create_city;
pub use log::{create_log, create_log_at};
pub use recommendation::create_recommendation;
pub use upvote::create_upvote;
pub use user::create_user;
