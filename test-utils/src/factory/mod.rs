//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
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
//!     // Create with defaults
//!     let team = factory::create_team(&db).await?;
//!
//!     // Create a fixture with both teams
//!     let (home, away, fixture) = factory::helpers::create_match_with_teams(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let player = factory::player::PlayerFactory::new(&db, &team.name)
//!     .name("Bambang Pamungkas")
//!     .jersey_number(20)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `team` - Create team entities
//! - `player` - Create player entities
//! - `football_match` - Create match entities
//! - `match_result` - Create match result entities and their goals
//! - `user` - Create user accounts
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod football_match;
pub mod helpers;
pub mod match_result;
pub mod player;
pub mod team;
pub mod user;

pub use football_match::create_match;
pub use match_result::{create_goal, create_match_result};
pub use player::create_player;
pub use team::create_team;
pub use user::create_user;
