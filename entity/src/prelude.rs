pub use super::city::Entity as City;
pub use super::log::Entity as Log;
pub use super::recommendation::Entity as Recommendation;
pub use super::upvote::Entity as Upvote;
pub use super::user::Entity as User;
