pub use super::football_match::Entity as Match;
pub use super::goal::Entity as Goal;
pub use super::match_result::Entity as MatchResult;
pub use super::player::Entity as Player;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
