pub use super::difficulty::Entity as Difficulty;
pub use super::region::Entity as Region;
pub use super::user::Entity as User;
pub use super::walk::Entity as Walk;
