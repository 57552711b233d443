//! Difficulty fixtures for creating in-memory test data.

use entity::difficulty;
use uuid::Uuid;

/// Id of the default fixture difficulty, matching the seeded "Easy" row.
pub const DEFAULT_ID: Uuid = Uuid::from_u128(0x11111111_1111_1111_1111_111111111111);

/// Default difficulty name.
pub const DEFAULT_NAME: &str = "Easy";

/// Creates a difficulty entity model with default values.
///
/// # Default Values
/// - id: `11111111-1111-1111-1111-111111111111`
/// - name: `"Easy"`
pub fn entity() -> difficulty::Model {
    difficulty::Model {
        id: DEFAULT_ID,
        name: DEFAULT_NAME.to_string(),
    }
}
