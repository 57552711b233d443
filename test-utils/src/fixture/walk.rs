//! Walk fixtures for creating in-memory test data.
//!
//! The default walk references the default region and difficulty fixtures.

use entity::walk;
use uuid::Uuid;

use super::{difficulty, region};

/// Default fixture walk id.
pub const DEFAULT_ID: Uuid = Uuid::from_u128(0xbbbbbbbb_bbbb_bbbb_bbbb_bbbbbbbbbbb1);

/// Default walk name.
pub const DEFAULT_NAME: &str = "Triund Trek";

/// Default walk description.
pub const DEFAULT_DESCRIPTION: &str = "Ridge walk above McLeod Ganj";

/// Default walk length in kilometres.
pub const DEFAULT_LENGTH_IN_KM: f64 = 9.0;

/// Creates a walk entity model with default values.
///
/// # Default Values
/// - id: `bbbbbbbb-bbbb-bbbb-bbbb-bbbbbbbbbbb1`
/// - name: `"Triund Trek"`
/// - description: `"Ridge walk above McLeod Ganj"`
/// - length_in_km: `9.0`
/// - walk_image_url: `None`
/// - region_id: [`region::DEFAULT_ID`]
/// - difficulty_id: [`difficulty::DEFAULT_ID`]
pub fn entity() -> walk::Model {
    entity_builder().build()
}

/// Creates a walk entity builder for customization.
pub fn entity_builder() -> WalkEntityBuilder {
    WalkEntityBuilder::default()
}

/// Builder for creating customized walk entity models.
pub struct WalkEntityBuilder {
    id: Uuid,
    name: String,
    description: String,
    length_in_km: f64,
    walk_image_url: Option<String>,
    region_id: Uuid,
    difficulty_id: Uuid,
}

impl Default for WalkEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID,
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            length_in_km: DEFAULT_LENGTH_IN_KM,
            walk_image_url: None,
            region_id: region::DEFAULT_ID,
            difficulty_id: difficulty::DEFAULT_ID,
        }
    }
}

impl WalkEntityBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn length_in_km(mut self, length_in_km: f64) -> Self {
        self.length_in_km = length_in_km;
        self
    }

    pub fn walk_image_url(mut self, url: Option<String>) -> Self {
        self.walk_image_url = url;
        self
    }

    pub fn region_id(mut self, region_id: Uuid) -> Self {
        self.region_id = region_id;
        self
    }

    pub fn difficulty_id(mut self, difficulty_id: Uuid) -> Self {
        self.difficulty_id = difficulty_id;
        self
    }

    /// Builds the walk entity model.
    pub fn build(self) -> walk::Model {
        walk::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            length_in_km: self.length_in_km,
            walk_image_url: self.walk_image_url,
            region_id: self.region_id,
            difficulty_id: self.difficulty_id,
        }
    }
}
