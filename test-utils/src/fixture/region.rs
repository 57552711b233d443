//! Region fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating region entity models without database insertion.

use entity::region;
use uuid::Uuid;

/// Default fixture region id.
pub const DEFAULT_ID: Uuid = Uuid::from_u128(0xaaaaaaaa_aaaa_aaaa_aaaa_aaaaaaaaaaa1);

/// Default region code.
pub const DEFAULT_CODE: &str = "HP";

/// Default region name.
pub const DEFAULT_NAME: &str = "Himachal Pradesh";

/// Creates a region entity model with default values.
///
/// # Default Values
/// - id: `aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaa1`
/// - code: `"HP"`
/// - name: `"Himachal Pradesh"`
/// - region_image_url: `None`
///
/// # Returns
/// - `region::Model` - In-memory region entity
pub fn entity() -> region::Model {
    entity_builder().build()
}

/// Creates a region entity builder for customization.
///
/// # Returns
/// - `RegionEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> RegionEntityBuilder {
    RegionEntityBuilder::default()
}

/// Builder for creating customized region entity models.
pub struct RegionEntityBuilder {
    id: Uuid,
    code: String,
    name: String,
    region_image_url: Option<String>,
}

impl Default for RegionEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID,
            code: DEFAULT_CODE.to_string(),
            name: DEFAULT_NAME.to_string(),
            region_image_url: None,
        }
    }
}

impl RegionEntityBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn region_image_url(mut self, url: Option<String>) -> Self {
        self.region_image_url = url;
        self
    }

    /// Builds the region entity model.
    ///
    /// # Returns
    /// - `region::Model` - In-memory region entity with configured values
    pub fn build(self) -> region::Model {
        region::Model {
            id: self.id,
            code: self.code,
            name: self.name,
            region_image_url: self.region_image_url,
        }
    }
}
