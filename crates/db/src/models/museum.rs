//! Museum model and DTOs.

use museum_core::error::CoreError;
use museum_core::types::DbId;
use museum_core::validation::{require_fields, MISSING_REQUIRED_FIELDS};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `museums` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Museum {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub description: String,
    pub image_url: String,
}

/// Request payload for creating or fully replacing a museum.
///
/// Every field is optional at the serde level so that an absent key, an
/// explicit `null`, and an empty string are all reported the same way by
/// validation instead of by deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MuseumInput {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub location: Option<String>,
    #[validate(required, length(min = 1))]
    pub description: Option<String>,
    #[validate(required, length(min = 1))]
    pub image_url: Option<String>,
}

/// A validated museum payload: all four fields present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMuseum {
    pub name: String,
    pub location: String,
    pub description: String,
    pub image_url: String,
}

impl TryFrom<MuseumInput> for NewMuseum {
    type Error = CoreError;

    fn try_from(input: MuseumInput) -> Result<Self, Self::Error> {
        require_fields(&input)?;

        match (input.name, input.location, input.description, input.image_url) {
            (Some(name), Some(location), Some(description), Some(image_url)) => Ok(NewMuseum {
                name,
                location,
                description,
                image_url,
            }),
            _ => Err(CoreError::Validation(MISSING_REQUIRED_FIELDS.to_string())),
        }
    }
}
