//! The coiffeur record model.

use serde::{Deserialize, Serialize};

/// One hairdresser business, as stored and as sent over the wire.
///
/// Every field is optional: the data layer declares nothing required, and
/// absent JSON fields pass through to the store as NULL. Latitude and
/// longitude are numeric strings; search compares them as text.
///
/// The store assigns an auto-increment identity on insert, but it is never
/// part of the record itself - `nom` is the key clients use for updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "sqlite", derive(sqlx::FromRow))]
pub struct CoiffeurRecord {
    pub nom: Option<String>,
    pub numero: Option<String>,
    pub voie: Option<String>,
    pub code_postal: Option<String>,
    pub ville: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// The fields an update-by-name call may change.
///
/// Latitude and longitude are deliberately absent: location is immutable
/// after creation, so the type itself enforces the asymmetry with insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CoiffeurUpdate {
    pub nom: Option<String>,
    pub numero: Option<String>,
    pub voie: Option<String>,
    pub code_postal: Option<String>,
    pub ville: Option<String>,
}
