use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// A single displayable item: one 3D-modeled object in a collection.
///
/// Only `id`, `name`, `description`, and `model` are required; the optional
/// fields describe provenance and capture metadata that renderers surface
/// when present. Instances are produced by manifest validation or built in
/// code, never deserialized directly from untrusted input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    /// URI of the displayable 3D asset.
    pub model: String,
    /// URI of a still image shown while the model loads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquisition_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_lat_long: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_app: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<String>,
    /// Free-form labeled facts, rendered in document order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub custom_fields: IndexMap<String, String>,
    /// Fields this version does not model. Preserved so a manifest survives
    /// a validate/serialize round trip without loss.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Creates an item from the four required fields, everything else empty.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            model: model.into(),
            ..Self::default()
        }
    }
}
