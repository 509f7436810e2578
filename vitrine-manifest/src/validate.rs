//! Schema validation for untrusted manifest documents.
//!
//! A manifest can arrive from anywhere (the bundled first-party file, a
//! third-party URL supplied at runtime), so nothing downstream trusts raw
//! JSON. [`Manifest::validate`] walks the parsed value shape by shape and
//! either produces fully typed records or reports the exact path that
//! failed. Unknown fields are carried through untouched so newer documents
//! keep working against older builds.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{Collection, Item, Manifest, User};

const USER_FIELDS: &[&str] = &["id", "name", "bio", "collections"];
const COLLECTION_FIELDS: &[&str] = &["id", "name", "description", "items"];
const ITEM_FIELDS: &[&str] = &[
    "id",
    "name",
    "description",
    "model",
    "poster",
    "formalName",
    "releaseDate",
    "manufactureDate",
    "acquisitionDate",
    "captureDate",
    "captureLocation",
    "captureLatLong",
    "captureDevice",
    "captureApp",
    "captureMethod",
    "customFields",
];

/// Why a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required field is absent.
    Missing,
    /// A value that must be a string is something else.
    NotAString,
    /// A required string is present but empty.
    EmptyString,
    /// A value that must be an array is something else.
    NotAnArray,
    /// A value that must be an object is something else.
    NotAnObject,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Missing => "required field is missing",
            Self::NotAString => "expected a string",
            Self::EmptyString => "must not be empty",
            Self::NotAnArray => "expected an array",
            Self::NotAnObject => "expected an object",
        };
        f.write_str(reason)
    }
}

/// Rejection of a manifest document, pointing at the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid manifest at `{path}`: {kind}")]
pub struct ValidationError {
    /// JSON-pointer-style path into the document, e.g.
    /// `/2/collections/0/items/3/model`. `/` is the document root.
    pub path: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    fn new(path: &str, kind: ValidationErrorKind) -> Self {
        let path = if path.is_empty() { "/".to_owned() } else { path.to_owned() };
        Self { path, kind }
    }
}

impl Manifest {
    /// Validates an untrusted parsed JSON value into a typed manifest.
    ///
    /// Rejects the whole document on the first offending field; a document
    /// is either fully usable or not used at all. Runs before any merge so
    /// a malformed third-party document never reaches the published
    /// hierarchy.
    pub fn validate(raw: &Value) -> Result<Manifest, ValidationError> {
        let Value::Array(users_raw) = raw else {
            return Err(ValidationError::new("", ValidationErrorKind::NotAnArray));
        };
        let mut users = Vec::with_capacity(users_raw.len());
        for (index, user) in users_raw.iter().enumerate() {
            users.push(validate_user(user, &format!("/{index}"))?);
        }
        Ok(Manifest::new(users))
    }
}

fn validate_user(raw: &Value, path: &str) -> Result<User, ValidationError> {
    let object = require_object(raw, path)?;
    let id = required_string(object, path, "id")?;
    let name = required_string(object, path, "name")?;
    let bio = optional_string(object, path, "bio")?;
    let collections_raw = required_array(object, path, "collections")?;
    let mut collections = Vec::with_capacity(collections_raw.len());
    for (index, collection) in collections_raw.iter().enumerate() {
        let collection_path = format!("{path}/collections/{index}");
        collections.push(validate_collection(collection, &collection_path)?);
    }
    Ok(User {
        id,
        name,
        bio,
        collections,
        extra: unknown_fields(object, USER_FIELDS),
    })
}

fn validate_collection(raw: &Value, path: &str) -> Result<Collection, ValidationError> {
    let object = require_object(raw, path)?;
    let id = required_string(object, path, "id")?;
    let name = required_string(object, path, "name")?;
    let description = optional_string(object, path, "description")?;
    let items_raw = required_array(object, path, "items")?;
    let mut items = Vec::with_capacity(items_raw.len());
    for (index, item) in items_raw.iter().enumerate() {
        items.push(validate_item(item, &format!("{path}/items/{index}"))?);
    }
    Ok(Collection {
        id,
        name,
        description,
        items,
        extra: unknown_fields(object, COLLECTION_FIELDS),
    })
}

fn validate_item(raw: &Value, path: &str) -> Result<Item, ValidationError> {
    let object = require_object(raw, path)?;
    Ok(Item {
        id: required_string(object, path, "id")?,
        name: required_string(object, path, "name")?,
        description: required_string(object, path, "description")?,
        model: required_string(object, path, "model")?,
        poster: optional_string(object, path, "poster")?,
        formal_name: optional_string(object, path, "formalName")?,
        release_date: optional_string(object, path, "releaseDate")?,
        manufacture_date: optional_string(object, path, "manufactureDate")?,
        acquisition_date: optional_string(object, path, "acquisitionDate")?,
        capture_date: optional_string(object, path, "captureDate")?,
        capture_location: optional_string(object, path, "captureLocation")?,
        capture_lat_long: optional_string(object, path, "captureLatLong")?,
        capture_device: optional_string(object, path, "captureDevice")?,
        capture_app: optional_string(object, path, "captureApp")?,
        capture_method: optional_string(object, path, "captureMethod")?,
        custom_fields: custom_fields(object, path)?,
        extra: unknown_fields(object, ITEM_FIELDS),
    })
}

fn require_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::new(path, ValidationErrorKind::NotAnObject))
}

fn required_string(
    object: &Map<String, Value>,
    path: &str,
    field: &str,
) -> Result<String, ValidationError> {
    let field_path = format!("{path}/{field}");
    match object.get(field) {
        None => Err(ValidationError::new(&field_path, ValidationErrorKind::Missing)),
        Some(Value::String(value)) if value.is_empty() => {
            Err(ValidationError::new(&field_path, ValidationErrorKind::EmptyString))
        }
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ValidationError::new(&field_path, ValidationErrorKind::NotAString)),
    }
}

/// Absent and explicit `null` both read as "not provided".
fn optional_string(
    object: &Map<String, Value>,
    path: &str,
    field: &str,
) -> Result<Option<String>, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(ValidationError::new(
            &format!("{path}/{field}"),
            ValidationErrorKind::NotAString,
        )),
    }
}

fn required_array<'a>(
    object: &'a Map<String, Value>,
    path: &str,
    field: &str,
) -> Result<&'a Vec<Value>, ValidationError> {
    let field_path = format!("{path}/{field}");
    match object.get(field) {
        None => Err(ValidationError::new(&field_path, ValidationErrorKind::Missing)),
        Some(Value::Array(values)) => Ok(values),
        Some(_) => Err(ValidationError::new(&field_path, ValidationErrorKind::NotAnArray)),
    }
}

fn custom_fields(
    object: &Map<String, Value>,
    path: &str,
) -> Result<IndexMap<String, String>, ValidationError> {
    match object.get("customFields") {
        None | Some(Value::Null) => Ok(IndexMap::new()),
        Some(Value::Object(entries)) => {
            let mut fields = IndexMap::with_capacity(entries.len());
            for (label, value) in entries {
                let Some(value) = value.as_str() else {
                    return Err(ValidationError::new(
                        &format!("{path}/customFields/{label}"),
                        ValidationErrorKind::NotAString,
                    ));
                };
                fields.insert(label.clone(), value.to_owned());
            }
            Ok(fields)
        }
        Some(_) => Err(ValidationError::new(
            &format!("{path}/customFields"),
            ValidationErrorKind::NotAnObject,
        )),
    }
}

/// Clones every field the typed shape does not consume, in document order.
fn unknown_fields(object: &Map<String, Value>, known: &[&str]) -> Map<String, Value> {
    object
        .iter()
        .filter(|(field, _)| !known.contains(&field.as_str()))
        .map(|(field, value)| (field.clone(), value.clone()))
        .collect()
}
