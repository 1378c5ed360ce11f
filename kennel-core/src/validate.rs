//! Payload and path validation.
//!
//! Each check inspects the raw JSON first so rejections can name the field,
//! then deserializes into the typed payload.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::dog::{DogId, DogPatch, NewDog};
use crate::errors::{KennelError, KennelResult, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldType {
    Text,
    /// A JSON number that fits an `i64`. Fractional numbers are rejected so a
    /// stored `age` serializes back exactly as it was sent.
    Integer,
}

impl FieldType {
    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::Text => value.is_string(),
            FieldType::Integer => value.as_i64().is_some(),
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            FieldType::Text => "a string",
            FieldType::Integer => "an integer",
        }
    }
}

const DOG_FIELDS: [(&str, FieldType); 4] = [
    ("name", FieldType::Text),
    ("breed", FieldType::Text),
    ("description", FieldType::Text),
    ("age", FieldType::Integer),
];

fn as_object(payload: &Value) -> Result<&Map<String, Value>, ValidationError> {
    payload.as_object().ok_or(ValidationError::NotAnObject)
}

fn check_type(field: &'static str, ty: FieldType, value: &Value) -> Result<(), ValidationError> {
    if ty.matches(value) {
        Ok(())
    } else {
        Err(ValidationError::WrongType {
            field,
            expected: ty.expected(),
        })
    }
}

fn typed<T: DeserializeOwned>(payload: &Value) -> Result<T, ValidationError> {
    serde_json::from_value(payload.clone()).map_err(|e| ValidationError::Malformed(e.to_string()))
}

/// All four fields must be present with the right type.
pub fn validate_create(payload: &Value) -> KennelResult<NewDog> {
    let obj = as_object(payload)?;

    for (field, ty) in DOG_FIELDS {
        let value = obj.get(field).ok_or(ValidationError::Missing(field))?;
        check_type(field, ty, value)?;
    }

    Ok(typed(payload)?)
}

/// Any subset of the fields, each type-checked when present. `null` counts as
/// present and wrong-typed.
pub fn validate_partial(payload: &Value) -> KennelResult<DogPatch> {
    let obj = as_object(payload)?;

    for (field, ty) in DOG_FIELDS {
        if let Some(value) = obj.get(field) {
            check_type(field, ty, value)?;
        }
    }

    Ok(typed(payload)?)
}

/// Parse a path identifier as plain decimal `i64` text, surrounding
/// whitespace allowed.
pub fn validate_id(raw: &str) -> KennelResult<DogId> {
    raw.trim()
        .parse::<DogId>()
        .map_err(|_| KennelError::invalid_id(raw))
}
