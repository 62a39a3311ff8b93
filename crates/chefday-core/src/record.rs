//! Validated views over untyped upstream payloads.
//!
//! Each validator consumes a [`RemoteRecord`] and either produces a typed
//! response or a [`ShapeError`]. Nothing reads a field of the raw record
//! outside these functions.

use serde_json::{Map, Value};

use crate::birth_date::BirthDate;
use crate::error::ShapeError;
use crate::ids::ChefId;

/// A decoded response body of unknown shape.
pub type RemoteRecord = Value;

const MESSAGE_FIELD: &str = "message";
const BIRTH_DATE_FIELD: &str = "birthDate";

/// Fields that may carry the recipe author, in lookup order.
///
/// The live upstream serves `userId`; `authorId` takes precedence when both exist.
const AUTHOR_FIELDS: [&str; 2] = ["authorId", "userId"];

/// A recipe that names its author.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRecord {
    /// Who wrote the recipe.
    pub author_id: ChefId,

    /// Remaining fields, kept as received.
    pub extra: Map<String, Value>,
}

/// A chef profile carrying a birth date.
#[derive(Debug, Clone, PartialEq)]
pub struct ChefRecord {
    /// Birth date as served by the upstream.
    pub birth_date: BirthDate,

    /// Remaining fields, kept as received.
    pub extra: Map<String, Value>,
}

/// Outcome of validating a recipe payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeResponse {
    /// The recipe exists.
    Found(RecipeRecord),

    /// The upstream reported an error through a `message` field.
    Upstream { message: String },
}

/// Outcome of validating a chef payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ChefResponse {
    /// The chef exists.
    Found(ChefRecord),

    /// The upstream reported an error through a `message` field.
    Upstream { message: String },
}

/// Validate a recipe payload.
///
/// Accepts an object with a numeric author id or a textual `message`. Once
/// accepted, any non-null `message` yields [`RecipeResponse::Upstream`], even
/// when an author id is present too.
pub fn validate_recipe(record: RemoteRecord) -> Result<RecipeResponse, ShapeError> {
    let mut fields = into_object(record)?;

    let author = find_author(&fields);
    let message = take_message(&mut fields);

    match (message, author) {
        (Some(Value::String(message)), _) => Ok(RecipeResponse::Upstream { message }),
        (Some(other), Ok(_)) => Ok(RecipeResponse::Upstream {
            message: other.to_string(),
        }),
        (_, Err(e)) => Err(e),
        (None, Ok((field, author_id))) => {
            fields.remove(field);
            Ok(RecipeResponse::Found(RecipeRecord {
                author_id,
                extra: fields,
            }))
        }
    }
}

/// Validate a chef payload.
///
/// Accepts an object with a textual `birthDate` or a textual `message`, with
/// the same `message` precedence as [`validate_recipe`].
pub fn validate_chef(record: RemoteRecord) -> Result<ChefResponse, ShapeError> {
    let mut fields = into_object(record)?;

    let has_birth_date = matches!(fields.get(BIRTH_DATE_FIELD), Some(Value::String(_)));
    let message = take_message(&mut fields);

    match message {
        Some(Value::String(message)) => return Ok(ChefResponse::Upstream { message }),
        Some(other) if has_birth_date => {
            return Ok(ChefResponse::Upstream {
                message: other.to_string(),
            })
        }
        _ => {}
    }

    match fields.remove(BIRTH_DATE_FIELD) {
        Some(Value::String(raw)) => Ok(ChefResponse::Found(ChefRecord {
            birth_date: BirthDate::new(raw),
            extra: fields,
        })),
        _ => Err(ShapeError::MissingField {
            expected: "a textual birthDate",
        }),
    }
}

/// Whether `record` has the shape of a recipe response.
///
/// The author id must be a non-negative integer: `1.5` or `-4` are numeric
/// but rejected, matching [`validate_recipe`].
pub fn is_recipe_response(record: &RemoteRecord) -> bool {
    let Some(fields) = record.as_object() else {
        return false;
    };
    has_text_message(fields) || find_author(fields).is_ok()
}

/// Whether `record` has the shape of a chef response.
pub fn is_chef_response(record: &RemoteRecord) -> bool {
    let Some(fields) = record.as_object() else {
        return false;
    };
    has_text_message(fields) || matches!(fields.get(BIRTH_DATE_FIELD), Some(Value::String(_)))
}

fn into_object(record: RemoteRecord) -> Result<Map<String, Value>, ShapeError> {
    match record {
        Value::Object(fields) => Ok(fields),
        Value::Null => Err(ShapeError::Null),
        Value::Bool(_) => Err(ShapeError::NotAnObject { found: "boolean" }),
        Value::Number(_) => Err(ShapeError::NotAnObject { found: "number" }),
        Value::String(_) => Err(ShapeError::NotAnObject { found: "string" }),
        Value::Array(_) => Err(ShapeError::NotAnObject { found: "array" }),
    }
}

/// First numeric author field, narrowed to a [`ChefId`].
fn find_author(fields: &Map<String, Value>) -> Result<(&'static str, ChefId), ShapeError> {
    let (field, value) = AUTHOR_FIELDS
        .iter()
        .find_map(|field| match fields.get(*field) {
            Some(Value::Number(n)) => Some((*field, n)),
            _ => None,
        })
        .ok_or(ShapeError::MissingField {
            expected: "a numeric authorId",
        })?;

    let author_id = value.as_u64().ok_or_else(|| ShapeError::InvalidId {
        field,
        value: value.to_string(),
    })?;
    Ok((field, ChefId::new(author_id)))
}

fn has_text_message(fields: &Map<String, Value>) -> bool {
    matches!(fields.get(MESSAGE_FIELD), Some(Value::String(_)))
}

/// Remove and return a non-null `message`. A null one stays in place.
fn take_message(fields: &mut Map<String, Value>) -> Option<Value> {
    match fields.get(MESSAGE_FIELD) {
        None | Some(Value::Null) => None,
        Some(_) => fields.remove(MESSAGE_FIELD),
    }
}
