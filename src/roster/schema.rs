//! Structural validation of a stored roster before deserialization

use serde_json::Value;

/// Number of marks every record carries.
pub const MARK_COUNT: usize = 5;

const REQUIRED_FIELDS: [&str; 3] = ["name", "group_number", "performance"];

/// A schema violation: which record (if any) and what is wrong with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub index: Option<usize>,
    pub message: String,
}

impl Violation {
    fn root(message: impl Into<String>) -> Self {
        Self {
            index: None,
            message: message.into(),
        }
    }

    fn at(index: usize, message: impl Into<String>) -> Self {
        Self {
            index: Some(index),
            message: message.into(),
        }
    }
}

/// Check `value` against the fixed roster shape, reporting the first violation.
///
/// The shape is an array of objects, each with string `name`, string
/// `group_number`, and `performance` holding exactly five integers.
/// Extra keys are allowed.
pub fn validate(value: &Value) -> Result<(), Violation> {
    let records = value
        .as_array()
        .ok_or_else(|| Violation::root(format!("expected an array, found {}", kind(value))))?;

    for (index, record) in records.iter().enumerate() {
        validate_record(index, record)?;
    }
    Ok(())
}

fn validate_record(index: usize, record: &Value) -> Result<(), Violation> {
    let object = record.as_object().ok_or_else(|| {
        Violation::at(index, format!("expected an object, found {}", kind(record)))
    })?;

    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            return Err(Violation::at(index, format!("'{}' is a required property", field)));
        }
    }

    for field in ["name", "group_number"] {
        let value = &object[field];
        if !value.is_string() {
            return Err(Violation::at(
                index,
                format!("'{}' must be a string, found {}", field, kind(value)),
            ));
        }
    }

    let performance = &object["performance"];
    let marks = performance.as_array().ok_or_else(|| {
        Violation::at(
            index,
            format!("'performance' must be an array, found {}", kind(performance)),
        )
    })?;

    if marks.len() != MARK_COUNT {
        return Err(Violation::at(
            index,
            format!(
                "'performance' must hold exactly {} marks, found {}",
                MARK_COUNT,
                marks.len()
            ),
        ));
    }

    if let Some(bad) = marks.iter().find(|m| !m.is_i64()) {
        return Err(Violation::at(
            index,
            format!("'performance' marks must be integers, found {}", bad),
        ));
    }

    Ok(())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
