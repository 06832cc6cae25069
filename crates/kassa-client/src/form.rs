//! Flattening of request records into form/query key-value pairs.
//!
//! Records are first serialized with their serde tags, then nested objects and arrays
//! are flattened with bracket notation:
//!
//! ```text
//! {"amount": {"value": "1.00"}, "items": [{"vat_code": 2}]}
//! => amount[value]=1.00, items[0][vat_code]=2
//! ```
//!
//! Percent-encoding is left to reqwest (`RequestBuilder::form` / `query`).

use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;

/// Ordered form pairs.
pub type FormPairs = Vec<(String, String)>;

/// Flatten a record into form pairs.
///
/// `null` fields are skipped. Booleans render as `true`/`false` and decimals keep their
/// string form.
///
/// # Errors
///
/// Returns [`ClientError::Encode`] if the record cannot be serialized or is not a
/// JSON object at the top level.
pub fn to_pairs<T: Serialize + ?Sized>(record: &T) -> Result<FormPairs, ClientError> {
    let value = serde_json::to_value(record).map_err(ClientError::Encode)?;
    let mut pairs = FormPairs::new();

    match value {
        Value::Object(map) => {
            for (key, value) in map {
                flatten(key, value, &mut pairs);
            }
        }
        Value::Null => {}
        _ => {
            return Err(ClientError::Encode(serde::ser::Error::custom(
                "form payload must be an object",
            )))
        }
    }

    Ok(pairs)
}

fn flatten(key: String, value: Value, pairs: &mut FormPairs) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s)),
        Value::Array(items) => {
            for (index, item) in items.into_iter().enumerate() {
                flatten(format!("{key}[{index}]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (field, item) in map {
                flatten(format!("{key}[{field}]"), item, pairs);
            }
        }
    }
}
