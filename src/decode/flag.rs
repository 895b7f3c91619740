use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a backend boolean.
///
/// `true`/`false` map as-is and the number one (`1` or `1.0`) is `true`.
/// Every other representation (`0`, other numbers, strings, `null`,
/// containers) is `false`. Never fails.
pub fn decode_flag(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() == Some(1.0),
        _ => false,
    }
}

/// `deserialize_with` adapter for boolean fields of wire records.
pub(super) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| decode_flag(&value))
}
