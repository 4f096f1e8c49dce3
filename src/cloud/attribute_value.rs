//! DynamoDB attribute-value JSON encoding.
//!
//! Every value is wrapped in a single-key object naming its type:
//! `{"S": "text"}`, `{"N": "42"}`, `{"BOOL": true}`, `{"NULL": true}`,
//! `{"L": [...]}` and `{"M": {...}}`.

use serde_json::{Map, Number, Value};

use super::CloudError;

pub fn marshall(value: &Value) -> Value {
    let (tag, inner) = match value {
        Value::Null => ("NULL", Value::Bool(true)),
        Value::Bool(b) => ("BOOL", Value::Bool(*b)),
        Value::Number(n) => ("N", Value::String(n.to_string())),
        Value::String(s) => ("S", Value::String(s.clone())),
        Value::Array(items) => ("L", Value::Array(items.iter().map(marshall).collect())),
        Value::Object(map) => ("M", Value::Object(marshall_item(map))),
    };

    let mut wrapped = Map::new();
    wrapped.insert(tag.to_string(), inner);
    Value::Object(wrapped)
}

/// Marshalls the attributes of a top-level item without the outer `M` wrapper
pub fn marshall_item(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| (key.clone(), marshall(value)))
        .collect()
}

pub fn unmarshall(value: &Value) -> Result<Value, CloudError> {
    let wrapped = value
        .as_object()
        .filter(|map| map.len() == 1)
        .ok_or_else(|| CloudError::Decode(format!("not an attribute value: {}", value)))?;

    let (tag, inner) = wrapped
        .iter()
        .next()
        .ok_or_else(|| CloudError::Decode("empty attribute value".to_string()))?;

    match (tag.as_str(), inner) {
        ("NULL", _) => Ok(Value::Null),
        ("BOOL", Value::Bool(b)) => Ok(Value::Bool(*b)),
        ("S", Value::String(s)) => Ok(Value::String(s.clone())),
        ("N", Value::String(n)) => parse_number(n),
        ("L", Value::Array(items)) => items
            .iter()
            .map(unmarshall)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        ("M", Value::Object(map)) => unmarshall_item(map).map(Value::Object),
        ("SS", Value::Array(items)) => Ok(Value::Array(items.clone())),
        ("NS", Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(n) => parse_number(n),
                other => Err(CloudError::Decode(format!("bad number set entry: {}", other))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        (tag, inner) => Err(CloudError::Decode(format!(
            "unsupported attribute {}: {}",
            tag, inner
        ))),
    }
}

pub fn unmarshall_item(map: &Map<String, Value>) -> Result<Map<String, Value>, CloudError> {
    map.iter()
        .map(|(key, value)| Ok((key.clone(), unmarshall(value)?)))
        .collect()
}

fn parse_number(raw: &str) -> Result<Value, CloudError> {
    if let Ok(n) = raw.parse::<u64>() {
        return Ok(Value::Number(n.into()));
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Ok(Value::Number(n.into()));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| CloudError::Decode(format!("invalid number: {}", raw)))
}
