//! Structural argument validators.
//!
//! Each tool declares an [`ArgSchema`]. The same declaration drives the JSON
//! schema advertised in `tools/list` and the checks run on `tools/call`.

use super::error::{ArgumentErrors, FieldViolation};
use serde_json::{json, Map, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// A string that must parse as an absolute URL.
    Url,
}

#[derive(Clone, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind,
            required: true,
        }
    }

    pub fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind,
            required: false,
        }
    }

    fn json_schema(&self) -> Value {
        let mut prop = Map::new();
        prop.insert("type".to_string(), json!("string"));
        if self.kind == FieldKind::Url {
            prop.insert("format".to_string(), json!("uri"));
        }
        prop.insert("description".to_string(), json!(self.description));
        Value::Object(prop)
    }

    fn check(&self, value: Option<&Value>) -> Option<FieldViolation> {
        let value = match value {
            Some(v) => v,
            None if self.required => return Some(FieldViolation::new(self.name, "Required")),
            None => return None,
        };

        let Some(text) = value.as_str() else {
            return Some(FieldViolation::new(
                self.name,
                format!("Expected string, received {}", json_type_name(value)),
            ));
        };

        if self.kind == FieldKind::Url && url::Url::parse(text).is_err() {
            return Some(FieldViolation::new(self.name, "Invalid url"));
        }

        None
    }
}

#[derive(Clone, Debug)]
pub struct ArgSchema {
    fields: Vec<FieldSpec>,
}

impl ArgSchema {
    pub fn object(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.json_schema()))
            .collect();
        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
            "$schema": "http://json-schema.org/draft-07/schema#"
        })
    }

    /// Checks every declared field and returns only the declared keys.
    ///
    /// Unknown keys are dropped rather than rejected.
    pub fn validate(&self, arguments: &Map<String, Value>) -> Result<Map<String, Value>, ArgumentErrors> {
        let mut violations = Vec::new();
        let mut accepted = Map::new();

        for field in &self.fields {
            let value = arguments.get(field.name);
            match field.check(value) {
                Some(violation) => violations.push(violation),
                None => {
                    if let Some(v) = value {
                        accepted.insert(field.name.to_string(), v.clone());
                    }
                }
            }
        }

        if violations.is_empty() {
            Ok(accepted)
        } else {
            Err(ArgumentErrors(violations))
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
