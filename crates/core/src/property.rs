// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-database column schema.
//!
//! Notion describes each database column as `{id, name, type}` plus one extra
//! key named after `type` that holds the type-specific configuration:
//!
//! ```json
//! { "id": "x1", "name": "Amount", "type": "number", "number": { "format": "dollar" } }
//! ```
//!
//! [`PropertyKind`] models that payload as a closed enum. Column types this
//! crate does not know about decode to [`PropertyKind::Unrecognized`] so new
//! Notion column types never break a search.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema entry for one database column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProperty", into = "RawProperty")]
pub struct PropertyDescriptor {
    pub id: String,
    pub name: String,
    pub kind: PropertyKind,
}

/// Type-specific column configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
    Title,
    RichText,
    Number { format: String },
    Select { options: Vec<SelectOption> },
    MultiSelect { options: Vec<SelectOption> },
    Date,
    /// Any column type not listed above, kept verbatim.
    Unrecognized { kind: String, payload: Value },
}

impl PropertyKind {
    /// The Notion `type` string for this column.
    pub fn type_name(&self) -> &str {
        match self {
            PropertyKind::Title => "title",
            PropertyKind::RichText => "rich_text",
            PropertyKind::Number { .. } => "number",
            PropertyKind::Select { .. } => "select",
            PropertyKind::MultiSelect { .. } => "multi_select",
            PropertyKind::Date => "date",
            PropertyKind::Unrecognized { kind, .. } => kind,
        }
    }

    /// Options offered by a select or multi-select column.
    pub fn options(&self) -> &[SelectOption] {
        match self {
            PropertyKind::Select { options } | PropertyKind::MultiSelect { options } => options,
            _ => &[],
        }
    }
}

/// One choice of a select or multi-select column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OptionsPayload {
    #[serde(default)]
    options: Vec<SelectOption>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NumberPayload {
    #[serde(default = "default_number_format")]
    format: String,
}

fn default_number_format() -> String {
    "number".to_string()
}

/// Wire shape: the fixed keys plus whatever else the object carries.
#[derive(Serialize, Deserialize)]
struct RawProperty {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl TryFrom<RawProperty> for PropertyDescriptor {
    type Error = serde_json::Error;

    fn try_from(mut raw: RawProperty) -> Result<Self, Self::Error> {
        let payload = raw.rest.remove(&raw.kind).unwrap_or(Value::Null);
        let payload_or_empty = || {
            if payload.is_null() {
                Value::Object(Map::new())
            } else {
                payload.clone()
            }
        };

        let kind = match raw.kind.as_str() {
            "title" => PropertyKind::Title,
            "rich_text" => PropertyKind::RichText,
            "date" => PropertyKind::Date,
            "number" => {
                let p: NumberPayload = serde_json::from_value(payload_or_empty())?;
                PropertyKind::Number { format: p.format }
            }
            "select" => {
                let p: OptionsPayload = serde_json::from_value(payload_or_empty())?;
                PropertyKind::Select { options: p.options }
            }
            "multi_select" => {
                let p: OptionsPayload = serde_json::from_value(payload_or_empty())?;
                PropertyKind::MultiSelect { options: p.options }
            }
            _ => PropertyKind::Unrecognized {
                kind: raw.kind.clone(),
                payload,
            },
        };

        Ok(PropertyDescriptor {
            id: raw.id,
            name: raw.name,
            kind,
        })
    }
}

impl From<PropertyDescriptor> for RawProperty {
    fn from(p: PropertyDescriptor) -> Self {
        let kind = p.kind.type_name().to_string();
        let payload = match p.kind {
            PropertyKind::Title | PropertyKind::RichText | PropertyKind::Date => {
                Value::Object(Map::new())
            }
            PropertyKind::Number { format } => serde_json::json!({ "format": format }),
            PropertyKind::Select { options } | PropertyKind::MultiSelect { options } => {
                serde_json::json!({ "options": options })
            }
            PropertyKind::Unrecognized { payload, .. } => payload,
        };

        let mut rest = Map::new();
        if !payload.is_null() {
            rest.insert(kind.clone(), payload);
        }
        RawProperty {
            id: p.id,
            name: p.name,
            kind,
            rest,
        }
    }
}

#[cfg(test)]
#[path = "property_tests.rs"]
mod tests;
