//! Data model for `ansible-doc --json` output.
//!
//! The top level is kept as a raw ordered JSON map and each module record is
//! decoded only when it is about to be rendered. Option and return-value maps
//! stay raw too, so their input order survives and a malformed entry can be
//! reported by name.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Parse the whole input document into an ordered map of module name to
/// (still undecoded) documentation record.
pub fn parse_modules(source: &str) -> Result<Map<String, Value>> {
    serde_json::from_str(source).context("failed to parse ansible-doc JSON")
}

/// Documentation record for one module.
#[derive(Debug, Deserialize)]
pub struct ModuleDoc {
    pub doc: DocSection,
    /// `RETURN` block
    #[serde(rename = "return", default)]
    pub returns: Option<Map<String, Value>>,
    /// `EXAMPLES` block, preformatted YAML
    #[serde(default)]
    pub examples: Option<String>,
}

/// The `DOCUMENTATION` block.
#[derive(Debug, Deserialize)]
pub struct DocSection {
    pub short_description: String,
    /// One entry per paragraph
    pub description: Text,
    pub requirements: Vec<String>,
    /// Option name → raw [`OptionDoc`]
    pub options: Map<String, Value>,
    #[serde(default)]
    pub author: Option<Text>,
}

/// A described module parameter.
#[derive(Debug, Deserialize)]
pub struct OptionDoc {
    #[serde(rename = "type")]
    pub kind: String,
    /// Element type, required when `kind` is `list`
    #[serde(default)]
    pub elements: Option<String>,
    #[serde(default)]
    pub choices: Option<Vec<Value>>,
    pub description: Text,
}

/// A described return value.
#[derive(Debug, Deserialize)]
pub struct ReturnDoc {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub elements: Option<String>,
    pub description: Text,
    /// When the value is present, e.g. "success"
    #[serde(default)]
    pub returned: Option<String>,
    #[serde(default)]
    pub sample: Option<Value>,
}

/// Prose that ansible-doc emits either as one string or as a list of strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Text {
    One(String),
    Many(Vec<String>),
}

impl Text {
    /// The individual strings, one per paragraph.
    pub fn parts(&self) -> &[String] {
        match self {
            Text::One(s) => std::slice::from_ref(s),
            Text::Many(v) => v,
        }
    }

    /// All parts as a single line of prose.
    pub fn joined(&self) -> String {
        self.parts().join(" ")
    }
}

impl ModuleDoc {
    /// Decode one module record.
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(ModuleDoc::deserialize(value)?)
    }
}

impl OptionDoc {
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(OptionDoc::deserialize(value)?)
    }
}

impl ReturnDoc {
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(ReturnDoc::deserialize(value)?)
    }
}

/// Text form of a `choices` item or `sample`: strings verbatim, anything
/// else as compact JSON.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Whether an optional value counts as set: not null, not false, not zero,
/// and not an empty string, list or map.
pub fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
