use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_COLOR: &str = "#f0f0f0";

/// Numbers are accepted for `input`/`output` and `null` reads as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TestCase {
    #[serde(default, deserialize_with = "lenient_text")]
    pub input: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub output: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Image,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Notes {
    Plain(String),
    Tagged {
        #[serde(rename = "type")]
        kind: NoteKind,
        value: String,
    },
}

impl Notes {
    /// Reads notes from a raw JSON value. Anything that is neither a
    /// non-empty string nor a `{type, value}` pair with a known type yields
    /// `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) if !text.is_empty() => Some(Notes::Plain(text.clone())),
            Value::Object(map) => {
                let kind = match map.get("type").and_then(Value::as_str)? {
                    "image" => NoteKind::Image,
                    "text" => NoteKind::Text,
                    _ => return None,
                };
                let value = map.get("value").and_then(Value::as_str)?;
                Some(Notes::Tagged {
                    kind,
                    value: value.to_string(),
                })
            }
            _ => None,
        }
    }
}

/// Canonical question shape shared by both catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub section: String,
    pub icon: String,
    pub color: String,
    pub test_cases: Vec<TestCase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Notes>,
}

/// A bank section. Its questions stay raw JSON so they go through the same
/// first-present field resolution as the secondary catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "lenient_text")]
    pub section: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub icon: String,
    #[serde(default = "default_color", deserialize_with = "lenient_color")]
    pub color: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub questions: Vec<Value>,
}

/// Text of a scalar JSON value. `null` is empty; numbers and booleans are
/// printed.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(text) => Some(text.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(&Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let color = lenient_text(deserializer)?;
    Ok(if color.is_empty() { default_color() } else { color })
}

fn lenient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Value>, D::Error> {
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAssignment {
    pub day_number: u32,
    pub is_today: bool,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub current_day: i64,
    pub assignments: Vec<DayAssignment>,
}

impl Schedule {
    pub fn today(&self) -> Option<&DayAssignment> {
        self.assignments.first().filter(|day| day.is_today)
    }
}

#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub date: String,
    pub start_date: String,
    pub current_day: i64,
    pub max_days: u32,
    pub today: Option<DayAssignment>,
}
