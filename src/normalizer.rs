use crate::models::{DEFAULT_COLOR, Notes, Question, Section, TestCase, scalar_text};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Flattens the primary bank into one ordered list. Section metadata always
/// wins over anything carried by the question itself.
pub fn flatten(sections: &[Section]) -> Vec<Question> {
    sections
        .iter()
        .flat_map(|section| section.questions.iter().map(move |record| (section, record)))
        .enumerate()
        .map(|(index, (section, record))| Question {
            section: section.section.clone(),
            icon: section.icon.clone(),
            color: section.color.clone(),
            ..project(index, record)
        })
        .collect()
}

/// Projects the loosely-typed secondary records onto the canonical shape.
/// Never fails: a record missing every field becomes an empty question.
pub fn adapt(records: &[Value]) -> Vec<Question> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| project(index, record))
        .collect()
}

/// First-present resolution shared by both catalogs. A field is present when
/// it holds a non-empty string or a number.
fn project(index: usize, record: &Value) -> Question {
    let field = |name: &str| {
        record
            .get(name)
            .filter(|value| value.is_string() || value.is_number())
            .and_then(scalar_text)
            .filter(|text| !text.is_empty())
    };

    Question {
        id: record_id(record).unwrap_or(index as i64 + 1),
        text: field("text").or_else(|| field("title")).unwrap_or_default(),
        section: field("section").unwrap_or_default(),
        icon: field("icon").unwrap_or_default(),
        color: field("color").unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        test_cases: test_cases(index, record),
        video: field("video").or_else(|| field("video_link")),
        link: field("link"),
        notes: record.get("notes").and_then(Notes::from_value),
    }
}

/// Keeps every well-formed entry in its original order; the rest are
/// reported and skipped.
fn test_cases(index: usize, record: &Value) -> Vec<TestCase> {
    let Some(cases) = record.get("testCases").and_then(Value::as_array) else {
        return Vec::new();
    };
    cases
        .iter()
        .enumerate()
        .filter_map(|(position, case)| match TestCase::deserialize(case) {
            Ok(case) => Some(case),
            Err(err) => {
                warn!("skipping test case {} of question #{}: {err}", position + 1, index + 1);
                None
            }
        })
        .collect()
}

fn record_id(record: &Value) -> Option<i64> {
    match record.get("id")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
