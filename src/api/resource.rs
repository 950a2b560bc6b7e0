use fake::{Dummy, Faker};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier assigned to a record by the remote API. Servers hand these out
/// either as JSON numbers or strings, so both are accepted.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_owned())
    }
}

impl Dummy<Faker> for RecordId {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
        RecordId::Number(rng.gen_range(1..1_000_000))
    }
}

/// Defines the form record data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(deserialize_with = "code_as_string")]
    pub code: String,
    pub name: String,
    pub description: String,
}

impl Record {
    /// Return the editable fields of this record as a draft.
    ///
    pub fn to_draft(&self) -> Draft {
        Draft {
            code: self.code.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Defines the unsaved, editable part of a record. This is also the request
/// body for create and update calls.
///
#[derive(Clone, Debug, Default, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub code: String,
    pub name: String,
    pub description: String,
}

impl Draft {
    pub fn new(code: &str, name: &str, description: &str) -> Self {
        Draft {
            code: code.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// Accept codes sent as JSON strings or numbers and keep their string form.
///
fn code_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Code::deserialize(deserializer)? {
        Code::Text(s) => s,
        Code::Integer(n) => n.to_string(),
        Code::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;
    use serde_json::json;

    #[test]
    fn record_from_numeric_wire_values() {
        let record: Record = serde_json::from_value(json!({
            "id": 7,
            "code": 12345,
            "name": "Widget",
            "description": "A widget",
        }))
        .unwrap();
        assert_eq!(record.id, RecordId::Number(7));
        assert_eq!(record.code, "12345");
    }

    #[test]
    fn record_from_string_wire_values() {
        let record: Record = serde_json::from_value(json!({
            "id": "a1b2",
            "code": "X1",
            "name": "Widget",
            "description": "A widget",
        }))
        .unwrap();
        assert_eq!(record.id, RecordId::Text("a1b2".to_string()));
        assert_eq!(record.code, "X1");
    }

    #[test]
    fn record_id_display() {
        assert_eq!(RecordId::Number(42).to_string(), "42");
        assert_eq!(RecordId::from("abc").to_string(), "abc");
    }

    #[test]
    fn to_draft_copies_editable_fields() {
        let record: Record = Faker.fake();
        let draft = record.to_draft();
        assert_eq!(draft.code, record.code);
        assert_eq!(draft.name, record.name);
        assert_eq!(draft.description, record.description);
    }

    #[test]
    fn draft_serializes_without_id() {
        let draft = Draft::new("X1", "Widget", "A widget");
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            json!({ "code": "X1", "name": "Widget", "description": "A widget" })
        );
    }
}
