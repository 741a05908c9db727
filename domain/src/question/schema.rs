//! StackExchange response bodies.
//!
//! Both endpoints wrap their payload in the common `{ "items": [...] }`
//! envelope. Every field except the id is optional on the wire: the list
//! endpoint omits `body`, and the detail endpoint only includes it when the
//! `withbody` filter is requested. Whether a missing field is acceptable is
//! decided by the conversion methods, not by deserialization.

use super::entities::{Question, QuestionDetail};
use super::value_objects::QuestionId;
use serde::{Deserialize, Deserializer};

/// `{ "items": [...] }` envelope shared by list and detail responses.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionsResponseSchema {
    pub items: Vec<QuestionItemSchema>,
}

/// One element of `items`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionItemSchema {
    #[serde(deserialize_with = "deserialize_question_id")]
    pub question_id: QuestionId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl QuestionsResponseSchema {
    /// Convert to list entries, preserving response order.
    ///
    /// Returns the id of the first item without a title as the error.
    pub fn into_questions(self) -> Result<Vec<Question>, QuestionId> {
        self.items
            .into_iter()
            .map(|item| match item.title {
                Some(title) => Ok(Question::new(item.question_id, title)),
                None => Err(item.question_id),
            })
            .collect()
    }

    /// Take the first item as a detail. `None` when the envelope is empty
    /// or the item carries no body.
    pub fn into_detail(self) -> Option<QuestionDetail> {
        let item = self.items.into_iter().next()?;
        let body = item.body?;
        Some(QuestionDetail::new(item.question_id, body))
    }
}

/// The API sends numeric ids; test fixtures and some mirrors send strings.
fn deserialize_question_id<'de, D>(deserializer: D) -> Result<QuestionId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(QuestionId::from(n)),
        RawId::Text(s) => QuestionId::try_new(s.clone())
            .ok_or_else(|| serde::de::Error::custom(format!("invalid question id {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_keeps_order() {
        let raw = r#"{"items":[
            {"question_id": 3, "title": "c"},
            {"question_id": 1, "title": "a"},
            {"question_id": 2, "title": "b"}
        ],"has_more":true}"#;
        let schema: QuestionsResponseSchema = serde_json::from_str(raw).unwrap();
        let questions = schema.into_questions().unwrap();
        let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert_eq!(questions[0].title, "c");
    }

    #[test]
    fn test_list_missing_title_is_rejected() {
        let raw = r#"{"items":[{"question_id": 7}]}"#;
        let schema: QuestionsResponseSchema = serde_json::from_str(raw).unwrap();
        assert_eq!(schema.into_questions().unwrap_err().as_str(), "7");
    }

    #[test]
    fn test_string_id_accepted() {
        let raw = r#"{"items":[{"question_id": "42", "body": "text"}]}"#;
        let schema: QuestionsResponseSchema = serde_json::from_str(raw).unwrap();
        let detail = schema.into_detail().unwrap();
        assert_eq!(detail.id.as_str(), "42");
        assert_eq!(detail.body, "text");
    }

    #[test]
    fn test_detail_without_body_is_none() {
        let raw = r#"{"items":[{"question_id": 42, "title": "no body"}]}"#;
        let schema: QuestionsResponseSchema = serde_json::from_str(raw).unwrap();
        assert!(schema.into_detail().is_none());
    }

    #[test]
    fn test_detail_empty_items_is_none() {
        let schema: QuestionsResponseSchema = serde_json::from_str(r#"{"items":[]}"#).unwrap();
        assert!(schema.into_detail().is_none());
    }

    #[test]
    fn test_missing_items_fails_to_parse() {
        let result: Result<QuestionsResponseSchema, _> = serde_json::from_str("null");
        assert!(result.is_err());
        let result: Result<QuestionsResponseSchema, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
