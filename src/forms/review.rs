use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Body of `POST /review`. The client `version` is accepted but never trusted.
#[derive(Serialize, Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewForm {
    #[serde(default)]
    pub id: Option<String>,
    pub product_id: i32,
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(default)]
    #[validate]
    pub entries: Vec<EntryForm>,
}

/// Body of `POST /review/{productId}/entry`; also the element type of [`ReviewForm::entries`].
/// A client supplied `date` is dropped during deserialization.
#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct EntryForm {
    #[validate(min_length = 1)]
    pub username: String,
    #[serde(default)]
    pub review: String,
}

impl From<EntryForm> for models::ReviewEntry {
    fn from(form: EntryForm) -> Self {
        models::ReviewEntry::received(form.username, form.review)
    }
}

impl From<ReviewForm> for models::Review {
    fn from(form: ReviewForm) -> Self {
        models::Review {
            id: form.id,
            product_id: form.product_id,
            version: form.version.unwrap_or_default(),
            entries: form.entries.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use serde_json::json;

    #[test]
    fn client_dates_are_replaced_with_server_time() {
        let form: ReviewForm = serde_json::from_value(json!({
            "productId": 1,
            "entries": [
                { "username": "u1", "date": "1999-01-01T00:00:00.000+0000", "review": "nice" },
                { "username": "u2", "date": "not even a date", "review": "ok" }
            ]
        }))
        .unwrap();

        let before = Utc::now() - Duration::seconds(1);
        let review: models::Review = form.into();

        assert_eq!(review.entries.len(), 2);
        assert_eq!(review.entries[0].username, "u1");
        assert_eq!(review.entries[1].review, "ok");
        assert!(review.entries.iter().all(|entry| entry.date > before));
    }

    #[test]
    fn entry_order_is_preserved() {
        let form: ReviewForm = serde_json::from_value(json!({
            "productId": 4,
            "entries": [
                { "username": "a", "review": "1" },
                { "username": "b", "review": "2" },
                { "username": "c", "review": "3" }
            ]
        }))
        .unwrap();

        let review: models::Review = form.into();
        let names: Vec<&str> = review.entries.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn product_id_is_required() {
        let result = serde_json::from_value::<ReviewForm>(json!({ "entries": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn username_is_required() {
        let result = serde_json::from_value::<EntryForm>(json!({ "review": "text" }));
        assert!(result.is_err());
    }

    #[test]
    fn empty_username_fails_validation() {
        let form: EntryForm =
            serde_json::from_value(json!({ "username": "", "review": "text" })).unwrap();
        assert!(form.validate().is_err());
    }

    #[test]
    fn nested_entries_are_validated() {
        let form: ReviewForm = serde_json::from_value(json!({
            "productId": 1,
            "entries": [{ "username": "", "review": "x" }]
        }))
        .unwrap();
        assert!(form.validate().is_err());
    }

    #[test]
    fn long_usernames_and_reviews_are_accepted() {
        let form: EntryForm = serde_json::from_value(json!({
            "username": "u".repeat(256),
            "review": "x".repeat(10_001)
        }))
        .unwrap();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn missing_review_text_defaults_to_empty() {
        let form: EntryForm = serde_json::from_value(json!({ "username": "u1" })).unwrap();
        assert!(form.validate().is_ok());
        assert_eq!(form.review, "");
    }
}
