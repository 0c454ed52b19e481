use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// All entries written about one product, stored as a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub id: Option<String>,
    pub product_id: i32,
    #[serde(default)]
    pub version: i32,
    #[serde(default)]
    pub entries: Vec<ReviewEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewEntry {
    pub username: String,
    #[serde(with = "entry_date")]
    pub date: DateTime<Utc>,
    pub review: String,
}

impl Review {
    /// An empty, not yet persisted review for `product_id`.
    pub fn new(product_id: i32) -> Self {
        Self {
            product_id,
            ..Default::default()
        }
    }

    /// The store-assigned id, if the review has one. Empty strings count as absent.
    pub fn persisted_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

impl ReviewEntry {
    /// Builds an entry dated with the current server time.
    pub fn received(username: String, review: String) -> Self {
        Self {
            username,
            date: received_at(),
            review,
        }
    }
}

/// Current server time at the precision of the wire format.
pub fn received_at() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

pub mod entry_date {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// e.g. `2024-03-18T09:41:07.250+0000`
    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_str(&raw, FORMAT)
            .map(|date| date.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
