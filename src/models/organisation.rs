use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organisation {
    /// Caller-chosen primary key.
    pub code: i64,
    pub org_name: String,
    pub details: Option<String>,
}

impl Entity for Organisation {
    const TABLE: &'static str = "organisations";
    const KEY: &'static str = "code";
    const COLUMNS: &'static str = "code, org_name, details";
    const INSERT_COLUMNS: &'static [&'static str] = &["code", "org_name", "details"];
    const REQUIRED: &'static [&'static str] = &["code", "org_name", "details"];
    const SUBJECT: &'static str = "An organisation";

    fn column(field: &str) -> Option<&'static str> {
        match field {
            "code" => Some("code"),
            other => Self::mutable_column(other),
        }
    }

    fn mutable_column(field: &str) -> Option<&'static str> {
        match field {
            "org_name" => Some("org_name"),
            "details" => Some("details"),
            _ => None,
        }
    }
}
