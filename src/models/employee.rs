use serde::{Deserialize, Serialize};

use super::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub address: Option<String>,
    /// References `organisations.code`; checked by the store on commit.
    pub org_code: Option<i64>,
}

impl Entity for Employee {
    const TABLE: &'static str = "employee";
    const KEY: &'static str = "id";
    const COLUMNS: &'static str = "id, fname, lname, email, address, org_code";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["fname", "lname", "email", "address", "org_code"];
    const REQUIRED: &'static [&'static str] = &["fname", "lname", "email", "org_code"];
    const SUBJECT: &'static str = "An employee";

    fn column(field: &str) -> Option<&'static str> {
        match field {
            "id" => Some("id"),
            other => Self::mutable_column(other),
        }
    }

    fn mutable_column(field: &str) -> Option<&'static str> {
        match field {
            "fname" => Some("fname"),
            "lname" => Some("lname"),
            "email" => Some("email"),
            "address" => Some("address"),
            "org_code" => Some("org_code"),
            _ => None,
        }
    }
}
