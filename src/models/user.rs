use serde::{Deserialize, Serialize};

use super::Entity;

/// Entry in the standalone user registry. No relation to organisations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub gender: Option<String>,
    pub contact_info: Option<String>,
    pub address: Option<String>,
    pub mobile_no: String,
}

impl Entity for User {
    const TABLE: &'static str = "users";
    const KEY: &'static str = "id";
    const COLUMNS: &'static str =
        "id, fname, lname, email, gender, contact_info, address, mobile_no";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "fname",
        "lname",
        "email",
        "gender",
        "contact_info",
        "address",
        "mobile_no",
    ];
    const REQUIRED: &'static [&'static str] = &["fname", "lname", "email", "mobile_no"];
    const SUBJECT: &'static str = "A user";

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
            "gender" => Some("gender"),
            "contact_info" => Some("contact_info"),
            "address" => Some("address"),
            "mobile_no" => Some("mobile_no"),
            _ => None,
        }
    }

    fn field_label(column: &str) -> &str {
        match column {
            "mobile_no" => "mobile number",
            other => other,
        }
    }
}
