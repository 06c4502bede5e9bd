use base64::{prelude::BASE64_STANDARD, Engine};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize)]
pub enum TokenType {
    Employee,
    Admin,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Employee => write!(f, "employee"),
            TokenType::Admin => write!(f, "admin"),
        }
    }
}

/// Access token carried on the wire: base64("<employee_id>.<api_key>").
pub fn construct_token(employee_id: i32, api_key: &str) -> String {
    BASE64_STANDARD.encode(format!("{employee_id}.{api_key}"))
}

/// Inverse of [`construct_token`]. `None` on anything that does not decode
/// to an `<id>.<key>` pair.
pub fn deconstruct_token(token: &str) -> Option<(i32, String)> {
    let raw = BASE64_STANDARD.decode(token).ok()?;
    let raw = String::from_utf8(raw).ok()?;
    let (id, key) = raw.split_once('.')?;
    Some((id.parse().ok()?, key.to_string()))
}

#[derive(Serialize, Deserialize)]
pub struct TokenRefreshRes {
    pub token: String,
}
