use serde::{Deserialize, Serialize};

/// A registered user as stored in `users.json`.
///
/// The password is kept in plaintext. This store is for local demos only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}

/// Signup / login body. Missing fields deserialize as empty and fail length checks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
