//! Response DTOs for the marketplace API
//!
//! Only the shapes the client itself relies on are typed; every other payload
//! is passed through as opaque JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body returned by `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer credential for subsequent calls
    pub token: String,
    /// The signed-in user record, stored verbatim in the session
    #[serde(default)]
    pub user: Value,
}
