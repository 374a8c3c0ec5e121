//! Authentication service: sign-in, sign-out and the stored user record.

use serde_json::Value;
use tracing::{info, warn};

use crate::client::{ApiClient, Transport, TOKEN_KEY, USER_KEY};
use crate::error::{ApiError, Result};
use crate::models::{LoginRequest, LoginResponse};

pub struct AuthService<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> AuthService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    // == Login ==
    /// Signs in and stores the returned token and user record in the session.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        if let Some(error_msg) = request.validate() {
            return Err(ApiError::InvalidRequest(error_msg));
        }

        let body =
            serde_json::to_value(request).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        let value = self.client.post("/auth/login", body).await?;
        let response: LoginResponse =
            serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;

        let session = self.client.session();
        session.set(TOKEN_KEY, &response.token);
        session.set(USER_KEY, &response.user.to_string());
        info!(email = %request.email, "Signed in");

        Ok(response)
    }

    // == Logout ==
    /// Drops the session and every cached response fetched under it.
    pub async fn logout(&self) {
        self.client.session().clear_session();
        self.client.clear_cache().await;
        info!("Signed out");
    }

    // == Current User ==
    /// The user record stored at sign-in, if any.
    pub fn current_user(&self) -> Option<Value> {
        let raw = self.client.session().get(USER_KEY)?;
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Null) => None,
            Ok(user) => Some(user),
            Err(e) => {
                warn!(error = %e, "Stored user record is not valid JSON");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.session().token().is_some()
    }
}
