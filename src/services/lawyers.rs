//! Lawyer directory: search and profiles.

use serde_json::Value;

use crate::client::{ApiClient, ApiRequest, Transport};
use crate::error::Result;
use crate::models::LawyerSearch;

pub struct LawyerDirectory<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> LawyerDirectory<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// `GET /lawyers` with the given filters.
    pub async fn search(&self, filters: &LawyerSearch) -> Result<Value> {
        let request = ApiRequest::get("/lawyers").with_query(filters)?;
        self.client.send(request).await
    }

    /// `GET /lawyers/{id}`
    pub async fn profile(&self, id: &str) -> Result<Value> {
        self.client.get(&format!("/lawyers/{}", id), None).await
    }
}
