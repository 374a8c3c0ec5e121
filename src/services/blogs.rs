//! Blog posts written by lawyers.

use serde_json::Value;

use crate::client::{ApiClient, ApiRequest, Transport};
use crate::error::Result;
use crate::models::PageQuery;

pub struct BlogService<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> BlogService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// `GET /blogs`
    pub async fn list_posts(&self, query: &PageQuery) -> Result<Value> {
        let request = ApiRequest::get("/blogs").with_query(query)?;
        self.client.send(request).await
    }

    /// `GET /blogs/{id}`
    pub async fn post(&self, id: &str) -> Result<Value> {
        self.client.get(&format!("/blogs/{}", id), None).await
    }
}
