//! Public Q&A: clients ask, lawyers answer.

use serde_json::Value;

use crate::client::{ApiClient, ApiRequest, Transport};
use crate::error::{ApiError, Result};
use crate::models::{NewQuestion, PageQuery};

pub struct QuestionService<'a, T: Transport> {
    client: &'a ApiClient<T>,
}

impl<'a, T: Transport> QuestionService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// `GET /questions`
    pub async fn list(&self, query: &PageQuery) -> Result<Value> {
        let request = ApiRequest::get("/questions").with_query(query)?;
        self.client.send(request).await
    }

    /// `POST /questions`
    pub async fn ask(&self, question: &NewQuestion) -> Result<Value> {
        if let Some(error_msg) = question.validate() {
            return Err(ApiError::InvalidRequest(error_msg));
        }
        let body =
            serde_json::to_value(question).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.client.post("/questions", body).await
    }
}
