//! Request Pipeline
//!
//! Wraps every outgoing call with the client-side policy: bearer token
//! attachment, cache-aside for GET requests, session teardown on 401 and
//! slow-call logging.
//!
//! A GET moves through these states:
//! `issued -> lookup -> hit (resolved from cache)` or
//! `issued -> lookup -> miss -> network -> stored | session reset | rejected`.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, error, warn};

use crate::cache::{CacheLookup, CacheStats, SimpleCache};
use crate::client::key::Params;
use crate::client::request::{ApiRequest, Method};
use crate::client::session::{MemorySessionStore, SessionStore};
use crate::client::transport::{HttpTransport, Transport};
use crate::client::unauthorized::{LoginRedirect, UnauthorizedHandler};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Response cache shared between the pipeline and anyone else holding it.
pub type SharedCache = Arc<RwLock<SimpleCache>>;

/// Header carrying the bearer credential.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

// == Api Client ==
/// HTTP client for the remote API with cache-aside GETs.
///
/// The cache lock is only held for a single lookup or store, never across the
/// network call. Two concurrent misses for the same key therefore both reach
/// the transport and both store their result; the later write wins.
pub struct ApiClient<T: Transport = HttpTransport> {
    transport: T,
    cache: SharedCache,
    session: Arc<dyn SessionStore>,
    on_unauthorized: Arc<dyn UnauthorizedHandler>,
    login_route: String,
    slow_call_threshold: Duration,
}

impl ApiClient<HttpTransport> {
    /// Builds a client with the reqwest transport described by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(HttpTransport::from_config(config)?, config))
    }
}

impl<T: Transport> ApiClient<T> {
    // == Constructor ==
    /// Creates a client with its own cache, an in-memory session and the
    /// logging login redirect.
    pub fn new(transport: T, config: &Config) -> Self {
        Self {
            transport,
            cache: Arc::new(RwLock::new(SimpleCache::from_config(config))),
            session: Arc::new(MemorySessionStore::new()),
            on_unauthorized: Arc::new(LoginRedirect),
            login_route: config.login_route.clone(),
            slow_call_threshold: config.slow_call_threshold(),
        }
    }

    /// Uses `cache` instead of the client's own.
    pub fn with_cache(mut self, cache: SharedCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_session_store(mut self, session: Arc<dyn SessionStore>) -> Self {
        self.session = session;
        self
    }

    pub fn with_unauthorized_handler(mut self, handler: impl UnauthorizedHandler + 'static) -> Self {
        self.on_unauthorized = Arc::new(handler);
        self
    }

    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    // == Pre-flight ==
    /// Attaches the bearer token and, for GETs, remembers the cache key.
    fn prepare(&self, mut request: ApiRequest) -> ApiRequest {
        if let Some(token) = self.session.token() {
            request
                .headers
                .insert(AUTHORIZATION_HEADER.to_string(), format!("Bearer {}", token));
        }
        if request.method == Method::Get {
            request.cache_key = Some(request.derive_cache_key());
        }
        request
    }

    async fn lookup(&self, request: &ApiRequest) -> CacheLookup {
        match &request.cache_key {
            Some(key) => self.cache.write().await.lookup(key),
            None => CacheLookup::Miss,
        }
    }

    // == Post-flight ==
    /// Stores successful GET payloads and resets the session on a 401.
    async fn complete(&self, request: &ApiRequest, outcome: Result<Value>) -> Result<Value> {
        match outcome {
            Ok(value) => {
                if let Some(key) = &request.cache_key {
                    self.cache.write().await.set(key.clone(), value.clone());
                }
                Ok(value)
            }
            Err(err) if err.status() == Some(401) => {
                self.reset_session(&request.path);
                Err(ApiError::Unauthorized)
            }
            Err(err) => Err(err),
        }
    }

    fn reset_session(&self, path: &str) {
        warn!(endpoint = %path, "Authentication rejected, clearing session");
        self.session.clear_session();
        self.on_unauthorized.on_unauthorized(&self.login_route);
    }

    // == Execute ==
    /// Runs a request through the pipeline without instrumentation.
    pub async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let request = self.prepare(request);

        if let CacheLookup::Hit(value) = self.lookup(&request).await {
            debug!(endpoint = %request.path, "Served from cache");
            return Ok(value);
        }

        let outcome = self.transport.send(&request).await;
        self.complete(&request, outcome).await
    }

    // == Send ==
    /// Runs a request through the pipeline; GETs are timed and logged.
    pub async fn send(&self, request: ApiRequest) -> Result<Value> {
        if request.method != Method::Get {
            return self.execute(request).await;
        }

        let endpoint = request.path.clone();
        let started = Instant::now();
        let result = self.execute(request).await;
        let elapsed = started.elapsed();
        let elapsed_ms = elapsed.as_millis() as u64;

        match &result {
            Ok(_) if elapsed > self.slow_call_threshold => {
                warn!(endpoint = %endpoint, elapsed_ms, "Slow API call");
            }
            Ok(_) => {}
            Err(err) => {
                error!(endpoint = %endpoint, elapsed_ms, error = %err, "API call failed");
            }
        }
        result
    }

    // == Convenience Verbs ==
    pub async fn get(&self, path: &str, params: Option<Params>) -> Result<Value> {
        let mut request = ApiRequest::get(path);
        request.params = params;
        self.send(request).await
    }

    /// GET decoded into `R`.
    pub async fn get_as<R: DeserializeOwned>(&self, path: &str, params: Option<Params>) -> Result<R> {
        let value = self.get(path, params).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.send(ApiRequest::new(Method::Post, path).with_body(body))
            .await
    }

    pub async fn put(&self, path: &str, body: Value) -> Result<Value> {
        self.send(ApiRequest::new(Method::Put, path).with_body(body))
            .await
    }

    pub async fn patch(&self, path: &str, body: Value) -> Result<Value> {
        self.send(ApiRequest::new(Method::Patch, path).with_body(body))
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.send(ApiRequest::new(Method::Delete, path)).await
    }

    // == Cache Maintenance ==
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }
}
