//! Client Module
//!
//! The request pipeline and its collaborators.
//!
//! # Pieces
//! - `ApiClient` - cache-aside GETs, bearer token, 401 teardown, slow-call log
//! - `Transport` - network boundary (`HttpTransport` over reqwest)
//! - `SessionStore` - persisted token and user record
//! - `UnauthorizedHandler` - what happens after a 401

mod key;
mod pipeline;
mod request;
mod session;
mod transport;
mod unauthorized;

#[cfg(test)]
pub(crate) mod testing;

pub use key::{cache_key, normalize_path, query_pairs, Params};
pub use pipeline::{ApiClient, SharedCache, AUTHORIZATION_HEADER};
pub use request::{ApiRequest, Method};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, TOKEN_KEY, USER_KEY};
pub use transport::{HttpTransport, Transport};
pub use unauthorized::{LoginRedirect, UnauthorizedHandler};
