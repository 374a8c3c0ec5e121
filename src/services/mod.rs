//! Services Module
//!
//! Typed entry points over the request pipeline for the marketplace's
//! resources. Reads go through the cached GET path; writes never touch the
//! cache.

mod auth;
mod blogs;
mod lawyers;
mod questions;

pub use auth::AuthService;
pub use blogs::BlogService;
pub use lawyers::LawyerDirectory;
pub use questions::QuestionService;
