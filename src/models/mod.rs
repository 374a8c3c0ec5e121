//! Request and Response models for the marketplace API
//!
//! This module defines the DTOs (Data Transfer Objects) the services send and
//! the few response shapes they decode.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{LawyerSearch, LoginRequest, NewQuestion, PageQuery};
pub use responses::LoginResponse;
