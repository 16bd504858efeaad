//! HTTP API for Hisaab
//!
//! Serves statements as JSON and as printable HTML documents.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::{create_router, AppState};
pub use server::run_server;
