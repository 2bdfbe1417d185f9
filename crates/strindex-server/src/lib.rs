//! HTTP server for strindex.
//!
//! A thin REST adapter over [`strindex_engine::Catalogue`]: handlers decode
//! the request, call one engine operation, and encode the result or map the
//! error to a status code with a `{"error": "..."}` body.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::HealthResponse;
pub use router::build_router;
pub use server::StrindexServer;
