pub mod dto;
pub mod error;
pub mod metrics;
pub mod routes;
pub mod service;

pub use routes::{build_router, ApiState};
pub use service::{classify_text, select_backend};
