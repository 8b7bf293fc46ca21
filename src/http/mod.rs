//! JSON-over-HTTP surface for the scoring services.
//!
//! All endpoints are idempotent and side-effect free; the candidate network is an
//! immutable snapshot loaded at startup.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
