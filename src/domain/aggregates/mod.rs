//! Aggregates module
pub mod candidate;
pub mod order;
pub mod product;

pub use candidate::FulfillmentCandidate;
pub use order::{FulfillmentOrder, OrderLineRequest};
pub use product::ProductTurnover;
