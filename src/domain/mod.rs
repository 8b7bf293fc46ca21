//! Fulfillment domain: value objects, aggregates and the pure scoring services.
pub mod aggregates;
pub mod scoring;
pub mod value_objects;
