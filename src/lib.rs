//! Payment processor recommendation engine.
//!
//! Given a merchant's business profile and a catalog of processors, narrows
//! the catalog to eligible candidates, projects monthly cost, scores and
//! ranks them, and returns the best few.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::engine::recommend;
