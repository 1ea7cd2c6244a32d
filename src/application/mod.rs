//! Application layer: the recommendation engine and the services around it.
//!
//! The engine is a pure function over an in-memory catalog. Each step lives in
//! its own module so the business tables can be audited and tested in
//! isolation: vertical expansion, eligibility, cost projection, base score,
//! bonus rules, then ranking in `engine`.

pub mod bonus;
pub mod compare;
pub mod cost;
pub mod eligibility;
pub mod engine;
pub mod scoring;
pub mod service;
pub mod verticals;
