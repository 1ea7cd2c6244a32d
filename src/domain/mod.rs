//! Domain types: what a merchant tells us, what the catalog holds, and what
//! the engine hands back.

pub mod ports;
pub mod processor;
pub mod profile;
pub mod recommendation;
