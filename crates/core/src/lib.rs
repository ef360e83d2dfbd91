//! Domain logic for the room and furniture inventory.
//!
//! Everything here is pure: no database or HTTP types leak in, so the
//! persistence and API crates can share the same rules.

pub mod error;
pub mod fit;
pub mod session;
pub mod types;
pub mod validation;
