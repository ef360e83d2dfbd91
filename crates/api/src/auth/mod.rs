//! Session primitives.
//!
//! - [`session`] -- signed session tokens carrying the login timestamp, plus
//!   the cookie that transports them to browsers.

pub mod session;
