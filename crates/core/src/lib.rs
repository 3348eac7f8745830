//! Core types and errors for the session engine.

pub mod cart;
pub mod error;
pub mod keys;
pub mod session;

pub use cart::*;
pub use error::{Error, Result};
pub use keys::*;
pub use session::*;
