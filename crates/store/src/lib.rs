//! Session store for the session engine.

pub mod session_store;

pub use session_store::SessionStore;
