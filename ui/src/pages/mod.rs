//! Routed pages.

pub mod ignis;
pub use ignis::PageIgnis;
