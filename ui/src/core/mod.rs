//! Platform glue shared by components.

pub mod clipboard;
pub mod timing;
