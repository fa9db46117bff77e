//! Utility modules for stripfix.

pub mod text;
