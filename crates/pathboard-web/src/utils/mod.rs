//! Frontend utilities

pub mod export;
