//! Shared types, errors, and input rules for the tavern character registry.
//!
//! This crate has zero internal dependencies so it can be used by both the
//! repository layer and the HTTP layer.

pub mod character;
pub mod error;
pub mod types;
