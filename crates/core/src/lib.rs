//! Core types for mapstore
//!
//! This crate defines the types shared by every layer:
//! - [`Value`]: the tagged value stored under each key
//! - [`Path`] / [`PathSegment`]: addresses into nested values
//! - [`Method`]: operation identity carried by request records
//! - [`Error`] / [`Result`]: crate-wide error handling

#![warn(missing_docs)]

pub mod error;
pub mod method;
pub mod path;
pub mod value;

pub use error::{Error, Result};
pub use method::Method;
pub use path::{Path, PathSegment};
pub use value::Value;
