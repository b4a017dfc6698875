//! # Shopfloor Core
//!
//! Core types and utilities shared by the Shopfloor layout editor:
//! error taxonomy, geometry primitives, and editor-wide constants.

pub mod constants;
pub mod error;
pub mod geometry;

pub use error::{Error, Result};
pub use geometry::{Bounds, Point};
