//! Core utilities shared by the cycle and its drivers

pub mod error;
pub mod logging;
pub mod time;

pub use error::{Error, Result};
