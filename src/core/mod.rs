//! Core support functionality
//!
//! This module contains infrastructure shared by the rest of the crate,
//! currently the logging macros.

pub mod logging;
