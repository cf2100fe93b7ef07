//! Australian income tax and superannuation scenario calculator.
//!
//! [`crate::core::evaluate`] turns a [`crate::core::ScenarioInput`] into a single-year
//! [`crate::core::ScenarioSnapshot`] with a multi-year balance projection. The
//! [`cmd`] module holds the command line front end.

pub mod cmd;
pub mod core;
