#![allow(clippy::module_name_repetitions)]
//! Docker adapter submodules, organized by responsibility.
//! Public APIs are re-exported from the crate root.

pub mod env;
pub mod exec;
pub mod gpu;
pub mod runtime;
