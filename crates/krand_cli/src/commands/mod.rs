//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod array;
pub mod int;
pub mod matrix;
pub mod string;
