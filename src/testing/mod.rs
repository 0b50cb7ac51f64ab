//! Testing utilities and mock implementations
//!
//! Provides a recording progress sink and sample input so the pipeline can
//! be exercised without a terminal.

pub mod mocks;

pub use mocks::*;
