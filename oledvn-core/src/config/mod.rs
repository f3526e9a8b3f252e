//! Configuration types and default timing tables
//!
//! Optional parameters are `Option`s; `None` resolves to the matching
//! `DEFAULT_*` constant before any step arithmetic uses it.

pub mod defaults;
pub mod types;

pub use defaults::*;
pub use types::*;
