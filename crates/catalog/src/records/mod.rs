//! Per-collection record shapes and their response aliases.

pub mod catalog;
pub mod commerce;
pub mod content;
pub mod system;

pub use catalog::*;
pub use commerce::*;
pub use content::*;
pub use system::*;
