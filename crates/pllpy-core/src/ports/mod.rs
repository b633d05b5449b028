//! Port definitions implemented by adapters.
//!
//! Core owns the traits; `pllpy-runtime` owns implementations that shell out
//! to external tools.

mod resource_locator;

pub use resource_locator::{ResourceError, ResourceLocator};
