pub mod core;
pub mod error;
pub mod providers;

// re-exports
pub use error::{Error, Result};
