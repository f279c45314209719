//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Paths into the raw config tree               |
//! | `handle` | Shared model handle (atomic reload)          |

mod error;
mod field;
pub mod handle;

pub use error::ConfigError;
pub use field::FieldPath;
pub use handle::ModelHandle;
