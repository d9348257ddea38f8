//! Configuration for unbarrel.
//!
//! Configuration lives in `unbarrel.toml` or in the `"unbarrel"` field of
//! `package.json`. Library users can skip discovery and build an
//! [`UnbarrelConfig`] directly or through [`UnbarrelConfig::from_value`].

pub mod config;
pub mod discovery;
pub mod error;
pub mod validation;

pub use config::*;
pub use error::*;

pub use discovery::{CONFIG_FILE_NAME, ConfigDiscovery, PACKAGE_JSON_FIELD};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
