// cloudtmpl: Template definition registry for cloud infrastructure commands
// Copyright (c) 2024 cloudtmpl Core Team

//! # cloudtmpl Library
//!
//! Declares, for every supported (action, entity) pair of a cloud template
//! command, the owning API namespace and the required and optional
//! parameters, and rejects unknown entities, unknown commands and malformed
//! parameter sets before anything reaches a cloud provider.
//!
//! ```
//! use cloudtmpl::template::DefinitionRegistry;
//!
//! let registry = DefinitionRegistry::builtin();
//! let def = registry.lookup("createtag").unwrap();
//! let report = def.validate(["resource"]);
//! assert_eq!(report.missing, vec!["key", "value"]);
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_qualifications,
    missing_debug_implementations
)]
#![forbid(unsafe_code)]

// Core modules
pub mod config;
pub mod error;
pub mod output;
pub mod paths;
pub mod template;
pub mod types;

// Re-exports for convenience
pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::template::{
    definition_key, is_invalid_entity, is_valid_entity, Definition, DefinitionRegistry,
    ValidationReport,
};
pub use crate::types::{Action, Api, Entity};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::template::{
        definition_key, is_invalid_entity, is_valid_entity, Definition, DefinitionRegistry,
        ValidationReport,
    };
    pub use crate::types::{Action, Api, Entity};
}
