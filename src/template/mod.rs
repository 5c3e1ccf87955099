//! Template definition registry for cloudtmpl
//!
//! Declares, for every supported (action, entity) pair, which parameters are
//! required and which are optional, and which entity names are legal.

// Module declarations
mod builtin;
mod catalog;
mod definition;
mod registry;

pub use builtin::builtin_definitions;
pub use catalog::{is_invalid_entity, is_valid_entity, suggest_entity, SUGGESTION_THRESHOLD};
pub use definition::{definition_key, Definition, ValidationReport};
pub use registry::DefinitionRegistry;
