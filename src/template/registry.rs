//! Definition registry: immutable lookup table of command definitions

use super::builtin::builtin_definitions;
use super::catalog::{is_invalid_entity, SUGGESTION_THRESHOLD};
use super::definition::{definition_key, Definition, ValidationReport};
use crate::error::{Error, Result};
use crate::types::{Action, Entity};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Immutable table of definitions keyed by `action` + `entity`.
///
/// Built once and shared by reference; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct DefinitionRegistry {
    definitions: BTreeMap<String, Definition>,
}

impl DefinitionRegistry {
    /// Registry holding every built-in definition
    pub fn builtin() -> Self {
        let mut definitions = BTreeMap::new();
        for def in builtin_definitions() {
            definitions.insert(def.key(), def);
        }
        info!(definitions = definitions.len(), "Built definition registry");
        Self { definitions }
    }

    /// Registry holding only the given definitions.
    ///
    /// Two definitions sharing a key are rejected.
    pub fn from_definitions<I>(defs: I) -> Result<Self>
    where
        I: IntoIterator<Item = Definition>,
    {
        let mut definitions = BTreeMap::new();
        for def in defs {
            let key = def.key();
            if definitions.contains_key(&key) {
                return Err(Error::registry(format!("duplicate definition key: {}", key)));
            }
            definitions.insert(key, def);
        }
        debug!(definitions = definitions.len(), "Built definition registry from subset");
        Ok(Self { definitions })
    }

    /// Exact-match lookup by key
    pub fn lookup(&self, key: &str) -> Option<&Definition> {
        let found = self.definitions.get(key);
        if found.is_none() {
            debug!(key, "Definition lookup missed");
        }
        found
    }

    /// Lookup by action and entity tokens.
    ///
    /// Entity tokens outside the vocabulary fail with `UnknownEntity` before
    /// the table is consulted.
    pub fn get(&self, action: &str, entity: &str) -> Result<&Definition> {
        if is_invalid_entity(entity) {
            return Err(Error::UnknownEntity(entity.to_string()));
        }
        let key = definition_key(action, entity);
        self.lookup(&key).ok_or_else(|| Error::unknown_definition(key))
    }

    /// Resolve a definition and check supplied parameter names against it
    pub fn validate<I, S>(
        &self,
        action: &str,
        entity: &str,
        supplied: I,
    ) -> Result<ValidationReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let def = self.get(action, entity)?;
        let report = def.validate(supplied);
        if !report.is_valid() {
            debug!(
                key = %report.key,
                missing = ?report.missing,
                unrecognized = ?report.unrecognized,
                "Command failed validation"
            );
        }
        Ok(report)
    }

    /// Whether a key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.definitions.contains_key(key)
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True if no definitions are registered
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definitions in key order
    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.values()
    }

    /// Registered keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Definitions targeting an entity
    pub fn for_entity(&self, entity: Entity) -> Vec<&Definition> {
        self.iter().filter(|d| d.entity == entity).collect()
    }

    /// Definitions using an action
    pub fn for_action(&self, action: Action) -> Vec<&Definition> {
        self.iter().filter(|d| d.action == action).collect()
    }

    /// Actions available on an entity, in declaration order
    pub fn actions_for(&self, entity: Entity) -> Vec<Action> {
        let mut actions: Vec<Action> =
            self.for_entity(entity).iter().map(|d| d.action).collect();
        actions.sort();
        actions.dedup();
        actions
    }

    /// Keys starting with `prefix`
    pub fn complete(&self, prefix: &str) -> Vec<&str> {
        self.keys().filter(|k| k.starts_with(prefix)).collect()
    }

    /// Closest registered key, for "did you mean" hints
    pub fn suggest(&self, key: &str) -> Option<&str> {
        self.suggest_with_threshold(key, SUGGESTION_THRESHOLD)
    }

    /// Closest registered key scoring at least `threshold`
    pub fn suggest_with_threshold(&self, key: &str, threshold: f64) -> Option<&str> {
        let key = key.to_lowercase();
        self.keys()
            .map(|k| (k, strsim::jaro_winkler(&key, k)))
            .filter(|(_, score)| *score >= threshold)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(k, _)| k)
    }

    /// Check integrity of every definition, reporting all problems together
    pub fn self_check(&self) -> Result<()> {
        let mut errors = Vec::new();

        for (key, def) in &self.definitions {
            if *key != def.key() {
                errors.push(Error::registry(format!(
                    "{}: key does not match {}",
                    key,
                    def.key()
                )));
            }
            if is_invalid_entity(def.entity.as_str()) {
                errors.push(Error::registry(format!(
                    "{}: unknown entity {}",
                    key, def.entity
                )));
            }
            errors.extend(def.problems().into_iter().map(Error::Registry));
        }

        for err in &errors {
            warn!("Registry self-check: {}", err);
        }
        Error::from_many(errors)
    }
}

impl Default for DefinitionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
