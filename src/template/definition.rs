//! Command definitions and parameter validation

use crate::error::{Error, Result};
use crate::types::{Action, Api, Entity};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Build the lookup key for an (action, entity) pair.
///
/// Keys are the lowercased action immediately followed by the lowercased
/// entity, e.g. `createinstance`.
pub fn definition_key(action: impl AsRef<str>, entity: impl AsRef<str>) -> String {
    format!(
        "{}{}",
        action.as_ref().to_lowercase(),
        entity.as_ref().to_lowercase()
    )
}

/// Parameter contract for one (action, entity) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    /// Verb
    pub action: Action,
    /// Target entity
    pub entity: Entity,
    /// API namespace implementing the action
    pub api: Api,
    /// Parameters that must be supplied, in display order
    pub required_params: Vec<String>,
    /// Parameters that may be supplied, in display order
    pub extra_params: Vec<String>,
}

impl Definition {
    /// Create a definition with no parameters
    pub fn new(action: Action, entity: Entity, api: Api) -> Self {
        Self {
            action,
            entity,
            api,
            required_params: Vec::new(),
            extra_params: Vec::new(),
        }
    }

    /// Set required parameters; repeated names keep their first position
    pub fn required<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_params = dedup(params);
        self
    }

    /// Set optional parameters; repeated names keep their first position
    pub fn extra<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_params = dedup(params);
        self
    }

    /// Lookup key of this definition
    pub fn key(&self) -> String {
        definition_key(self.action.as_str(), self.entity.as_str())
    }

    /// Whether `name` is required
    pub fn is_required(&self, name: &str) -> bool {
        self.required_params.iter().any(|p| p == name)
    }

    /// Whether `name` is accepted at all
    pub fn accepts(&self, name: &str) -> bool {
        self.is_required(name) || self.extra_params.iter().any(|p| p == name)
    }

    /// All accepted parameter names, required first
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.required_params
            .iter()
            .chain(self.extra_params.iter())
            .map(String::as_str)
    }

    /// One-line help text
    pub fn usage(&self) -> String {
        let mut parts = vec![self.action.to_string(), self.entity.to_string()];
        parts.extend(self.required_params.iter().map(|p| format!("{}=<{}>", p, p)));
        parts.extend(self.extra_params.iter().map(|p| format!("[{}=<{}>]", p, p)));
        parts.join(" ")
    }

    /// Check supplied parameter names against this definition.
    ///
    /// Every problem is collected; nothing short-circuits.
    pub fn validate<I, S>(&self, supplied: I) -> ValidationReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let supplied: BTreeSet<String> = supplied
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();

        let missing = self
            .required_params
            .iter()
            .filter(|p| !supplied.contains(p.as_str()))
            .cloned()
            .collect();

        let unrecognized = supplied
            .iter()
            .filter(|s| !self.accepts(s))
            .cloned()
            .collect();

        ValidationReport {
            key: self.key(),
            missing,
            unrecognized,
        }
    }

    /// Integrity problems within this definition
    pub(crate) fn problems(&self) -> Vec<String> {
        let key = self.key();
        let mut problems = Vec::new();

        for name in self.params() {
            if name.trim().is_empty() {
                problems.push(format!("{}: empty parameter name", key));
            }
        }

        for name in &self.required_params {
            if self.extra_params.contains(name) {
                problems.push(format!(
                    "{}: parameter '{}' is both required and extra",
                    key, name
                ));
            }
        }

        problems
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key(), self.api)
    }
}

fn dedup<I, S>(params: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    params
        .into_iter()
        .map(Into::into)
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

/// Outcome of checking supplied parameters against a definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Key of the definition checked against
    pub key: String,
    /// Required parameters not supplied, in declaration order
    pub missing: Vec<String>,
    /// Supplied parameters the definition does not accept, sorted
    pub unrecognized: Vec<String>,
}

impl ValidationReport {
    /// True when nothing is missing and nothing is unrecognized
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty() && self.unrecognized.is_empty()
    }

    /// Convert into a result, reporting every problem at once
    pub fn into_result(self) -> Result<()> {
        let mut errors = Vec::new();
        if !self.missing.is_empty() {
            errors.push(Error::MissingRequiredParameters {
                key: self.key.clone(),
                params: self.missing,
            });
        }
        if !self.unrecognized.is_empty() {
            errors.push(Error::UnrecognizedParameters {
                key: self.key,
                params: self.unrecognized,
            });
        }
        Error::from_many(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_instance() -> Definition {
        Definition::new(Action::Create, Entity::Instance, Api::Ec2)
            .required(["image", "count", "count", "type", "subnet"])
            .extra(["keypair", "ip", "userdata", "securitygroup", "lock"])
    }

    #[test]
    fn test_definition_key() {
        assert_eq!(definition_key("create", "instance"), "createinstance");
        assert_eq!(definition_key("Create", "KeyPair"), "createkeypair");
        assert_eq!(create_instance().key(), "createinstance");
    }

    #[test]
    fn test_required_params_are_deduplicated() {
        let def = create_instance();
        assert_eq!(def.required_params, vec!["image", "count", "type", "subnet"]);
    }

    #[test]
    fn test_validate_success() {
        let def = create_instance();
        let report = def.validate(["image", "count", "type", "subnet", "keypair"]);
        assert!(report.is_valid());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_validate_collects_all_problems() {
        let def = create_instance();
        let report = def.validate(["image", "typo", "imgae"]);
        assert_eq!(report.missing, vec!["count", "type", "subnet"]);
        assert_eq!(report.unrecognized, vec!["imgae", "typo"]);

        match report.into_result() {
            Err(Error::Multiple(errors)) => {
                assert!(matches!(errors[0], Error::MissingRequiredParameters { .. }));
                assert!(matches!(errors[1], Error::UnrecognizedParameters { .. }));
            }
            other => panic!("expected both errors, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_ignores_repeated_supplied_names() {
        let def = Definition::new(Action::Create, Entity::KeyPair, Api::Ec2).required(["name"]);
        let report = def.validate(["name", "name"]);
        assert!(report.is_valid());
    }

    #[test]
    fn test_usage() {
        let def = Definition::new(Action::Attach, Entity::Volume, Api::Ec2)
            .required(["id", "instance"])
            .extra(["force"]);
        assert_eq!(
            def.usage(),
            "attach volume id=<id> instance=<instance> [force=<force>]"
        );
    }

    #[test]
    fn test_overlap_is_a_problem() {
        let def = Definition::new(Action::Create, Entity::Tag, Api::Ec2)
            .required(["key"])
            .extra(["key", ""]);
        let problems = def.problems();
        assert_eq!(problems.len(), 2);
        assert!(problems.iter().any(|p| p.contains("both required and extra")));
    }
}
