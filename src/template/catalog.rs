//! Entity catalog: membership checks against the closed entity vocabulary

use crate::types::Entity;

/// Minimum Jaro-Winkler similarity for a suggestion to be offered
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// True iff `name` is a recognized entity (including `none`)
pub fn is_valid_entity(name: &str) -> bool {
    Entity::all().any(|e| e.as_str() == name)
}

/// Negation of [`is_valid_entity`]
pub fn is_invalid_entity(name: &str) -> bool {
    !is_valid_entity(name)
}

/// Closest entity to an unrecognized name, if any is close enough
pub fn suggest_entity(name: &str, threshold: f64) -> Option<Entity> {
    let name = name.to_lowercase();
    Entity::all()
        .filter(|e| *e != Entity::None)
        .map(|e| (e, strsim::jaro_winkler(&name, e.as_str())))
        .filter(|(_, score)| *score >= threshold)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(e, _)| e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_entities() {
        assert!(is_valid_entity("instance"));
        assert!(is_valid_entity("none"));
        assert!(is_valid_entity("s3object"));
        assert!(!is_invalid_entity("instance"));
    }

    #[test]
    fn test_unknown_entities() {
        assert!(is_invalid_entity("wormhole"));
        assert!(is_invalid_entity(""));
        assert!(is_invalid_entity("INSTANCE"));
        assert!(is_invalid_entity(" instance"));
    }

    #[test]
    fn test_suggest_entity() {
        assert_eq!(
            suggest_entity("instnace", SUGGESTION_THRESHOLD),
            Some(Entity::Instance)
        );
        assert_eq!(
            suggest_entity("securitygrp", SUGGESTION_THRESHOLD),
            Some(Entity::SecurityGroup)
        );
        assert_eq!(suggest_entity("wormhole", SUGGESTION_THRESHOLD), None);
    }
}
