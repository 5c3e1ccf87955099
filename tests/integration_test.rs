//! Integration tests for cloudtmpl

use cloudtmpl::{
    config::Config,
    error::Error,
    template::{definition_key, is_invalid_entity, is_valid_entity, DefinitionRegistry},
    types::{Action, Api, Entity},
};
use std::sync::Arc;

#[test]
fn test_lookup_createkeypair() {
    let registry = DefinitionRegistry::builtin();
    let def = registry.lookup("createkeypair").unwrap();

    assert_eq!(def.action, Action::Create);
    assert_eq!(def.entity, Entity::KeyPair);
    assert_eq!(def.api, Api::Ec2);
    assert_eq!(def.required_params, vec!["name"]);
    assert!(def.extra_params.is_empty());

    let report = def.validate(["name"]);
    assert!(report.is_valid());
    assert!(report.missing.is_empty());
    assert!(report.unrecognized.is_empty());
}

#[test]
fn test_createtag_reports_missing_params() {
    let registry = DefinitionRegistry::builtin();
    let report = registry.lookup("createtag").unwrap().validate(["resource"]);

    assert_eq!(report.missing, vec!["key", "value"]);
    assert!(report.unrecognized.is_empty());

    match report.into_result() {
        Err(Error::MissingRequiredParameters { key, params }) => {
            assert_eq!(key, "createtag");
            assert_eq!(params, vec!["key", "value"]);
        }
        other => panic!("expected missing parameters, got {:?}", other),
    }
}

#[test]
fn test_createkeypair_reports_unrecognized_param() {
    let registry = DefinitionRegistry::builtin();
    let report = registry
        .lookup("createkeypair")
        .unwrap()
        .validate(["name", "region"]);

    assert!(report.missing.is_empty());
    assert_eq!(report.unrecognized, vec!["region"]);
    assert!(matches!(
        report.into_result(),
        Err(Error::UnrecognizedParameters { .. })
    ));
}

#[test]
fn test_unknown_key() {
    let registry = DefinitionRegistry::builtin();
    assert!(registry.lookup("deletewormhole").is_none());
    assert!(matches!(
        registry.get("delete", "wormhole"),
        Err(Error::UnknownEntity(_))
    ));
    assert!(matches!(
        registry.get("start", "bucket"),
        Err(Error::UnknownDefinition { .. })
    ));
}

#[test]
fn test_unknown_entity() {
    assert!(is_invalid_entity("wormhole"));
    assert!(!is_invalid_entity("instance"));
    assert!(is_valid_entity("none"));
}

#[test]
fn test_createinstance_deduplicates_required_params() {
    let registry = DefinitionRegistry::builtin();
    let def = registry.lookup("createinstance").unwrap();
    assert_eq!(def.required_params, vec!["image", "count", "type", "subnet"]);
    assert_eq!(
        def.extra_params,
        vec!["keypair", "ip", "userdata", "securitygroup", "lock", "name"]
    );
    assert!(def.accepts("name"));
    assert!(def.validate(["image", "count", "type", "subnet", "name"]).is_valid());
}

#[test]
fn test_every_definition_references_a_valid_entity() {
    let registry = DefinitionRegistry::builtin();
    for def in registry.iter() {
        assert!(is_valid_entity(def.entity.as_str()), "{}", def.key());
    }
}

#[test]
fn test_required_and_extra_do_not_overlap() {
    let registry = DefinitionRegistry::builtin();
    for def in registry.iter() {
        for name in &def.required_params {
            assert!(
                !def.extra_params.contains(name),
                "{} lists '{}' as both required and extra",
                def.key(),
                name
            );
        }
    }
}

#[test]
fn test_keys_follow_convention() {
    let registry = DefinitionRegistry::builtin();
    for (key, def) in registry.keys().zip(registry.iter()) {
        assert_eq!(key, definition_key(def.action.as_str(), def.entity.as_str()));
    }
}

#[test]
fn test_repeated_lookups_are_identical() {
    let registry = DefinitionRegistry::builtin();
    for key in registry.keys() {
        assert_eq!(registry.lookup(key), registry.lookup(key));
    }
    assert_eq!(
        DefinitionRegistry::builtin().lookup("createinstance"),
        registry.lookup("createinstance")
    );
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = Arc::new(DefinitionRegistry::builtin());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                registry
                    .validate("create", "keypair", ["name"])
                    .map(|r| r.is_valid())
                    .unwrap_or(false)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_every_entity_but_none_has_a_definition() {
    let registry = DefinitionRegistry::builtin();
    for entity in Entity::all().filter(|e| *e != Entity::None) {
        assert!(
            !registry.actions_for(entity).is_empty(),
            "no definitions for {}",
            entity
        );
    }
}

#[test]
fn test_config_save_and_load() {
    use tempfile::TempDir;

    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.registry.suggestions = false;

    for ext in ["yaml", "toml", "json"] {
        let path = dir.path().join(format!("cloudtmpl.{}", ext));
        assert!(config.save(&path).is_ok());

        let loaded = Config::from_file(&path).unwrap();
        assert!(!loaded.registry.suggestions);
        assert!(loaded.validate().is_ok());
    }
}

#[test]
fn test_config_rejects_unknown_extension() {
    let config = Config::default();
    assert!(matches!(
        config.save("cloudtmpl.ini"),
        Err(Error::Config(_))
    ));
}
