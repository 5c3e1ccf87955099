//! Property tests for the entity catalog and definition validation

use cloudtmpl::template::{is_invalid_entity, is_valid_entity, DefinitionRegistry};
use cloudtmpl::types::Entity;
use proptest::prelude::*;

proptest! {
    #[test]
    fn entity_checks_agree(name in ".*") {
        prop_assert_eq!(is_valid_entity(&name), !is_invalid_entity(&name));
    }

    #[test]
    fn names_outside_vocabulary_are_invalid(name in "[a-z0-9]{1,24}") {
        let known = Entity::all().any(|e| e.as_str() == name);
        prop_assume!(!known);
        prop_assert!(!is_valid_entity(&name));
        prop_assert!(is_invalid_entity(&name));
        prop_assert!(name.parse::<Entity>().is_err());
    }

    #[test]
    fn supplying_exactly_the_required_params_is_valid(index in 0usize..200) {
        let registry = DefinitionRegistry::builtin();
        let def = registry.iter().nth(index % registry.len()).unwrap();
        let report = def.validate(&def.required_params);
        prop_assert!(report.is_valid(), "{}", def.key());
    }

    #[test]
    fn unknown_names_are_always_reported(
        index in 0usize..200,
        name in "zz[a-z]{3,8}",
    ) {
        let registry = DefinitionRegistry::builtin();
        let def = registry.iter().nth(index % registry.len()).unwrap();
        let mut supplied = def.required_params.clone();
        supplied.push(name.clone());

        let report = def.validate(&supplied);
        prop_assert!(report.missing.is_empty());
        prop_assert_eq!(report.unrecognized, vec![name]);
    }
}

#[test]
fn every_entity_is_valid() {
    for entity in Entity::all() {
        assert!(is_valid_entity(entity.as_str()));
        assert_eq!(entity.as_str().parse::<Entity>().unwrap(), entity);
    }
}
