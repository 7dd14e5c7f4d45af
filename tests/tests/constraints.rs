//! Constraint binding, visibility and cloning across models.

use fmx_tests::prelude::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn names(model: &FeatureModel, ids: &[FeatureId]) -> Vec<String> {
    ids.iter()
        .map(|id| model.feature(*id).map(|f| f.name()).unwrap_or_default())
        .collect()
}

#[test]
fn test_binding_lists_features_in_formula_order() {
    // GIVEN a model with features A and B
    let mut model = ModelBuilder::new().roots(&["A", "B"]).build();

    // WHEN a constraint A & -B is added
    let index = model
        .add_constraint(Formula::and(vec![Formula::var("A"), Formula::not(Formula::var("B"))]))
        .unwrap();

    // THEN its contained features are [A, B]
    let constraint = model.constraint(index).unwrap();
    assert_eq!(names(&model, &constraint.contained_features()), vec!["A", "B"]);
    assert!(!constraint.is_selected());
}

#[test]
fn test_repeated_variable_is_listed_twice() {
    let mut model = ModelBuilder::new().roots(&["A", "B"]).build();

    let index = model
        .add_constraint(Formula::implies(
            Formula::var("A"),
            Formula::or(vec![Formula::var("B"), Formula::var("A")]),
        ))
        .unwrap();

    let constraint = model.constraint(index).unwrap();
    assert_eq!(names(&model, &constraint.contained_features()), vec!["A", "B", "A"]);
}

#[test]
fn test_hidden_ancestor_marks_constraint_hidden() {
    // GIVEN C below a hidden P, and a visible D
    let mut model = ModelBuilder::new()
        .root("Root")
        .child("Root", "P")
        .child("P", "C")
        .child("Root", "D")
        .hidden("P")
        .build();

    let over_c = model.add_constraint(Formula::var("C")).unwrap();
    let over_d = model.add_constraint(Formula::var("D")).unwrap();

    // THEN only the constraint over C reports hidden features
    assert!(model.constraint(over_c).unwrap().has_hidden_features(&model));
    assert!(!model.constraint(over_d).unwrap().has_hidden_features(&model));
}

#[test]
fn test_directly_hidden_feature_marks_constraint_hidden() {
    let mut model = ModelBuilder::new().roots(&["A", "B"]).hidden("B").build();

    let index = model
        .add_constraint(Formula::or(vec![Formula::var("A"), Formula::var("B")]))
        .unwrap();

    assert!(model.constraint(index).unwrap().has_hidden_features(&model));
}

#[test]
fn test_unknown_variable_is_rejected() {
    let mut model = ModelBuilder::new().roots(&["A"]).build();

    let result = model.add_constraint(Formula::and(vec![Formula::var("A"), Formula::var("Z")]));

    match result {
        Err(ModelError::Constraint(ConstraintError::UnresolvedVariable { name })) => {
            assert_eq!(name, "Z");
        }
        other => panic!("expected unresolved variable, got {:?}", other),
    }
    assert!(model.constraints().is_empty());
}

#[test]
fn test_failed_set_formula_keeps_previous_binding() {
    let mut model = ModelBuilder::new().roots(&["A", "B"]).build();
    let index = model.add_constraint(Formula::var("A")).unwrap();
    let constraint = model.constraint(index).unwrap();
    let before = constraint.binding();

    let result = constraint.set_formula(&model, Formula::var("Missing"));

    assert!(result.is_err());
    assert_eq!(constraint.formula(), Some(Formula::var("A")));
    assert!(Arc::ptr_eq(&before, &constraint.binding()));
}

#[test]
fn test_clone_into_model_without_feature_fails() {
    // GIVEN a constraint A & -B in a model with A and B
    let mut source = ModelBuilder::new().roots(&["A", "B"]).build();
    let index = source
        .add_constraint(Formula::and(vec![Formula::var("A"), Formula::not(Formula::var("B"))]))
        .unwrap();
    let target = ModelBuilder::new().roots(&["A"]).build();

    // WHEN it is cloned into a model lacking B
    let result = source.constraint(index).unwrap().clone_into(&target);

    // THEN the clone reports B as unresolved
    assert_eq!(result.err(), Some(ConstraintError::unresolved_variable("B")));
}

#[test]
fn test_clone_into_rebinds_by_name() {
    // GIVEN source features declared in a different order than the target's
    let mut source = ModelBuilder::new().roots(&["A", "B"]).build();
    let index = source
        .add_constraint(Formula::and(vec![Formula::var("A"), Formula::not(Formula::var("B"))]))
        .unwrap();
    let original = source.constraint(index).unwrap();
    original.set_description("exclusion");
    original.set_tags(["core"]);
    original.set_selected(true);

    let target = ModelBuilder::new().roots(&["X", "B", "A"]).build();

    // WHEN cloned
    let clone = original.clone_into(&target).unwrap();

    // THEN the clone points at the target's features and carries the metadata
    assert_eq!(clone.model_id(), target.id());
    assert_eq!(names(&target, &clone.contained_features()), vec!["A", "B"]);
    assert_eq!(
        clone.contained_features(),
        vec![
            target.feature_by_name("A").unwrap().id(),
            target.feature_by_name("B").unwrap().id(),
        ]
    );
    assert_eq!(clone.description(), "exclusion");
    assert_eq!(clone.tags().into_iter().collect::<Vec<_>>(), vec!["core"]);
    assert!(clone.is_selected());
    assert_ne!(clone.id(), original.id());
}

#[test]
fn test_clone_is_independent_of_original() {
    let mut source = ModelBuilder::new().roots(&["A"]).build();
    let index = source.add_constraint(Formula::var("A")).unwrap();
    let target = ModelBuilder::new().roots(&["A"]).build();
    let original = source.constraint(index).unwrap();
    original.set_tags(["before"]);

    let clone = original.clone_into(&target).unwrap();
    original.set_tags(["after"]);
    original.set_description("changed");

    assert_eq!(clone.tags().into_iter().collect::<Vec<_>>(), vec!["before"]);
    assert_eq!(clone.description(), "");
}

#[test]
fn test_constraint_from_other_model_is_refused() {
    let source = ModelBuilder::new().roots(&["A"]).build();
    let mut target = ModelBuilder::new().roots(&["A"]).build();
    let constraint = Constraint::new(&source, Formula::var("A")).unwrap();

    let result = target.push_constraint(constraint);

    assert!(matches!(result, Err(ModelError::ForeignConstraint { .. })));
}

#[test]
fn test_origin_is_carried_by_clone() {
    let mut source = ModelBuilder::new().roots(&["A"]).build();
    let index = source.add_constraint(Formula::var("A")).unwrap();
    let original = source.constraint(index).unwrap();
    original.set_origin(Origin::External("vendor.xml".to_string()));
    let target = ModelBuilder::new().roots(&["A"]).build();

    let clone = original.clone_into(&target).unwrap();

    assert!(clone.is_from_external_source());
    assert_eq!(
        clone.kind(),
        ConstraintKind::WithOrigin(Origin::External("vendor.xml".to_string()))
    );
}
