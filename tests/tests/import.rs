//! Importing constraints between models.

use fmx_tests::prelude::*;
use fmx_model::SkippedConstraint;
use pretty_assertions::assert_eq;

fn source() -> FeatureModel {
    let mut model = ModelBuilder::new().roots(&["A", "B", "C"]).build();
    model.add_constraint(Formula::var("A")).unwrap();
    model
        .add_constraint(Formula::implies(Formula::var("A"), Formula::var("B")))
        .unwrap();
    model
        .add_constraint(Formula::or(vec![Formula::var("C"), Formula::var("A")]))
        .unwrap();
    model
}

#[test]
fn test_fail_fast_import_adds_nothing_on_error() {
    // GIVEN a target lacking B
    let source = source();
    let mut target = ModelBuilder::new().roots(&["A", "C"]).build();

    // WHEN importing with the default policy
    let result = target.import_constraints(&source);

    // THEN the import fails and the target is untouched
    assert_eq!(
        result.err(),
        Some(ModelError::Constraint(ConstraintError::unresolved_variable("B")))
    );
    assert!(target.constraints().is_empty());
}

#[test]
fn test_skip_import_reports_unresolved() {
    let source = source();
    let mut target = ModelBuilder::new().roots(&["A", "C"]).build();

    let report = target.import_constraints_with(&source, ImportPolicy::Skip).unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(
        report.skipped,
        vec![SkippedConstraint {
            index: 1,
            variable: "B".to_string(),
        }]
    );
    let formulas: Vec<_> = target.constraints().iter().map(|c| c.formula()).collect();
    assert_eq!(
        formulas,
        vec![
            Some(Formula::var("A")),
            Some(Formula::or(vec![Formula::var("C"), Formula::var("A")])),
        ]
    );
}

#[test]
fn test_policy_from_json_config() {
    let config = ModelConfig::from_json(r#"{ "import_policy": "skip", "tag_imported_origin": true }"#).unwrap();
    let source = source();
    let mut target = ModelBuilder::new().config(config).roots(&["A", "C"]).build();

    let report = target.import_constraints(&source).unwrap();

    assert_eq!(report.imported, 2);
    for constraint in target.constraints() {
        assert_eq!(constraint.model_id(), target.id());
        assert_eq!(
            constraint.kind().origin(),
            Some(&Origin::External(source.id().to_string()))
        );
    }
}

#[test]
fn test_import_keeps_existing_origin() {
    let mut source = ModelBuilder::new().roots(&["A"]).build();
    let index = source.add_constraint(Formula::var("A")).unwrap();
    source.constraint(index).unwrap().set_origin(Origin::Internal);
    let config = ModelConfig::new().with_tag_imported_origin(true);
    let mut target = ModelBuilder::new().config(config).roots(&["A"]).build();

    target.import_constraints(&source).unwrap();

    assert_eq!(target.constraints()[0].kind().origin(), Some(&Origin::Internal));
    assert!(!target.constraints()[0].is_from_external_source());
}

#[test]
fn test_imported_constraints_see_target_visibility() {
    let source = source();
    let mut target = ModelBuilder::new().roots(&["A", "B", "C"]).hidden("C").build();

    target.import_constraints(&source).unwrap();

    let hidden: Vec<bool> = target
        .constraints()
        .iter()
        .map(|c| c.has_hidden_features(&target))
        .collect();
    assert_eq!(hidden, vec![false, false, true]);
}
