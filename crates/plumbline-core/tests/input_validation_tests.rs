//! Structural input validation: malformed trees abort the run entirely,
//! they never produce a partial report.

mod common;

use common::*;
use plumbline_core::{compare_trees, StructuralInputError, TreeSide};

#[test]
fn test_duplicate_identifier_aborts() {
    let expected = reference_tree();
    let actual = project("proj", "p-1")
        .contains(wall("wall a", "dup-1"))
        .contains(wall("wall b", "dup-1"));

    let err = compare_trees(&expected, &actual).unwrap_err();
    assert_eq!(err.code(), "ERR_DUPLICATE_IDENTIFIER");
    assert_eq!(err.side(), TreeSide::Actual);
}

#[test]
fn test_ancestor_alias_aborts_as_cycle() {
    let expected = project("proj", "p-1")
        .contains(site("site", "st-1").contains(building("bldg", "st-1")));
    let actual = reference_tree();

    let err = compare_trees(&expected, &actual).unwrap_err();
    assert_eq!(err.code(), "ERR_CYCLE_DETECTED");
    assert_eq!(err.side(), TreeSide::Expected);
    match err {
        StructuralInputError::CycleDetected { id, path, .. } => {
            assert_eq!(id, "st-1");
            assert_eq!(path.depth(), 3);
        }
        other => panic!("expected CycleDetected, got {:?}", other),
    }
}

#[test]
fn test_blank_identifier_aborts() {
    let expected = project("proj", "p-1").contains(wall("wall", ""));
    let actual = project("proj", "p-1");

    let err = compare_trees(&expected, &actual).unwrap_err();
    assert_eq!(err.code(), "ERR_BLANK_IDENTIFIER");
}

#[test]
fn test_expected_side_is_validated_first() {
    // Both sides malformed: the expected tree's violation is reported
    let expected = project("proj", "p-1")
        .contains(wall("a", "dup"))
        .contains(wall("b", "dup"));
    let actual = project("proj", "").contains(wall("c", "x"));

    let err = compare_trees(&expected, &actual).unwrap_err();
    assert_eq!(err.side(), TreeSide::Expected);
    assert_eq!(err.code(), "ERR_DUPLICATE_IDENTIFIER");
}

#[test]
fn test_missing_root_is_loader_constructible() {
    // Constructed by loaders when the source model has no root entity;
    // carries the taxonomy's stable code
    let err = StructuralInputError::MissingRoot {
        side: TreeSide::Expected,
    };
    assert_eq!(err.code(), "ERR_MISSING_ROOT");
    assert!(err.to_string().contains("no root entity"));
}

#[test]
fn test_identifiers_may_repeat_across_trees() {
    // Uniqueness is per tree; the same ids appearing in both trees is the
    // normal, desired case
    let tree = reference_tree();
    assert!(compare_trees(&tree, &tree.clone()).is_ok());
}
