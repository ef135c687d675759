//! Property tests: reflexivity and run-to-run determinism over generated
//! trees.

use plumbline_core::{compare_trees, Node, NodeKind};
use proptest::prelude::*;

const KINDS: &[NodeKind] = &[
    NodeKind::Site,
    NodeKind::Building,
    NodeKind::Storey,
    NodeKind::Slab,
    NodeKind::Wall,
    NodeKind::Floor,
    NodeKind::Roof,
];

const NAMES: &[&str] = &["alpha", "beta", "gamma", "delta", "alpha"];

/// Tree shape without identifiers; ids are assigned by a depth-first
/// counter afterwards so uniqueness-within-one-tree always holds.
#[derive(Debug, Clone)]
struct Shape {
    kind_ix: usize,
    name_ix: usize,
    reference_edge: bool,
    children: Vec<Shape>,
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    let leaf = (0..KINDS.len(), 0..NAMES.len(), any::<bool>()).prop_map(
        |(kind_ix, name_ix, reference_edge)| Shape {
            kind_ix,
            name_ix,
            reference_edge,
            children: Vec::new(),
        },
    );
    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            0..KINDS.len(),
            0..NAMES.len(),
            any::<bool>(),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(kind_ix, name_ix, reference_edge, children)| Shape {
                kind_ix,
                name_ix,
                reference_edge,
                children,
            })
    })
}

fn build(shape: &Shape, next_id: &mut u32) -> Node {
    let id = format!("n{:04}", *next_id);
    *next_id += 1;
    let mut node = Node::new(KINDS[shape.kind_ix], NAMES[shape.name_ix], id);
    for child in &shape.children {
        let child_node = build(child, next_id);
        node = if child.reference_edge {
            node.references(child_node)
        } else {
            node.contains(child_node)
        };
    }
    node
}

proptest! {
    // A tree reconciled against itself never produces a record
    #[test]
    fn prop_reflexivity(shape in arb_shape()) {
        let mut counter = 0;
        let tree = build(&shape, &mut counter);

        let report = compare_trees(&tree, &tree.clone()).unwrap();
        prop_assert!(report.is_clean());
        prop_assert!(!report.has_errors);
    }

    // Two arbitrary trees always reconcile to the same report, bytes
    // included, no matter how often the run repeats
    #[test]
    fn prop_run_to_run_determinism(a in arb_shape(), b in arb_shape()) {
        let mut counter = 0;
        let expected = build(&a, &mut counter);
        let mut counter = 0;
        let actual = build(&b, &mut counter);

        let report1 = compare_trees(&expected, &actual).unwrap();
        let report2 = compare_trees(&expected, &actual).unwrap();
        prop_assert_eq!(&report1, &report2);

        let s1 = serde_json::to_string(&report1).unwrap();
        let s2 = serde_json::to_string(&report2).unwrap();
        prop_assert_eq!(s1, s2);
    }

    // Totals always agree with the record list, and the error flag with
    // record severities
    #[test]
    fn prop_report_is_internally_consistent(a in arb_shape(), b in arb_shape()) {
        let mut counter = 0;
        let expected = build(&a, &mut counter);
        let mut counter = 0;
        let actual = build(&b, &mut counter);

        let report = compare_trees(&expected, &actual).unwrap();
        prop_assert_eq!(report.totals.total(), report.records.len());
        prop_assert_eq!(report.has_errors, report.records.iter().any(|r| r.is_error()));
    }
}
