use super::*;
use crate::foundation::core::{Align, Anchor, Edge, Edges};
use crate::layout::tree::Container;

fn tree_with_container(width: f64, height: f64) -> LayoutTree {
    LayoutTree::new(Container {
        size: Size::new(width, height),
        ..Container::default()
    })
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn container_is_the_base_case_on_both_axes() {
    let tree = tree_with_container(200.0, 100.0);
    let mut solver = RelativeSolver::new();
    solver.init_cache(&tree);
    for axis in Axis::ALL {
        assert_eq!(
            solver
                .resolve_multiplier(&tree, NodeId::CONTAINER, axis)
                .unwrap(),
            MultiplierSpan::FULL
        );
    }
    assert_eq!(
        solver
            .resolve_geometry(&tree, NodeId::CONTAINER, Axis::Horizontal)
            .unwrap(),
        AxisGeometry {
            position: 0.0,
            length: 200.0
        }
    );
    assert_eq!(
        solver
            .resolve_geometry(&tree, NodeId::CONTAINER, Axis::Vertical)
            .unwrap(),
        AxisGeometry {
            position: 0.0,
            length: 100.0
        }
    );
    assert_eq!(solver.computations(), 0);
}

#[test]
fn half_anchors_on_container_fill_the_scaled_span() {
    let mut tree = tree_with_container(200.0, 100.0);
    let mut node = LayoutNode::new("a");
    node.anchors[Edge::Left.index()] = Anchor::container(0.25);
    node.anchors[Edge::Right.index()] = Anchor::container(0.75);
    let a = tree.add_child(node);

    let mut solver = RelativeSolver::new();
    solver.init_cache(&tree);
    let g = solver.resolve_geometry(&tree, a, Axis::Horizontal).unwrap();
    assert_close(g.position, 200.0 * 0.25);
    assert_close(g.length, 200.0 * (0.75 - 0.25));

    let m = solver.resolve_multiplier(&tree, a, Axis::Horizontal).unwrap();
    assert_close(m.low, 0.25);
    assert_close(m.high, 0.75);
}

#[test]
fn multipliers_compose_through_chains() {
    let mut tree = tree_with_container(100.0, 100.0);
    let mut outer = LayoutNode::new("outer");
    outer.anchors[Edge::Left.index()] = Anchor::container(0.5);
    outer.anchors[Edge::Right.index()] = Anchor::container(1.0);
    let outer = tree.add_child(outer);

    let mut inner = LayoutNode::new("inner");
    inner.anchors[Edge::Left.index()] = Anchor::new(outer, 0.5);
    inner.anchors[Edge::Right.index()] = Anchor::new(outer, 1.0);
    let inner = tree.add_child(inner);

    let mut solver = RelativeSolver::new();
    solver.init_cache(&tree);
    let m = solver
        .resolve_multiplier(&tree, inner, Axis::Horizontal)
        .unwrap();
    assert_close(m.low, 0.75);
    assert_close(m.high, 1.0);
}

#[test]
fn alignment_distributes_slack() {
    for (align, expected) in [(Align::Start, 0.0), (Align::Center, 40.0), (Align::End, 80.0)] {
        let mut tree = tree_with_container(100.0, 100.0);
        let mut node = LayoutNode::new("n");
        node.intrinsic = Size::new(20.0, 0.0);
        node.anchors[Edge::Right.index()] = Anchor::container(1.0);
        node.align[Axis::Horizontal.index()] = align;
        let n = tree.add_child(node);

        let mut solver = RelativeSolver::new();
        solver.init_cache(&tree);
        let g = solver.resolve_geometry(&tree, n, Axis::Horizontal).unwrap();
        assert_close(g.position, expected);
        assert_close(g.length, 20.0);
    }
}

#[test]
fn fill_flag_overrides_intrinsic_length() {
    let mut tree = tree_with_container(120.0, 60.0);
    let mut node = LayoutNode::new("n");
    node.intrinsic = Size::new(10.0, 10.0);
    node.anchors[Edge::Bottom.index()] = Anchor::container(1.0);
    node.fill[Axis::Vertical.index()] = true;
    node.align[Axis::Vertical.index()] = Align::End;
    let n = tree.add_child(node);

    let mut solver = RelativeSolver::new();
    solver.init_cache(&tree);
    let g = solver.resolve_geometry(&tree, n, Axis::Vertical).unwrap();
    assert_close(g.position, 0.0);
    assert_close(g.length, 60.0);
}

#[test]
fn repeated_resolution_is_served_from_cache() {
    let mut tree = tree_with_container(100.0, 100.0);
    let a = tree.add_child(LayoutNode::new("a"));
    let mut b = LayoutNode::new("b");
    b.anchors[Edge::Left.index()] = Anchor::new(a, 1.0);
    let b = tree.add_child(b);

    let mut solver = RelativeSolver::new();
    solver.init_cache(&tree);
    let first = solver.resolve_geometry(&tree, b, Axis::Horizontal).unwrap();
    assert_eq!(solver.computations(), 2);
    let second = solver.resolve_geometry(&tree, b, Axis::Horizontal).unwrap();
    assert_eq!(solver.computations(), 2);
    assert_eq!(first.position.to_bits(), second.position.to_bits());
    assert_eq!(first.length.to_bits(), second.length.to_bits());

    solver.init_cache(&tree);
    assert_eq!(solver.computations(), 0);
    solver.resolve_geometry(&tree, b, Axis::Horizontal).unwrap();
    assert_eq!(solver.computations(), 2);
}

#[test]
fn diamond_dependencies_compute_each_node_once() {
    let mut tree = tree_with_container(100.0, 100.0);
    let base = tree.add_child(LayoutNode::new("base"));
    let mut left = LayoutNode::new("left");
    left.anchors[Edge::Left.index()] = Anchor::new(base, 0.0);
    let left = tree.add_child(left);
    let mut right = LayoutNode::new("right");
    right.anchors[Edge::Left.index()] = Anchor::new(base, 1.0);
    let right = tree.add_child(right);
    let mut top = LayoutNode::new("top");
    top.anchors[Edge::Left.index()] = Anchor::new(left, 0.0);
    top.anchors[Edge::Right.index()] = Anchor::new(right, 1.0);
    let top = tree.add_child(top);

    let mut solver = RelativeSolver::new();
    solver.init_cache(&tree);
    solver.resolve_geometry(&tree, top, Axis::Horizontal).unwrap();
    assert_eq!(solver.computations(), 4);
}

#[test]
fn self_anchor_is_a_cycle() {
    let mut tree = tree_with_container(100.0, 100.0);
    let a = tree.add_child(LayoutNode::new("a"));
    tree.set_target(a, Edge::Top, a).unwrap();

    let mut solver = RelativeSolver::new();
    solver.init_cache(&tree);
    let err = solver.resolve_geometry(&tree, a, Axis::Vertical).unwrap_err();
    match err {
        LayoutError::CyclicConstraint { axis, cycle } => {
            assert_eq!(axis, Axis::Vertical);
            assert_eq!(cycle, vec![a, a]);
        }
        other => panic!("unexpected error: {other}"),
    }
    // The other axis is unaffected.
    assert!(solver.resolve_geometry(&tree, a, Axis::Horizontal).is_ok());
}

#[test]
fn mutual_anchors_report_the_cycle_path() {
    let mut tree = tree_with_container(100.0, 100.0);
    let a = tree.add_child(LayoutNode::new("a"));
    let b = tree.add_child(LayoutNode::new("b"));
    let c = tree.add_child(LayoutNode::new("c"));
    tree.set_target(a, Edge::Right, b).unwrap();
    tree.set_target(b, Edge::Left, c).unwrap();
    tree.set_target(c, Edge::Right, a).unwrap();

    let mut solver = RelativeSolver::new();
    solver.init_cache(&tree);
    let err = solver
        .resolve_multiplier(&tree, a, Axis::Horizontal)
        .unwrap_err();
    match err {
        LayoutError::CyclicConstraint { cycle, .. } => assert_eq!(cycle, vec![a, b, c, a]),
        other => panic!("unexpected error: {other}"),
    }
    // Marks are cleared, so retrying reports the same cycle rather than a stale one.
    assert!(matches!(
        solver.resolve_multiplier(&tree, b, Axis::Horizontal),
        Err(LayoutError::CyclicConstraint { .. })
    ));
}

#[test]
fn dangling_target_is_an_unknown_node() {
    let mut tree = tree_with_container(100.0, 100.0);
    let a = tree.add_child(LayoutNode::new("a"));
    tree.set_target(a, Edge::Left, NodeId(42)).unwrap();

    let mut solver = RelativeSolver::new();
    solver.init_cache(&tree);
    assert!(matches!(
        solver.resolve_geometry(&tree, a, Axis::Horizontal),
        Err(LayoutError::UnknownNode(NodeId(42)))
    ));
    assert!(matches!(
        solver.resolve_geometry(&tree, NodeId(9), Axis::Horizontal),
        Err(LayoutError::UnknownNode(NodeId(9)))
    ));
}

#[test]
fn required_length_scales_by_multiplier_span() {
    let mut tree = tree_with_container(0.0, 0.0);
    let mut half = LayoutNode::new("half");
    half.intrinsic = Size::new(30.0, 10.0);
    half.anchors[Edge::Right.index()] = Anchor::container(0.5);
    tree.add_child(half);

    let mut solver = RelativeSolver::new();
    solver.init_cache(&tree);
    assert_close(solver.required_length(&tree, Axis::Horizontal).unwrap(), 60.0);
    // Default top/bottom anchors are both at 0.0: degenerate span, unscaled fallback.
    assert_close(solver.required_length(&tree, Axis::Vertical).unwrap(), 10.0);
}

#[test]
fn required_size_honours_minimum_and_padding() {
    let mut tree = LayoutTree::new(Container {
        size: Size::ZERO,
        min_size: Size::new(50.0, 80.0),
        padding: Edges::uniform(5.0),
    });
    let mut n = LayoutNode::new("n");
    n.intrinsic = Size::new(70.0, 20.0);
    n.anchors[Edge::Right.index()] = Anchor::container(1.0);
    n.anchors[Edge::Bottom.index()] = Anchor::container(1.0);
    tree.add_child(n);

    let mut solver = RelativeSolver::new();
    solver.init_cache(&tree);
    let size = solver.required_size(&tree).unwrap();
    assert_close(size.width, 80.0);
    assert_close(size.height, 80.0);
}
