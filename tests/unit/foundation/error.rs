use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LayoutError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LayoutError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        LayoutError::UnknownNode(NodeId(7))
            .to_string()
            .contains("unknown node #7")
    );
}

#[test]
fn cycle_lists_nodes_in_order() {
    let err = LayoutError::cyclic(Axis::Vertical, vec![NodeId(1), NodeId(2), NodeId(1)]);
    assert_eq!(
        err.to_string(),
        "cyclic constraint on vertical axis: #1 -> #2 -> #1"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LayoutError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
