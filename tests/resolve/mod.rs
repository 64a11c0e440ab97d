use crate::common::{raw, Opaque};
use error_trail::{
    chain_nodes, error_code, error_fields, error_message, error_message_default, error_trace,
    has_chain_node, ChainNode, ErrorCode, ErrorNode, FieldValue, Fields, DEFAULT_ERROR_MESSAGE,
};
use std::error::Error;

fn fields(pairs: &[(&str, &str)]) -> Fields {
    pairs.iter().map(|(k, v)| (k.to_string(), FieldValue::from(*v))).collect()
}

// ============================================================================
// error_code
// ============================================================================

#[test]
fn code_of_none_is_unset() {
    assert_eq!(error_code(None), ErrorCode::UNSET);
}

#[test]
fn code_of_unclassified_error_is_internal() {
    assert_eq!(error_code(Some(&raw("plain"))), ErrorCode::INTERNAL);
    assert_eq!(error_code(Some(&ChainNode::new())), ErrorCode::INTERNAL);
    assert_eq!(
        error_code(Some(&ChainNode::wrap(ChainNode::new()))),
        ErrorCode::INTERNAL
    );
}

#[test]
fn code_is_found_through_opaque_layers() {
    let node = ChainNode::new().with_code(ErrorCode::TEST);
    assert_eq!(error_code(Some(&node)), ErrorCode::TEST);

    let wrapped = Opaque::new("a", Opaque::new("b", Opaque::new("c", node)));
    assert_eq!(error_code(Some(&wrapped)), ErrorCode::TEST);
}

#[test]
fn code_is_inherited_from_inner_node() {
    let err = ChainNode::wrap(ChainNode::new().with_code(ErrorCode::TEST));
    assert_eq!(error_code(Some(&err)), ErrorCode::TEST);
}

#[test]
fn shallowest_code_wins() {
    let err = ChainNode::wrap(ChainNode::new().with_code(ErrorCode::NOT_FOUND))
        .with_code(ErrorCode::INVALID);
    assert_eq!(error_code(Some(&err)), ErrorCode::INVALID);
}

// ============================================================================
// error_message
// ============================================================================

#[test]
fn message_of_none_is_empty() {
    assert_eq!(error_message(None), "");
    assert_eq!(error_message_default(None, "fallback"), "");
}

#[test]
fn message_is_found_at_any_depth() {
    let node = || ChainNode::new().with_message("foo");

    assert_eq!(error_message(Some(&node())), "foo");
    assert_eq!(error_message(Some(&Opaque::new("x", node()))), "foo");
    assert_eq!(
        error_message(Some(&Opaque::new("x", Opaque::new("y", Opaque::new("z", node()))))),
        "foo"
    );
    assert_eq!(error_message(Some(&ChainNode::wrap(node()))), "foo");
}

#[test]
fn shallowest_message_wins() {
    let err = ChainNode::wrap(ChainNode::new().with_message("inner")).with_message("outer");
    assert_eq!(error_message(Some(&err)), "outer");
}

#[test]
fn missing_message_uses_default() {
    let err = ChainNode::wrap(ChainNode::new());
    assert_eq!(error_message(Some(&err)), DEFAULT_ERROR_MESSAGE);

    let err = ChainNode::wrap(raw("foo"));
    assert_eq!(error_message(Some(&err)), DEFAULT_ERROR_MESSAGE);

    assert_eq!(error_message_default(Some(&err), "custom"), "custom");
}

#[test]
fn empty_default_falls_back_to_cause_string() {
    let err = ChainNode::wrap(raw("connection reset")).with_op("db.query");
    assert_eq!(error_message_default(Some(&err), ""), "connection reset");

    let err = Opaque::new("outer", ChainNode::wrap(raw("leaf")));
    assert_eq!(error_message_default(Some(&err), ""), "leaf");
}

#[test]
fn empty_default_without_cause_uses_holder_string() {
    let err = ChainNode::new().with_op("svc").with_code(ErrorCode::TEST);
    assert_eq!(error_message_default(Some(&err), ""), "svc: <test_error_code>");

    let err = Opaque::new("wrapper", ChainNode::new().with_code(ErrorCode::TEST));
    assert_eq!(error_message_default(Some(&err), ""), "wrapper: <test_error_code>");
}

#[test]
fn plain_error_message() {
    assert_eq!(error_message(Some(&raw("plain"))), DEFAULT_ERROR_MESSAGE);
    assert_eq!(error_message_default(Some(&raw("plain")), ""), "plain");
}

// ============================================================================
// error_fields
// ============================================================================

#[test]
fn fields_of_none_is_none() {
    assert_eq!(error_fields(None), None);
}

#[test]
fn fields_without_data_is_empty_map() {
    assert_eq!(error_fields(Some(&ChainNode::wrap(ChainNode::new()))), Some(Fields::new()));
    assert_eq!(error_fields(Some(&raw("plain"))), Some(Fields::new()));
}

#[test]
fn fields_are_found_through_opaque_layers() {
    let node = || ChainNode::new().with_message("foo").with_field("foo", "bar");
    let want = Some(fields(&[("foo", "bar")]));

    assert_eq!(error_fields(Some(&node())), want);
    assert_eq!(error_fields(Some(&Opaque::new("x", node()))), want);
    assert_eq!(
        error_fields(Some(&Opaque::new("x", Opaque::new("y", Opaque::new("z", node()))))),
        want
    );
}

#[test]
fn fields_merge_across_levels() {
    let err = ChainNode::new()
        .with_field("foo", "bar")
        .with_cause(ChainNode::new().with_message("foo").with_field("bar", "baz"));
    assert_eq!(error_fields(Some(&err)), Some(fields(&[("foo", "bar"), ("bar", "baz")])));

    let err = ChainNode::new().with_field("foo", "bar").with_cause(Opaque::new(
        "layer",
        ChainNode::new().with_message("foo").with_field("bar", "baz"),
    ));
    assert_eq!(error_fields(Some(&err)), Some(fields(&[("foo", "bar"), ("bar", "baz")])));
}

#[test]
fn fields_merge_three_levels_with_distinct_keys() {
    let err = ChainNode::new().with_field("a", "1").with_cause(
        ChainNode::new()
            .with_field("b", "2")
            .with_cause(ChainNode::wrap(raw("leaf")).with_field("c", "3")),
    );
    assert_eq!(
        error_fields(Some(&err)),
        Some(fields(&[("a", "1"), ("b", "2"), ("c", "3")]))
    );
}

#[test]
fn innermost_field_wins_on_collision() {
    let err = ChainNode::new()
        .with_field("k", "a")
        .with_cause(ChainNode::new().with_field("k", "b"));
    assert_eq!(error_fields(Some(&err)), Some(fields(&[("k", "b")])));

    let err = ChainNode::new().with_field("k", "outer").with_cause(
        ChainNode::new()
            .with_field("k", "middle")
            .with_cause(ChainNode::new().with_field("k", "inner")),
    );
    assert_eq!(error_fields(Some(&err)), Some(fields(&[("k", "inner")])));
}

// ============================================================================
// error_trace
// ============================================================================

#[test]
fn trace_of_none_is_none() {
    assert!(error_trace(None).is_none());
}

#[test]
fn trace_of_plain_error_is_empty() {
    let err = raw("plain");
    let trace = error_trace(Some(&err)).unwrap();
    assert!(trace.is_empty());
}

#[test]
fn trace_skips_unset_ops() {
    let err = ChainNode::new()
        .with_op("outer")
        .with_cause(ChainNode::new().with_cause(ChainNode::new().with_op("inner")));
    assert_eq!(error_trace(Some(&err)).unwrap().as_slice(), ["outer", "inner"]);
}

#[test]
fn trace_walks_opaque_layers_outer_to_inner() {
    let err = Opaque::new(
        "top",
        ChainNode::new()
            .with_op("baz")
            .with_cause(Opaque::new("mid", ChainNode::wrap(raw("leaf")).with_op("bar"))),
    );
    assert_eq!(error_trace(Some(&err)).unwrap().as_slice(), ["baz", "bar"]);
}

// ============================================================================
// walking
// ============================================================================

#[test]
fn chain_nodes_yields_outermost_first() {
    let err = ChainNode::new()
        .with_op("a")
        .with_cause(Opaque::new("x", ChainNode::new().with_op("b").with_cause(raw("leaf"))));

    let ops: Vec<&str> = chain_nodes(Some(&err)).map(|node| node.op()).collect();
    assert_eq!(ops, ["a", "b"]);
    assert_eq!(chain_nodes(None).count(), 0);
}

#[test]
fn has_chain_node_detects_any_reachable_node() {
    assert!(!has_chain_node(None));
    assert!(!has_chain_node(Some(&raw("plain"))));
    assert!(has_chain_node(Some(&ChainNode::new())));
    assert!(has_chain_node(Some(&Opaque::new("x", ChainNode::new()))));

    let boxed: Box<dyn Error + Send + Sync> = Box::new(ChainNode::new());
    assert!(has_chain_node(Some(&*boxed)));
}
