//! Behavioral properties of the normalization passes, run through the
//! public API exactly as a downstream consumer would.

use proptest::prelude::*;
use rstest::rstest;

use scss_normalize::ast::builder::*;
use scss_normalize::ast::{Expr, Node, NodeKind};
use scss_normalize::passes::{group_arguments, lift_defaults};
use scss_normalize::traverse::map_deep;
use scss_normalize::{NormalizeError, PassName, Pipeline};

fn tokens_of(node: &Node) -> (&[Node], bool) {
    match &node.value {
        Expr::Value { tokens, is_default } => (tokens, *is_default),
        other => panic!("expected a value node, got {}", other.kind()),
    }
}

fn args_of(node: &Node) -> &[Node] {
    match &node.value {
        Expr::Function { children, .. } => children[1].value.children().unwrap(),
        other => panic!("expected a function node, got {}", other.kind()),
    }
}

#[test]
fn test_default_flag_is_lifted_from_trailing_tokens() {
    let original = vec![variable("base"), op("*"), number("2"), op("!"), ident("default")];
    let out = lift_defaults(value(original.clone())).unwrap();
    let (tokens, is_default) = tokens_of(&out);
    assert!(is_default);
    assert_eq!(tokens, &original[..original.len() - 2]);
}

#[rstest]
#[case::empty(vec![])]
#[case::single(vec![ident("default")])]
#[case::reversed(vec![ident("default"), op("!")])]
#[case::important(vec![ident("red"), op("!"), ident("important")])]
#[case::not_last(vec![op("!"), ident("default"), ident("red")])]
fn test_values_without_trailing_default_are_unchanged(#[case] tokens: Vec<Node>) {
    let node = value(tokens);
    let out = lift_defaults(node.clone()).unwrap();
    assert_eq!(out, node);
    assert!(!tokens_of(&out).1);
}

#[test]
fn test_lifting_twice_equals_lifting_once() {
    let tree = stylesheet(vec![
        declaration("a", value(vec![number("1"), op("!"), ident("default")])),
        declaration("b", value(vec![ident("red")])),
    ]);
    let once = lift_defaults(tree).unwrap();
    let twice = lift_defaults(once.clone()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_multi_token_argument_becomes_group() {
    // f(a + b, c)
    let call = function("f", vec![ident("a"), op("+"), ident("b"), comma(), ident("c")]);
    let out = group_arguments(call).unwrap();
    let args = args_of(&out);
    assert_eq!(args.len(), 2);
    assert_eq!(args[0].value, Expr::Group(vec![ident("a"), op("+"), ident("b")]));
    assert_eq!(args[1], ident("c"));
}

#[test]
fn test_single_token_arguments_are_not_wrapped() {
    // f(a, b, c)
    let call = function("f", vec![ident("a"), comma(), ident("b"), comma(), ident("c")]);
    let out = group_arguments(call).unwrap();
    let args = args_of(&out);
    assert_eq!(args, &[ident("a"), ident("b"), ident("c")]);
    assert!(args.iter().all(|a| a.kind() != NodeKind::NodeGroup));
}

#[test]
fn test_function_without_argument_list_fails() {
    let call = node(Expr::Function { children: vec![ident("f")], is_color: false });
    let tree = stylesheet(vec![declaration("x", value(vec![call]))]);
    let err = group_arguments(tree).unwrap_err();
    assert!(matches!(err, NormalizeError::MalformedNode { kind: NodeKind::Function, .. }));
}

#[rstest]
#[case::trailing_comma(vec![ident("a"), comma()], 1)]
#[case::lone_comma(vec![comma()], 0)]
#[case::leading_comma(vec![comma(), ident("a")], 1)]
#[case::double_comma(vec![ident("a"), comma(), comma(), ident("b")], 2)]
fn test_empty_argument_slots_are_dropped(#[case] flat: Vec<Node>, #[case] expected: usize) {
    let out = group_arguments(function("f", flat)).unwrap();
    assert_eq!(args_of(&out).len(), expected);
}

#[test]
fn test_nested_call_is_normalized_regardless_of_depth() {
    // outer(inner(x !default, y z), w)
    let inner_value = value(vec![ident("x"), op("!"), ident("default")]);
    let inner = function("inner", vec![inner_value, comma(), ident("y"), ident("z")]);
    let outer = function("outer", vec![inner, comma(), ident("w")]);
    let tree = declaration("v", value(vec![outer]));

    let pipeline = Pipeline::new()
        .with_named(PassName::GroupArguments)
        .with_named(PassName::LiftDefaults);
    let out = pipeline.run(tree).unwrap();
    assert_eq!(out.pretty(), "$v: outer(inner(x !default, (y z)), w);");

    // Same result with the passes in the opposite order.
    let inner_value = value(vec![ident("x"), op("!"), ident("default")]);
    let inner = function("inner", vec![inner_value, comma(), ident("y"), ident("z")]);
    let outer = function("outer", vec![inner, comma(), ident("w")]);
    let reversed = Pipeline::new()
        .with_named(PassName::LiftDefaults)
        .with_named(PassName::GroupArguments)
        .run(declaration("v", value(vec![outer])))
        .unwrap();
    assert_eq!(reversed, out);
}

#[test]
fn test_descendants_are_transformed_before_ancestors() {
    // a(b(c(d)))
    let tree = value(vec![function("a", vec![function("b", vec![function("c", vec![ident("d")])])])]);
    let mut order = Vec::new();
    map_deep(tree, &mut |n| {
        if n.kind() == NodeKind::Function {
            order.push(n.pretty());
        }
        Ok(n)
    })
    .unwrap();
    assert_eq!(order, vec!["c(d)", "b(c(d))", "a(b(c(d)))"]);
}

#[test]
fn test_independent_trees_normalize_in_parallel() {
    let pipeline = Pipeline::standard();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let pipeline = &pipeline;
                scope.spawn(move || {
                    let tree = declaration(
                        format!("v{i}"),
                        value(vec![number(i.to_string()), ident("px"), op("!"), ident("default")]),
                    );
                    pipeline.run(tree).unwrap().pretty()
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("$v{i}: {i}px !default;"));
        }
    });
}

fn plain_token() -> impl Strategy<Value = Node> {
    prop_oneof![
        "[a-z]{1,6}".prop_filter("not a flag word", |s| s != "default").prop_map(|s| ident(s)),
        "[0-9]{1,3}".prop_map(|s| number(s)),
        prop_oneof![Just("+"), Just("-"), Just("*"), Just("!")].prop_map(|s| op(s)),
    ]
}

proptest! {
    #[test]
    fn test_lifting_is_idempotent(prefix in prop::collection::vec(plain_token(), 0..8), flagged in any::<bool>()) {
        let mut tokens = prefix.clone();
        if flagged {
            tokens.push(op("!"));
            tokens.push(ident("default"));
        }
        let once = lift_defaults(value(tokens)).unwrap();
        let twice = lift_defaults(once.clone()).unwrap();
        prop_assert_eq!(&once, &twice);

        let (rest, is_default) = tokens_of(&once);
        prop_assert_eq!(is_default, flagged);
        prop_assert_eq!(rest, prefix.as_slice());
    }

    #[test]
    fn test_grouping_yields_one_entry_per_nonempty_slot(
        slots in prop::collection::vec(prop::collection::vec(plain_token(), 0..4), 0..6)
    ) {
        let mut flat = Vec::new();
        for (i, slot) in slots.iter().enumerate() {
            if i > 0 {
                flat.push(comma());
            }
            flat.extend(slot.iter().cloned());
        }
        let out = group_arguments(function("f", flat)).unwrap();
        let args = args_of(&out);
        let nonempty: Vec<_> = slots.iter().filter(|s| !s.is_empty()).collect();
        prop_assert_eq!(args.len(), nonempty.len());
        for (arg, slot) in args.iter().zip(nonempty) {
            if slot.len() == 1 {
                prop_assert_eq!(arg, &slot[0]);
            } else {
                prop_assert_eq!(&arg.value, &Expr::Group(slot.clone()));
            }
        }
    }
}
