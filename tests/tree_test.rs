//! Tests for CommandTree registration and lookup

use calc::application::build_command_tree;
use calc::domain::{CommandSpec, CommandTree, DomainError};
use calc::util::testing;
use rstest::rstest;

fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

// ============================================================
// Registration
// ============================================================

#[test]
fn given_sibling_with_same_name_when_register_then_configuration_error() {
    testing::init_test_setup();
    let mut tree = CommandTree::new(CommandSpec::new("calc")).unwrap();
    let root = tree.root();
    tree.register(root, CommandSpec::new("add")).unwrap();

    let err = tree.register(root, CommandSpec::new("add")).unwrap_err();

    assert_eq!(
        err,
        DomainError::DuplicateCommand {
            parent: "calc".into(),
            name: "add".into()
        }
    );
    assert!(err.is_configuration());
    assert_eq!(tree.len(), 2, "failed registration must not add a node");
}

#[test]
fn given_same_name_under_different_parents_when_register_then_both_succeed() {
    let mut tree = CommandTree::new(CommandSpec::new("calc")).unwrap();
    let root = tree.root();
    let int = tree.register(root, CommandSpec::new("int")).unwrap();
    let float = tree.register(root, CommandSpec::new("float")).unwrap();

    let a = tree.register(int, CommandSpec::new("add")).unwrap();
    let b = tree.register(float, CommandSpec::new("add")).unwrap();

    assert_ne!(a, b);
    assert_eq!(tree.path(a), "calc int add");
    assert_eq!(tree.path(b), "calc float add");
    assert_eq!(tree.get_node(a).unwrap().parent, Some(int));
}

#[rstest]
#[case("")]
#[case("--add")]
#[case("two words")]
fn given_invalid_name_when_register_then_rejected(#[case] name: &str) {
    let mut tree = CommandTree::new(CommandSpec::new("calc")).unwrap();
    let root = tree.root();
    let err = tree.register(root, CommandSpec::new(name)).unwrap_err();
    assert_eq!(err, DomainError::InvalidName(name.to_string()));
}

#[test]
fn given_children_when_iterating_then_registration_order_is_kept() {
    let tree = build_command_tree().unwrap();
    let names: Vec<String> = tree
        .children(tree.root())
        .map(|(_, node)| node.spec.name.clone())
        .collect();
    assert_eq!(names, ["add", "sub"]);
}

// ============================================================
// Lookup
// ============================================================

#[rstest]
#[case(&[], "calc", 0)]
#[case(&["add"], "calc add", 0)]
#[case(&["sub", "--n1=1", "--n2=2"], "calc sub", 2)]
#[case(&["add", "--n1", "5"], "calc add", 2)]
#[case(&["--n1=1", "add"], "calc", 2)]
fn given_tokens_when_lookup_then_resolves_node_and_remaining(
    #[case] tokens: &[&str],
    #[case] expected_path: &str,
    #[case] remaining: usize,
) {
    let tree = build_command_tree().unwrap();
    let tokens = args(tokens);

    let res = tree.lookup(&tokens).unwrap();

    assert_eq!(tree.path(res.node), expected_path);
    assert_eq!(res.remaining.len(), remaining);
    assert_eq!(res.remaining, &tokens[tokens.len() - remaining..]);
}

#[test]
fn given_unregistered_subcommand_when_lookup_then_unknown_command() {
    let tree = build_command_tree().unwrap();
    let tokens = args(&["mul", "--n1=2", "--n2=3"]);

    let err = tree.lookup(&tokens).unwrap_err();

    assert_eq!(
        err,
        DomainError::UnknownCommand {
            parent: "calc".into(),
            name: "mul".into()
        }
    );
    assert_eq!(err.to_string(), "unknown command \"mul\" for \"calc\"");
}
