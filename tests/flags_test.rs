//! Tests for FlagSchema parsing and validation

use calc::domain::{DomainError, FlagSchema, FlagSpec};
use rstest::{fixture, rstest};

fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

#[fixture]
fn operands() -> FlagSchema {
    FlagSchema::new()
        .flag(FlagSpec::new("n1", "first operand").required())
        .and_then(|s| s.flag(FlagSpec::new("n2", "second operand").required()))
        .expect("valid schema")
}

#[rstest]
#[case(&["--n1=1", "--n2=2"], 1, 2)]
#[case(&["--n1", "1", "--n2", "2"], 1, 2)]
#[case(&["--n2=2", "--n1=1"], 1, 2)]
#[case(&["--n1=-5", "--n2", "-3"], -5, -3)]
#[case(&["--n1=2147483647", "--n2=-2147483648"], i32::MAX, i32::MIN)]
fn given_valid_tokens_when_parse_then_resolves(
    operands: FlagSchema,
    #[case] tokens: &[&str],
    #[case] n1: i32,
    #[case] n2: i32,
) {
    let flags = operands.parse(&args(tokens)).unwrap();
    assert_eq!(flags.get("n1"), Some(n1));
    assert_eq!(flags.get("n2"), Some(n2));
}

#[rstest]
fn given_repeated_flag_when_parse_then_last_value_wins(operands: FlagSchema) {
    let flags = operands
        .parse(&args(&["--n1=1", "--n2=2", "--n1", "7"]))
        .unwrap();
    assert_eq!(flags.get("n1"), Some(7));
}

#[rstest]
#[case(&["--n1=foo", "--n2=1"], "n1", "foo")]
#[case(&["--n1=1", "--n2=1.5"], "n2", "1.5")]
#[case(&["--n1=2147483648", "--n2=1"], "n1", "2147483648")]
#[case(&["--n1=", "--n2=1"], "n1", "")]
fn given_non_integer_when_parse_then_invalid_value(
    operands: FlagSchema,
    #[case] tokens: &[&str],
    #[case] flag: &str,
    #[case] value: &str,
) {
    let err = operands.parse(&args(tokens)).unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidValue {
            flag: flag.into(),
            value: value.into()
        }
    );
}

#[rstest]
#[case(&["--n1=1"], &["n2"])]
#[case(&["--n2=1"], &["n1"])]
#[case(&[], &["n1", "n2"])]
fn given_missing_required_when_parse_then_names_all_missing(
    operands: FlagSchema,
    #[case] tokens: &[&str],
    #[case] missing: &[&str],
) {
    let err = operands.parse(&args(tokens)).unwrap_err();
    let expected: Vec<String> = missing.iter().map(|s| s.to_string()).collect();
    assert_eq!(err, DomainError::MissingRequiredFlag(expected));
}

#[rstest]
fn given_unknown_flag_when_parse_then_rejected(operands: FlagSchema) {
    let err = operands
        .parse(&args(&["--n1=1", "--n2=2", "--n3=3"]))
        .unwrap_err();
    assert_eq!(err, DomainError::UnknownFlag("--n3".into()));
}

#[rstest]
fn given_positional_when_parse_then_unexpected_argument(operands: FlagSchema) {
    let err = operands
        .parse(&args(&["5", "--n1=1", "--n2=2"]))
        .unwrap_err();
    assert_eq!(err, DomainError::UnexpectedArgument("5".into()));
}

#[test]
fn given_required_flag_with_default_when_absent_then_default_satisfies() {
    let schema = FlagSchema::new()
        .flag(FlagSpec::new("base", "").default_value(10).required())
        .unwrap();
    let flags = schema.parse(&[]).unwrap();
    assert_eq!(flags.get("base"), Some(10));
    assert_eq!(flags.require("base"), Ok(10));
}

#[test]
fn given_empty_schema_when_parse_nothing_then_empty_flags() {
    let flags = FlagSchema::new().parse(&[]).unwrap();
    assert!(flags.is_empty());
    assert_eq!(
        flags.require("n1"),
        Err(DomainError::MissingRequiredFlag(vec!["n1".into()]))
    );
}
