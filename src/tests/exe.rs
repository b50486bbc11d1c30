use crate::bindings::Bindings;
use crate::builder::{BuildErrKind, Malformed};
use crate::evaluator::EvalErrKind;
use crate::exe::Executor;
use crate::result::ExeErrKind;
use crate::validator::ValidationErrKind;

fn bindings(pairs: &[(char, i32)]) -> Bindings {
    pairs.iter().copied().collect()
}

#[test]
fn execute() {
    let executor = Executor::default();
    assert_eq!(executor.execute("1+2*3", &Bindings::new()), Ok(7));
    assert_eq!(executor.execute("(1+2)*3", &Bindings::new()), Ok(9));
    assert_eq!(executor.execute("a+1", &bindings(&[('a', 5)])), Ok(6));
}

#[test]
fn invalid_expression_halts_before_conversion() {
    let executor = Executor::default();
    let err = executor.execute("(1+2", &Bindings::new()).unwrap_err();
    assert_eq!(
        err.kind,
        ExeErrKind::InvalidExpression(ValidationErrKind::UnmatchedOpeningBracket(1))
    );
    assert_eq!(err.exit_code(), 1);
    let err = executor.execute("1 % 2", &Bindings::new()).unwrap_err();
    assert_eq!(err.kind, ExeErrKind::InvalidExpression(ValidationErrKind::UnknownChar('%', 3)));
}

#[test]
fn malformed_postfix() {
    let executor = Executor::default();
    let err = executor.execute("1+", &Bindings::new()).unwrap_err();
    assert_eq!(
        err.kind,
        ExeErrKind::BuildErr(BuildErrKind::MalformedPostfix(Malformed::MissingOperands('+', 2)))
    );
    assert_eq!(err.exit_code(), 2);
    let err = executor.execute("1 2", &Bindings::new()).unwrap_err();
    assert_eq!(
        err.kind,
        ExeErrKind::BuildErr(BuildErrKind::MalformedPostfix(Malformed::LeftoverValues(2)))
    );
    let err = executor.execute("", &Bindings::new()).unwrap_err();
    assert_eq!(
        err.kind,
        ExeErrKind::BuildErr(BuildErrKind::MalformedPostfix(Malformed::LeftoverValues(0)))
    );
}

#[test]
fn eval_errors() {
    let executor = Executor::default();
    let err = executor.execute("8/0", &Bindings::new()).unwrap_err();
    assert_eq!(err.kind, ExeErrKind::EvalErr(EvalErrKind::DivisionByZero));
    assert_eq!(err.exit_code(), 3);
    let err = executor.execute("a+1", &Bindings::new()).unwrap_err();
    assert_eq!(err.kind, ExeErrKind::EvalErr(EvalErrKind::UndefinedVariable('a')));
    assert_eq!(err.to_string(), "Undefined variable: a");
}

#[test]
fn compile_collects_var_names() {
    let executor = Executor::default();
    let compiled = executor.compile("(b+a)*b - 3").unwrap();
    assert_eq!(compiled.postfix, "ba+b*3-");
    assert_eq!(compiled.var_names(), vec!['b', 'a']);
    assert_eq!(executor.execute_compiled(&compiled, &bindings(&[('a', 1), ('b', 2)])), Ok(3));
}

#[test]
fn execute_lines() {
    let executor = Executor::new(true, true, false);
    let lines = ["x*y+1", "x=3", "bad line", "y=4", "", "x=100"];
    assert_eq!(executor.execute_lines(&Bindings::new(), lines), Ok(13));
}

#[test]
fn execute_lines_without_bindings() {
    let executor = Executor::default();
    assert_eq!(executor.execute_lines(&Bindings::new(), ["7-2-1"]), Ok(4));
    assert_eq!(executor.execute_lines(&Bindings::new(), ["7-2-1\r\n"]), Ok(4));
}

#[test]
fn execute_lines_with_no_input() {
    let executor = Executor::default();
    let err = executor.execute_lines(&Bindings::new(), Vec::<String>::new()).unwrap_err();
    assert!(matches!(err.kind, ExeErrKind::CouldNotReadInput(_)));
}

#[test]
fn execute_lines_stops_at_invalid_expression() {
    let executor = Executor::default();
    let err = executor.execute_lines(&Bindings::new(), ["a+(b", "a=1", "b=2"]).unwrap_err();
    assert_eq!(
        err.kind,
        ExeErrKind::InvalidExpression(ValidationErrKind::UnmatchedOpeningBracket(3))
    );
}

#[test]
fn execute_lines_with_base_bindings() {
    let executor = Executor::default();
    assert_eq!(executor.execute_lines(&bindings(&[('a', 5)]), ["a+1"]), Ok(6));
    let base = bindings(&[('a', 5), ('b', 2)]);
    assert_eq!(executor.execute_lines(&base, ["a*b", "a=10"]), Ok(20));
    assert_eq!(base.get(&'a'), Some(&5));
}
