use pretty_assertions::assert_eq;
use smallstep::*;

fn run_to_string(machine: &mut Machine) -> Result<String, MachineError> {
    let mut out = Vec::new();
    machine.run_with(Environment::new(), &mut out)?;
    Ok(String::from_utf8(out).expect("trace is utf-8"))
}

// ═══════════════════════════════════════════════════════════════════════
// Traces
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_sum_of_products_trace() {
    let expr = Expr::add(Expr::multiply(1, 2), Expr::multiply(3, 4));
    let mut machine = Machine::new(expr);

    let output = run_to_string(&mut machine).unwrap();

    assert_eq!(output, "1 * 2 + 3 * 4\n2 + 3 * 4\n2 + 12\n14\n");
    assert_eq!(machine.expression(), &Expr::number(14));
    assert_eq!(machine.steps(), 3);
}

#[test]
fn test_trace_collects_same_lines() {
    let expr = Expr::add(Expr::multiply(1, 2), Expr::multiply(3, 4));
    let mut machine = Machine::new(expr);

    let (lines, _) = machine.trace(Environment::new()).unwrap();

    assert_eq!(lines, vec!["1 * 2 + 3 * 4", "2 + 3 * 4", "2 + 12", "14"]);
}

#[test]
fn test_literal_prints_once_without_steps() {
    let mut machine = Machine::new(5);

    let output = run_to_string(&mut machine).unwrap();

    assert_eq!(output, "5\n");
    assert_eq!(machine.steps(), 0);
    assert_eq!(machine.into_expression(), Expr::number(5));
}

#[test]
fn test_boolean_literal_prints_once() {
    let mut machine = Machine::new(false);
    assert_eq!(run_to_string(&mut machine).unwrap(), "false\n");
}

#[test]
fn test_nested_operand_collapses_in_one_step() {
    let expr = Expr::multiply(Expr::add(Expr::add(1, 2), 3), 10);
    let mut machine = Machine::new(expr);

    let (lines, _) = machine.trace(Environment::new()).unwrap();

    assert_eq!(lines, vec!["1 + 2 + 3 * 10", "6 * 10", "60"]);
}

#[test]
fn test_rendering_is_stable() {
    let expr = Expr::add(Expr::multiply(1, 2), Expr::multiply(3, 4));
    assert_eq!(expr.to_string(), expr.to_string());
}

// ═══════════════════════════════════════════════════════════════════════
// Stepping
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_single_step() {
    let mut machine = Machine::new(Expr::add(Expr::multiply(1, 2), 3));

    let env = machine.step(Environment::new()).unwrap();

    assert!(env.is_empty());
    assert_eq!(machine.expression(), &Expr::add(2, 3));
    assert_eq!(machine.steps(), 1);
}

#[test]
fn test_step_on_terminal_is_identity() {
    let mut machine = Machine::new(7);
    machine.step(Environment::new()).unwrap();
    assert_eq!(machine.expression(), &Expr::number(7));
}

#[test]
fn test_run_returns_env_unchanged() {
    let env = Environment::new()
        .with_binding("a", 1)
        .with_binding("b", Expr::multiply(2, 3));
    let mut machine = Machine::new(Expr::add(1, 2));

    let mut out = Vec::new();
    let returned = machine.run_with(env.clone(), &mut out).unwrap();

    assert_eq!(returned, env);
}

// ═══════════════════════════════════════════════════════════════════════
// Failures
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_type_mismatch_stops_machine() {
    let expr = Expr::add(Expr::multiply(1, 2), Expr::add(true, 3));
    let mut machine = Machine::new(expr);

    let mut out = Vec::new();
    let result = machine.run_with(Environment::new(), &mut out);

    assert!(matches!(
        result,
        Err(MachineError::Eval(EvalError::TypeMismatch { op: "+", .. }))
    ));
    // First step succeeds, second step fails on the right operand
    assert_eq!(String::from_utf8(out).unwrap(), "1 * 2 + true + 3\n2 + true + 3\n");
    assert_eq!(machine.expression(), &Expr::add(2, Expr::add(true, 3)));
    assert_eq!(machine.steps(), 1);
}

#[test]
fn test_failed_step_leaves_expression() {
    let mut machine = Machine::new(Expr::multiply(false, 2));
    let result = machine.step(Environment::new());
    assert!(result.is_err());
    assert_eq!(machine.expression(), &Expr::multiply(false, 2));
    assert_eq!(machine.steps(), 0);
}

#[test]
fn test_deep_tree_stops_with_depth_error() {
    let mut expr = Expr::number(1);
    for _ in 0..5000 {
        expr = Expr::add(expr, 1);
    }
    let mut machine = Machine::new(expr);

    let mut out = Vec::new();
    let result = machine.run_with(Environment::new(), &mut out);

    assert!(matches!(
        result,
        Err(MachineError::Eval(EvalError::DepthLimitExceeded {
            depth: 4999,
            max: DEFAULT_MAX_DEPTH,
        }))
    ));
    // Only the initial state was emitted
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    assert_eq!(machine.steps(), 0);
}

#[test]
fn test_depth_limit_comes_from_env() {
    let expr = Expr::add(Expr::multiply(Expr::add(1, 2), 3), 4);

    let mut shallow = Machine::new(expr.clone());
    let result = shallow.trace(Environment::with_max_depth(1));
    assert!(matches!(
        result,
        Err(MachineError::Eval(EvalError::DepthLimitExceeded { depth: 2, max: 1 }))
    ));

    let mut roomy = Machine::new(expr);
    let (lines, env) = roomy.trace(Environment::with_max_depth(2)).unwrap();
    assert_eq!(lines, vec!["1 + 2 * 3 + 4", "9 + 4", "13"]);
    assert_eq!(env.max_depth(), 2);
}

#[test]
fn test_trace_matches_run_output() {
    let expr = Expr::multiply(Expr::add(1, 2), Expr::add(3, Expr::multiply(4, 5)));

    let mut written = Machine::new(expr.clone());
    let output = run_to_string(&mut written).unwrap();

    let mut traced = Machine::new(expr);
    let (lines, _) = traced.trace(Environment::new()).unwrap();

    assert_eq!(output.lines().collect::<Vec<_>>(), lines);
    assert_eq!(written.steps(), traced.steps());
}
