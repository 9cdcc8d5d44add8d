//! Symbolic expression evaluation per statement

use crate::violation::Violation;
use doxa_domain::StatementMap;
use evalexpr::Value;

/// Evaluate each statement's attached expression, if any
///
/// The check is purely local per statement. Three non-passing outcomes:
/// the expression is false (`MATH FAIL`), it evaluates to a non-boolean
/// value (`MATH EVAL` -- the expression is not actually a truth assertion),
/// or evaluation itself fails (`MATH ERROR`). None of them abort the run.
pub fn check_expressions(statements: &StatementMap) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (title, statement) in statements {
        let Some(expression) = statement.expression.as_deref().filter(|e| !e.is_empty()) else {
            continue;
        };
        if let Some(violation) = evaluate(title, expression) {
            violations.push(violation);
        }
    }
    violations
}

fn evaluate(title: &str, expression: &str) -> Option<Violation> {
    match evalexpr::eval(expression) {
        Ok(Value::Boolean(true)) => None,
        Ok(Value::Boolean(false)) => Some(Violation::MathFail {
            title: title.to_string(),
            expression: expression.to_string(),
        }),
        Ok(Value::Float(value)) => Some(math_eval(title, expression, format!("{:.4}", value))),
        Ok(Value::Int(value)) => Some(math_eval(title, expression, format!("{:.4}", value as f64))),
        Ok(other) => Some(math_eval(title, expression, other.to_string())),
        Err(e) => Some(Violation::MathError {
            title: title.to_string(),
            expression: expression.to_string(),
            detail: e.to_string(),
        }),
    }
}

fn math_eval(title: &str, expression: &str, value: String) -> Violation {
    Violation::MathEval {
        title: title.to_string(),
        expression: expression.to_string(),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doxa_domain::Statement;

    fn with_expression(expr: &str) -> StatementMap {
        let mut s = Statement::new("S");
        s.expression = Some(expr.to_string());
        [("S".to_string(), s)].into_iter().collect()
    }

    #[test]
    fn test_true_expression_passes() {
        assert!(check_expressions(&with_expression("2 > 1")).is_empty());
    }

    #[test]
    fn test_false_expression_fails() {
        let violations = check_expressions(&with_expression("1 > 2"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].to_string(), "MATH FAIL: [S]: '1 > 2' is False");
    }

    #[test]
    fn test_numeric_expression_is_noteworthy() {
        let violations = check_expressions(&with_expression("2 + 2"));
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "MATH EVAL: [S]: '2 + 2' = 4.0000 (not boolean)"
        );
    }

    #[test]
    fn test_float_precision_is_four_decimals() {
        let violations = check_expressions(&with_expression("1.0 / 3.0"));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].to_string().contains("= 0.3333 (not boolean)"));
    }

    #[test]
    fn test_broken_expression_is_reported_not_raised() {
        let violations = check_expressions(&with_expression("2 +"));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].category(), "MATH ERROR");
    }

    #[test]
    fn test_statement_without_expression_is_skipped() {
        let statements: StatementMap =
            [("S".to_string(), Statement::new("S"))].into_iter().collect();
        assert!(check_expressions(&statements).is_empty());
    }

    #[test]
    fn test_arithmetic_truth_assertion() {
        // The shape authored math usually takes: an exact product equality
        assert!(check_expressions(&with_expression("0.5 * 0.8 == 0.4")).is_empty());
    }
}
