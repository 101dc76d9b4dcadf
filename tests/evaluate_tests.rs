// tests/evaluate_tests.rs
//
// Evaluating recorded operations, and the JSON shape a test harness sees.

use arith::{ArithmeticError, ArithmeticService, Operation, OperationKind, OverflowPolicy, Outcome};
use serde_json::json;

#[cfg(test)]
mod evaluate {
    use super::*;

    #[test]
    fn test_each_operation_produces_expected_outcome() {
        let calc = ArithmeticService::<i32>::new();
        let cases = vec![
            (Operation::Add { a: 2, b: 3 }, Outcome::Integer(5)),
            (Operation::Subtract { a: 5, b: 3 }, Outcome::Integer(2)),
            (Operation::Multiply { a: 2, b: -3 }, Outcome::Integer(-6)),
            (Operation::Divide { a: 5, b: 2 }, Outcome::Quotient(2.5)),
            (Operation::Square { n: -5 }, Outcome::Integer(25)),
            (Operation::Abs { n: -5 }, Outcome::Integer(5)),
        ];

        for (operation, expected) in cases {
            assert_eq!(calc.evaluate(&operation), Ok(expected), "{:?}", operation);
        }
    }

    #[test]
    fn test_divide_by_zero_under_both_policies() {
        let op = Operation::Divide { a: 7, b: 0 };
        for policy in [OverflowPolicy::Wrapping, OverflowPolicy::Checked] {
            let calc = ArithmeticService::<i32>::with_policy(policy);
            assert_eq!(calc.evaluate(&op), Err(ArithmeticError::DivisionByZero));
        }
    }

    #[test]
    fn test_checked_policy_names_failing_operation() {
        let calc = ArithmeticService::<i32>::with_policy(OverflowPolicy::Checked);
        let overflowing = vec![
            Operation::Add { a: i32::MAX, b: 1 },
            Operation::Subtract { a: i32::MIN, b: 1 },
            Operation::Multiply { a: i32::MIN, b: -1 },
            Operation::Square { n: i32::MAX },
            Operation::Abs { n: i32::MIN },
        ];

        for operation in overflowing {
            assert_eq!(
                calc.evaluate(&operation),
                Err(ArithmeticError::Overflow { operation: operation.kind() })
            );
        }
    }

    #[test]
    fn test_wrapping_policy_never_overflows() {
        let calc = ArithmeticService::<i32>::with_policy(OverflowPolicy::Wrapping);
        assert_eq!(
            calc.evaluate(&Operation::Multiply { a: i32::MIN, b: -1 }),
            Ok(Outcome::Integer(i32::MIN))
        );
        assert_eq!(calc.evaluate(&Operation::Abs { n: i32::MIN }), Ok(Outcome::Integer(i32::MIN)));
    }
}

#[cfg(test)]
mod serialization {
    use super::*;

    #[test]
    fn test_operation_json_shape() {
        let op = Operation::Divide { a: 5i32, b: 2 };
        assert_eq!(serde_json::to_value(op).unwrap(), json!({"op": "divide", "a": 5, "b": 2}));

        let op = Operation::Abs { n: -3i64 };
        assert_eq!(serde_json::to_value(op).unwrap(), json!({"op": "abs", "n": -3}));
    }

    #[test]
    fn test_operation_from_json() {
        let op: Operation<i32> = serde_json::from_str(r#"{"op":"square","n":-4}"#).unwrap();
        assert_eq!(op, Operation::Square { n: -4 });
        assert_eq!(op.kind(), OperationKind::Square);
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        let parsed = serde_json::from_str::<Operation<i32>>(r#"{"op":"modulo","a":1,"b":2}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_outcome_json_is_bare_number() {
        let calc = ArithmeticService::<i32>::new();
        let product = calc.evaluate(&Operation::Multiply { a: 6, b: 7 }).unwrap();
        let quotient = calc.evaluate(&Operation::Divide { a: 5, b: 2 }).unwrap();

        assert_eq!(serde_json::to_string(&product).unwrap(), "42");
        assert_eq!(serde_json::to_string(&quotient).unwrap(), "2.5");
    }
}
