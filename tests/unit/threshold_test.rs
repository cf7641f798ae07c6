use check_postgres_query::error::CheckError;
use check_postgres_query::status::Status;
use check_postgres_query::threshold::{CompareOp, ThresholdExpression, evaluate};

fn expr(text: &str) -> ThresholdExpression {
    ThresholdExpression::parse(text)
        .unwrap_or_else(|e| panic!("Expected {:?} to parse, got: {}", text, e))
}

fn assert_malformed(text: &str) {
    match ThresholdExpression::parse(text) {
        Ok(parsed) => panic!("Expected {:?} to be rejected, got {:?}", text, parsed),
        Err(CheckError::Expression { .. }) => {}
        Err(other) => panic!("Expected Expression error for {:?}, got: {}", text, other),
    }
}

// --- Parsing ---

#[test]
fn test_parse_value_greater() {
    let parsed = expr("value > 5");
    assert_eq!(parsed.op, CompareOp::Gt);
    assert_eq!(parsed.bound, 5.0);
}

#[test]
fn test_parse_all_operators() {
    assert_eq!(expr("value < 1").op, CompareOp::Lt);
    assert_eq!(expr("value <= 1").op, CompareOp::Le);
    assert_eq!(expr("value > 1").op, CompareOp::Gt);
    assert_eq!(expr("value >= 1").op, CompareOp::Ge);
    assert_eq!(expr("value == 1").op, CompareOp::Eq);
    assert_eq!(expr("value != 1").op, CompareOp::Ne);
}

#[test]
fn test_parse_without_spaces() {
    let parsed = expr("value>=10");
    assert_eq!(parsed.op, CompareOp::Ge);
    assert_eq!(parsed.bound, 10.0);
}

#[test]
fn test_parse_surrounding_whitespace() {
    let parsed = expr("  value <= 2.5  ");
    assert_eq!(parsed.op, CompareOp::Le);
    assert_eq!(parsed.bound, 2.5);
}

#[test]
fn test_parse_negative_bound() {
    let parsed = expr("value < -3");
    assert_eq!(parsed.op, CompareOp::Lt);
    assert_eq!(parsed.bound, -3.0);
}

#[test]
fn test_parse_mirrored_operand_order() {
    // "5 < value" reads as "value > 5"
    let parsed = expr("5 < value");
    assert_eq!(parsed.op, CompareOp::Gt);
    assert_eq!(parsed.bound, 5.0);

    let parsed = expr("10 >= value");
    assert_eq!(parsed.op, CompareOp::Le);
    assert_eq!(parsed.bound, 10.0);
}

#[test]
fn test_parse_bare_number_defaults_to_ge() {
    let parsed = expr("10");
    assert_eq!(parsed.op, CompareOp::Ge);
    assert_eq!(parsed.bound, 10.0);
}

#[test]
fn test_parse_malformed_rejected() {
    assert_malformed("");
    assert_malformed("   ");
    assert_malformed("value >");
    assert_malformed("> 5");
    assert_malformed("value = 5");
    assert_malformed("foo > 5");
    assert_malformed("value >= threshold");
    assert_malformed("value > 5 > 6");
    assert_malformed("values > 5");
    assert_malformed("value value");
}

// --- Expression evaluation ---

#[test]
fn test_evaluate_operator_semantics() {
    assert!(expr("value < 5").evaluate(4.0));
    assert!(!expr("value < 5").evaluate(5.0));

    assert!(expr("value <= 5").evaluate(5.0));
    assert!(!expr("value <= 5").evaluate(5.1));

    assert!(expr("value > 5").evaluate(5.1));
    assert!(!expr("value > 5").evaluate(5.0));

    assert!(expr("value >= 5").evaluate(5.0));
    assert!(!expr("value >= 5").evaluate(4.9));

    assert!(expr("value == 5").evaluate(5.0));
    assert!(!expr("value == 5").evaluate(5.1));

    assert!(expr("value != 5").evaluate(5.1));
    assert!(!expr("value != 5").evaluate(5.0));
}

// --- Status decision ---

#[test]
fn test_critical_triggers() {
    let critical = expr("value >= 10");
    assert_eq!(evaluate(12.0, Some(&critical), None), Status::Critical);
    assert_eq!(evaluate(10.0, Some(&critical), None), Status::Critical);
    assert_eq!(evaluate(9.9, Some(&critical), None), Status::Ok);
}

#[test]
fn test_critical_wins_over_warning() {
    let critical = expr("value >= 10");
    let warning = expr("value >= 5");
    assert_eq!(
        evaluate(12.0, Some(&critical), Some(&warning)),
        Status::Critical
    );
}

#[test]
fn test_untriggered_critical_falls_through_to_warning() {
    let critical = expr("value >= 20");
    let warning = expr("value >= 10");
    assert_eq!(
        evaluate(15.0, Some(&critical), Some(&warning)),
        Status::Warning
    );
}

#[test]
fn test_warning_only() {
    let warning = expr("value >= 5");
    assert_eq!(evaluate(7.0, None, Some(&warning)), Status::Warning);
    assert_eq!(evaluate(3.0, None, Some(&warning)), Status::Ok);
}

#[test]
fn test_no_thresholds_is_ok() {
    assert_eq!(evaluate(0.0, None, None), Status::Ok);
    assert_eq!(evaluate(1e9, None, None), Status::Ok);
    assert_eq!(evaluate(-1.0, None, None), Status::Ok);
}
