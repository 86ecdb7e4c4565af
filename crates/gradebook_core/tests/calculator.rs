use gradebook_core::{parse_operand, CalcError, Calculation};

#[test]
fn calculation_handles_division_by_zero() {
    let calc = Calculation::of(7.0, 0.0);
    assert_eq!(calc.sum, 7.0);
    assert_eq!(calc.difference, 7.0);
    assert_eq!(calc.product, 0.0);
    assert_eq!(calc.quotient, None);

    let calc = Calculation::of(9.0, 3.0);
    assert_eq!(calc.quotient, Some(3.0));
}

#[test]
fn parse_operand_rejects_text() {
    assert_eq!(parse_operand(" -2.5 "), Ok(-2.5));
    assert_eq!(
        parse_operand("two"),
        Err(CalcError::InvalidOperand("two".to_string()))
    );
}
