use gradebook_core::{Grade, GradeError, StudentRecord};

#[test]
fn grade_parse_accepts_bounds_and_trims() {
    assert_eq!(Grade::parse("0").unwrap().value(), 0.0);
    assert_eq!(Grade::parse(" 100 ").unwrap().value(), 100.0);
    assert_eq!(Grade::parse("72.5").unwrap().value(), 72.5);
}

#[test]
fn grade_parse_reports_reason() {
    assert_eq!(
        Grade::parse("ninety").unwrap_err(),
        GradeError::NotANumber("ninety".to_string())
    );
    assert_eq!(
        Grade::parse("100.01").unwrap_err(),
        GradeError::OutOfRange(100.01)
    );
    assert!(matches!(
        Grade::parse("nan").unwrap_err(),
        GradeError::NotANumber(_)
    ));
}

#[test]
fn record_serializes_name_and_plain_grade() {
    let record = StudentRecord::new(" Alice ", Grade::new(90.0).unwrap()).unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["grade"], 90.0);
}

#[test]
fn grade_deserialize_rejects_out_of_range_value() {
    let grade: Grade = serde_json::from_value(serde_json::json!(88.5)).unwrap();
    assert_eq!(grade.value(), 88.5);

    let err = serde_json::from_value::<Grade>(serde_json::json!(120)).unwrap_err();
    assert!(
        err.to_string().contains("between 0 and 100"),
        "unexpected error: {err}"
    );
}

#[test]
fn record_display_matches_listing_format() {
    let record = StudentRecord::new("bob", Grade::new(70.0).unwrap()).unwrap();
    assert_eq!(record.to_string(), "bob: 70.0");
}
