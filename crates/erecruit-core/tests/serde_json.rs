//! JSON shape of the public types.

#![cfg(feature = "serde")]

use erecruit_core::*;

#[test]
fn record_uses_output_column_names() {
    let record = ApplicantRecord::new(
        ApplicantInfo {
            name: Some("Jane Doe".to_string()),
            publications_national: 3,
            publications_international: 0,
            submission: Some("482".to_string()),
        },
        AcademicSummary {
            graduation_gpa: Gpa::new(3.5),
            postgraduation_gpa: None,
            affiliations: vec!["MIT".to_string()],
        },
    );

    let value = serde_json::to_value(&record).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    for column in COLUMNS {
        assert!(keys.contains(&column), "missing key {column}");
    }
    assert_eq!(value["Graduation GPA"], serde_json::json!(3.5));
    assert_eq!(value["Postgraduation GPA"], serde_json::Value::Null);
    assert_eq!(value["Affiliations"], serde_json::json!(["MIT"]));
}

#[test]
fn cells_serialize_untagged() {
    let table = RawTable::new(
        vec!["a".into(), "b".into(), "c".into()],
        vec![vec![
            Cell::Empty,
            Cell::Number(3.9),
            Cell::Text("3.5/4".to_string()),
        ]],
    );
    let json = serde_json::to_string(&table).unwrap();
    assert!(json.contains(r#"[null,3.9,"3.5/4"]"#), "got {json}");

    let restored: RawTable = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, table);
}

#[test]
fn merge_strategy_roundtrip() {
    for strategy in [
        MergeStrategy::LatestMatching,
        MergeStrategy::FirstTable,
        MergeStrategy::Disabled,
    ] {
        let json = serde_json::to_string(&strategy).unwrap();
        let restored: MergeStrategy = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, strategy);
    }
}

#[test]
fn gpa_deserialization_checks_range() {
    let gpa: Gpa = serde_json::from_str("3.5").unwrap();
    assert_eq!(gpa.value(), 3.5);
    assert!(serde_json::from_str::<Gpa>("85.0").is_err());
    assert!(serde_json::from_str::<Gpa>("-1").is_err());
}

#[test]
fn record_with_out_of_range_gpa_is_rejected() {
    let json = r#"{
        "Name": "Jane Doe",
        "Publications_National": 0,
        "Publications_International": 0,
        "Submission #": null,
        "Graduation GPA": 85.0,
        "Postgraduation GPA": null,
        "Affiliations": []
    }"#;
    assert!(serde_json::from_str::<ApplicantRecord>(json).is_err());
}

#[test]
fn ragged_table_rows_are_padded_on_deserialize() {
    let json = r#"{"columns":["Level","Name of Institution","Result"],"rows":[["Graduation"],["Postgraduation","Stanford",3.9,"extra"]]}"#;
    let table: RawTable = serde_json::from_str(json).unwrap();

    assert!(table.rows().iter().all(|row| row.len() == 3));
    assert_eq!(table.get(0, "Result"), Some(&Cell::Empty));

    let summary = aggregate(&table, &AcademicColumns::default());
    assert_eq!(summary.graduation_gpa, None);
    assert_eq!(summary.postgraduation_gpa, Gpa::new(3.9));
    assert_eq!(summary.affiliations, ["", "Stanford"]);
}
