use pointbrowse::{ColumnConfig, DataPoint, PointSet, PointsError};

#[test]
fn loads_rows_with_position_keys() {
    let json = r#"[{"x": 1.0, "y": 2.0, "label": "first"}, {"x": 3, "y": 4}]"#;
    let set = PointSet::from_json_str(json, &ColumnConfig::default()).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.keys().collect::<Vec<_>>(), vec!["0", "1"]);
    let first = set.by_key("0").unwrap();
    assert_eq!(first.xy(), [1.0, 2.0]);
    assert_eq!(first.fields["label"], "first");
    assert_eq!(set.get(1).unwrap().xy(), [3.0, 4.0]);
}

#[test]
fn custom_columns_and_key() {
    let json = r#"[{"id": "alpha", "a": 0.5, "b": -0.5}, {"id": 7, "a": 1, "b": 1}]"#;
    let columns = ColumnConfig {
        x: "a".into(),
        y: "b".into(),
        key: Some("id".into()),
    };
    let set = PointSet::from_json_str(json, &columns).unwrap();
    assert_eq!(set.index_of("alpha"), Some(0));
    assert_eq!(set.index_of("7"), Some(1));
    assert_eq!(set.xys(), vec![[0.5, -0.5], [1.0, 1.0]]);
}

#[test]
fn missing_coordinate_is_rejected() {
    let json = r#"[{"x": 1.0, "y": 2.0}, {"x": "oops", "y": 1.0}]"#;
    match PointSet::from_json_str(json, &ColumnConfig::default()) {
        Err(PointsError::MissingColumn { row, column }) => {
            assert_eq!(row, 1);
            assert_eq!(column, "x");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn non_array_and_non_object_rows_are_rejected() {
    let cols = ColumnConfig::default();
    assert!(matches!(
        PointSet::from_json_str(r#"{"x": 1}"#, &cols),
        Err(PointsError::NotAnArray)
    ));
    assert!(matches!(
        PointSet::from_json_str("[1, 2]", &cols),
        Err(PointsError::NotAnObject { row: 0 })
    ));
    assert!(matches!(
        PointSet::from_json_str("not json", &cols),
        Err(PointsError::Json(_))
    ));
}

#[test]
fn duplicate_keys_are_rejected() {
    let err = PointSet::new(vec![DataPoint::new("a", 0.0, 0.0), DataPoint::new("a", 1.0, 1.0)])
        .unwrap_err();
    assert!(matches!(err, PointsError::DuplicateKey(k) if k == "a"));
}

#[test]
fn series_fields_only_report_numeric_arrays() {
    let p = DataPoint::new("a", 0.0, 0.0)
        .with_field("payload", serde_json::json!([1.0, 2.0, 3.0]))
        .with_field("tags", serde_json::json!(["x", "y"]))
        .with_field("size", serde_json::json!(4.0));
    let series: Vec<_> = p.series_fields().collect();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].0, "payload");
    assert_eq!(series[0].1, vec![1.0, 2.0, 3.0]);
}

#[test]
fn rows_to_json_includes_key() {
    let set = PointSet::new(vec![
        DataPoint::new("a", 0.0, 0.0).with_field("x", serde_json::json!(0.0)),
        DataPoint::new("b", 1.0, 1.0),
    ])
    .unwrap();
    let rows = set.rows_to_json(&[1]);
    assert_eq!(rows, serde_json::json!([{"key": "b"}]));
}
