use super::*;

#[test]
fn test_iris_codes() {
    let map = LabelMap::iris();

    assert_eq!(map.len(), 3);
    assert_eq!(map.encode("Iris-setosa").unwrap(), 0);
    assert_eq!(map.encode("Iris-versicolor").unwrap(), 1);
    assert_eq!(map.encode("Iris-virginica").unwrap(), 2);
}

#[test]
fn test_round_trip_all_species() {
    let map = LabelMap::iris();
    for name in IRIS_SPECIES {
        assert_eq!(map.decode(map.encode(name).unwrap()).unwrap(), name);
    }
}

#[test]
fn test_unknown_label_is_key_not_found() {
    let map = LabelMap::iris();

    match map.encode("Iris-unknown") {
        Err(DataError::KeyNotFound(label)) => assert_eq!(label, "Iris-unknown"),
        other => panic!("expected KeyNotFound, got {:?}", other),
    }
    assert!(matches!(map.decode(3), Err(DataError::KeyNotFound(_))));
    assert!(matches!(map.decode(-1), Err(DataError::KeyNotFound(_))));
}

#[test]
fn test_new_assigns_codes_by_position() {
    let map = LabelMap::new(&["cat", "dog", "bird"]).unwrap();

    assert_eq!(map.encode("bird").unwrap(), 2);
    assert_eq!(map.labels(), &["cat", "dog", "bird"]);
}

#[test]
fn test_new_validation() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        LabelMap::new(&empty),
        Err(DataError::InputValidationError(_))
    ));
    assert!(matches!(
        LabelMap::new(&["a", "a"]),
        Err(DataError::InputValidationError(_))
    ));
}

#[test]
fn test_encode_and_decode_column() {
    let map = LabelMap::iris();
    let labels = Column::Text(array![
        "Iris-virginica".to_string(),
        "Iris-setosa".to_string(),
        "Iris-versicolor".to_string()
    ]);

    let codes = map.encode_column(&labels).unwrap();
    assert_eq!(codes, Column::Integer(array![2, 0, 1]));
    assert_eq!(map.decode_column(&codes).unwrap(), labels);

    assert!(matches!(
        map.encode_column(&codes),
        Err(DataError::SchemaMismatch(_))
    ));
    assert!(matches!(
        map.decode_column(&labels),
        Err(DataError::SchemaMismatch(_))
    ));
}

#[test]
fn test_encode_table_keeps_original() {
    let mut iris = load_iris_owned();
    iris.drop_column(ID_COLUMN).unwrap();
    let map = LabelMap::iris();

    let encoded = map.encode_table(&iris, LABEL_COLUMN).unwrap();

    assert_eq!(iris.column(LABEL_COLUMN).unwrap().dtype(), ColumnType::Text);
    assert_eq!(encoded.column(LABEL_COLUMN).unwrap().dtype(), ColumnType::Integer);
    assert_eq!(encoded.column_names(), iris.column_names());

    for (plain, coded) in iris.records().zip(encoded.records()) {
        let n = plain.values.len();
        assert_eq!(plain.values[..n - 1], coded.values[..n - 1]);
        match (&plain.values[n - 1], &coded.values[n - 1]) {
            (Value::Text(label), Value::Integer(code)) => {
                assert_eq!(map.encode(label).unwrap(), *code)
            }
            other => panic!("unexpected label cells {:?}", other),
        }
    }
}

#[test]
fn test_encode_table_with_unknown_label() {
    let table = Table::new(
        vec!["Species".to_string()],
        vec![Column::Text(array![
            "Iris-setosa".to_string(),
            "Iris-germanica".to_string()
        ])],
    )
    .unwrap();

    assert!(matches!(
        LabelMap::iris().encode_table(&table, "Species"),
        Err(DataError::KeyNotFound(_))
    ));
    assert!(matches!(
        LabelMap::iris().encode_table(&table, "Label"),
        Err(DataError::SchemaMismatch(_))
    ));
}

#[test]
fn test_codes_of_accepts_text_and_codes() {
    let map = LabelMap::iris();
    let text = Table::new(
        vec!["Species".to_string()],
        vec![Column::Text(array!["Iris-virginica".to_string()])],
    )
    .unwrap();
    let coded = Table::new(vec!["Species".to_string()], vec![Column::Integer(array![2])]).unwrap();
    let out_of_range =
        Table::new(vec!["Species".to_string()], vec![Column::Integer(array![7])]).unwrap();

    assert_eq!(map.codes_of(&text, "Species").unwrap(), array![2]);
    assert_eq!(map.codes_of(&coded, "Species").unwrap(), array![2]);
    assert!(matches!(
        map.codes_of(&out_of_range, "Species"),
        Err(DataError::KeyNotFound(_))
    ));
}
