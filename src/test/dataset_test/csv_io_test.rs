use super::*;
use tempfile::TempDir;

#[test]
fn test_read_infers_column_types() {
    let csv = "Id,Length,Species\n1,5.1,Iris-setosa\n2,4.9,Iris-setosa\n";
    let table = read_csv_from_reader(csv.as_bytes()).unwrap();

    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.column("Id").unwrap(), &Column::Integer(array![1, 2]));
    assert_eq!(table.column("Length").unwrap(), &Column::Float(array![5.1, 4.9]));
    assert_eq!(table.column("Species").unwrap().dtype(), ColumnType::Text);
}

#[test]
fn test_read_integer_column_with_gap_becomes_float() {
    let csv = "a,b\n1,x\n,y\n3,z\n";
    let table = read_csv_from_reader(csv.as_bytes()).unwrap();

    match table.column("a").unwrap() {
        Column::Float(values) => {
            assert_abs_diff_eq!(values[0], 1.0, epsilon = 1e-12);
            assert!(values[1].is_nan());
            assert_abs_diff_eq!(values[2], 3.0, epsilon = 1e-12);
        }
        other => panic!("expected a float column, got {:?}", other.dtype()),
    }
}

#[test]
fn test_read_header_only() {
    let table = read_csv_from_reader("Id,Species\n".as_bytes()).unwrap();
    assert_eq!(table.n_rows(), 0);
    assert_eq!(table.n_cols(), 2);
}

#[test]
fn test_read_empty_input_is_parse_error() {
    assert!(matches!(
        read_csv_from_reader("".as_bytes()),
        Err(DataError::ParseError(_))
    ));
}

#[test]
fn test_read_ragged_row_is_parse_error() {
    let csv = "a,b\n1,2\n3\n";
    assert!(matches!(
        read_csv_from_reader(csv.as_bytes()),
        Err(DataError::ParseError(_))
    ));
}

#[test]
fn test_read_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");
    match read_csv(&path) {
        Err(DataError::FileNotFound(p)) => assert_eq!(p, path),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_write_has_header_and_no_index() {
    let mut out = Vec::new();
    write_csv_to_writer(&id_value_table(2), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Id,Value\n1,0.5\n2,1.0\n");
}

#[test]
fn test_write_then_read_preserves_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("table.csv");
    let table = Table::new(
        vec!["Width".to_string(), "Label".to_string()],
        vec![
            Column::Float(array![2.0, 0.25, 10.5]),
            Column::Text(array!["a b".to_string(), "c,d".to_string(), "e".to_string()]),
        ],
    )
    .unwrap();

    write_csv(&table, &path).unwrap();
    let reread = read_csv(&path).unwrap();

    assert_eq!(reread, table);
}

#[test]
fn test_large_floats_stay_float_after_rewrite() {
    let table = Table::new(
        vec!["Mass".to_string()],
        vec![Column::Float(array![1e16, 3.0e22, 0.5])],
    )
    .unwrap();

    let mut out = Vec::new();
    write_csv_to_writer(&table, &mut out).unwrap();
    let reread = read_csv_from_reader(out.as_slice()).unwrap();

    assert_eq!(reread.column("Mass").unwrap().dtype(), ColumnType::Float);
    assert_eq!(reread, table);
}
