use check_postgres_query::backend::{CellValue, QueryResult};
use check_postgres_query::render::render_values;

fn result_with_rows(rows: Vec<Vec<CellValue>>) -> QueryResult {
    QueryResult {
        columns: vec!["col0".to_string()],
        rows,
    }
}

#[test]
fn test_render_empty_result() {
    let result = result_with_rows(vec![]);
    assert_eq!(render_values(&result), "[]");
}

#[test]
fn test_render_single_cell() {
    let result = result_with_rows(vec![vec![CellValue::Text("15".to_string())]]);
    assert_eq!(render_values(&result), r#"[["15"]]"#);
}

#[test]
fn test_render_multiple_rows_and_nulls() {
    let result = result_with_rows(vec![
        vec![CellValue::Text("15".to_string()), CellValue::Null],
        vec![CellValue::Text("3".to_string()), CellValue::Text("x".to_string())],
    ]);
    assert_eq!(render_values(&result), r#"[["15", null], ["3", "x"]]"#);
}
