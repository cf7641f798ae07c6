use crate::backend::{CellValue, QueryResult};

/// Render every cell value of a result for the outcome message, row by row,
/// e.g. `[["15"], ["3"]]`. NULLs render as `null`.
pub fn render_values(result: &QueryResult) -> String {
    let rows = result
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|cell| match cell {
                    CellValue::Text(text) => format!("{:?}", text),
                    CellValue::Null => "null".to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{}]", cells)
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", rows)
}
