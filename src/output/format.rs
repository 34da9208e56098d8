use crate::models::Row;

/// Render rows as tab-separated text.
///
/// Fields are in table order (calories, protein, carbs, fat), one row per line
/// with no trailing newline. No rows yields an empty string.
pub fn format_table(rows: &[Row]) -> String {
    rows.iter()
        .map(|row| {
            row.to_array()
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
