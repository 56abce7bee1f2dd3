//! Table builder wrapper around comfy-table for consistent list display.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use console::style;

/// Create a standard list table with the given headers.
///
/// Uses the NOTHING preset (no borders) for a clean CLI aesthetic.
pub fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)),
        );
    table
}

/// Render the table to string with a count header.
pub fn render_list(singular: &str, plural: &str, table: &Table, total: usize) -> String {
    if total == 0 {
        return format!("No {plural} found.");
    }
    let count_line = format!(
        "{} {}:",
        style(total).bold(),
        if total == 1 { singular } else { plural }
    );
    format!("{count_line}\n{table}")
}
