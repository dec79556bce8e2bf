//! Terminal rendering of the result region.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gate_client::ResultView;

/// Build the table shown for a result view.
pub fn view_table(view: &ResultView) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);

    let value_color = match view {
        ResultView::Success(_) => None,
        ResultView::ApplicationError(_) | ResultView::Failure(_) => Some(Color::Red),
    };
    for (label, value) in view.rows() {
        let value_cell = match value_color {
            Some(color) => Cell::new(value).fg(color),
            None => Cell::new(value),
        };
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            value_cell,
        ]);
    }
    if view.is_success()
        && let Some(column) = table.column_mut(1)
    {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

pub fn print_view(view: &ResultView) {
    println!("{}", view_table(view));
}
