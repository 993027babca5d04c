//! Plain-text rendering of a [`CatalogView`].

use std::io::{self, Write};

use crate::view::{CatalogView, NO_MATCHING_MESSAGE, ProductRow, UserHighlight};

const HEADERS: [&str; 4] = ["ID", "Product", "Category", "User"];
const COLUMN_GAP: &str = "  ";

/// Writes the filter summary followed by the product table.
///
/// Active tabs and selected categories are wrapped in brackets. Owner names
/// carry a `(m)` or `(f)` marker in place of the colour highlight.
///
/// # Errors
///
/// Returns any error raised by `out`.
///
/// # Example
///
/// ```
/// use product_catalog::{Catalog, Dataset, render_table};
///
/// let dataset = Dataset::embedded().expect("embedded dataset");
/// let catalog = Catalog::new(&dataset);
/// let mut out = Vec::new();
///
/// render_table(&catalog.view(), &mut out).expect("render");
/// let text = String::from_utf8(out).expect("utf-8 output");
///
/// assert!(text.starts_with("Users: [All]"));
/// ```
pub fn render_table(view: &CatalogView, mut out: impl Write) -> io::Result<()> {
    let tabs: Vec<String> = view
        .user_tabs
        .iter()
        .map(|tab| marked(&tab.label, tab.is_active))
        .collect();
    writeln!(out, "Users: {}", tabs.join(" "))?;

    if view.search.show_clear {
        writeln!(out, "Search: \"{}\"", view.search.query)?;
    }

    let chips: Vec<String> = view
        .category_chips
        .iter()
        .map(|chip| marked(&chip.title, chip.is_selected))
        .collect();
    writeln!(out, "Categories: {}", chips.join(" "))?;

    if let Some(order) = view.sort {
        writeln!(out, "Sort: {order}")?;
    }
    writeln!(out)?;

    if view.no_matching {
        return writeln!(out, "{NO_MATCHING_MESSAGE}");
    }

    let cells: Vec<[String; 4]> = view.rows.iter().map(row_cells).collect();
    let widths = column_widths(&cells);
    write_line(&mut out, &HEADERS.map(str::to_owned), &widths)?;
    for row in &cells {
        write_line(&mut out, row, &widths)?;
    }
    Ok(())
}

fn marked(label: &str, is_active: bool) -> String {
    if is_active {
        format!("[{label}]")
    } else {
        label.to_owned()
    }
}

fn row_cells(row: &ProductRow) -> [String; 4] {
    let user = match row.user_highlight {
        UserHighlight::Male => format!("{} (m)", row.user_name),
        UserHighlight::Female => format!("{} (f)", row.user_name),
        UserHighlight::None => row.user_name.clone(),
    };
    [
        row.id.to_string(),
        row.name.clone(),
        row.category_label.clone(),
        user,
    ]
}

fn column_widths(rows: &[[String; 4]]) -> [usize; 4] {
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn write_line(out: &mut impl Write, cells: &[String; 4], widths: &[usize; 4]) -> io::Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(out, "{}", padded.join(COLUMN_GAP).trim_end())
}
