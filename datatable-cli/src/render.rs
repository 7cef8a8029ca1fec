//! Text rendering of a table view: toolbar, facet menus, body and footer.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use datatable_lib::TableView;

/// Renders the whole table.
pub fn render(view: &TableView<'_>) -> String {
    let mut out = String::new();
    out.push_str(&toolbar(view));
    out.push('\n');
    let menus = facet_menus(view);
    if !menus.is_empty() {
        out.push_str(&menus);
        out.push('\n');
    }
    out.push_str(&body(view).to_string());
    out.push('\n');
    out.push_str(&footer(view));
    out
}

/// Search input and active facet chips.
pub fn toolbar(view: &TableView<'_>) -> String {
    let mut parts = Vec::new();
    if let Some(column) = view.search_column() {
        parts.push(format!("Filter {}: \"{}\"", column.title.to_lowercase(), view.search_value()));
    }
    for facet in view.facets().iter().filter(|f| f.is_active()) {
        parts.push(format!("{}: {}", facet.title, facet.selected.join(", ")));
    }
    if view.is_filtered() {
        parts.push("[Reset]".to_string());
    }
    parts.join("  ")
}

/// One line per facet with option counts; selected options are checked.
pub fn facet_menus(view: &TableView<'_>) -> String {
    view.facets()
        .iter()
        .map(|facet| {
            let options: Vec<String> = facet
                .options
                .iter()
                .map(|option| {
                    let mark = if facet.is_selected(&option.value) { "■" } else { "□" };
                    let label = match option.value.as_str() {
                        "" => "(empty)",
                        value => value,
                    };
                    format!("{} {} ({})", mark, label, option.count)
                })
                .collect();
            format!("{}: {}", facet.title, options.join("  "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header and rows of the current page, visible columns only.
pub fn body(view: &TableView<'_>) -> Table {
    let columns = view.visible_columns();
    let rows = view.page_rows();
    let with_links = rows.iter().any(|row| view.row_link(row).is_some());

    let mut header: Vec<String> = columns
        .iter()
        .map(|c| c.render_header(view.sort_direction(&c.id)))
        .collect();
    if with_links {
        header.push("Link".to_string());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    if rows.is_empty() {
        table.add_row(vec!["No results."]);
    }
    for row in rows {
        let mut cells: Vec<String> = columns.iter().map(|c| c.render_cell(row)).collect();
        if with_links {
            cells.push(view.row_link(row).unwrap_or_default());
        }
        table.add_row(cells);
    }
    table
}

/// Page position, row count and page size selector.
pub fn footer(view: &TableView<'_>) -> String {
    let pagination = view.pagination();
    let mut nav = Vec::new();
    if view.can_previous_page() {
        nav.push("‹ prev");
    }
    if view.can_next_page() {
        nav.push("next ›");
    }
    let line = format!(
        "Page {} of {} · {} rows · per page {}",
        pagination.page_index + 1,
        view.page_count(),
        view.total_rows(),
        page_sizes(view)
    );
    if nav.is_empty() {
        line
    } else {
        format!("{}  {}", line, nav.join(" | "))
    }
}

/// The configured page sizes with the current one bracketed. A size set
/// outside the options is appended.
fn page_sizes(view: &TableView<'_>) -> String {
    let current = view.pagination().page_size;
    let mut sizes = view.page_size_options().to_vec();
    if !sizes.contains(&current) {
        sizes.push(current);
    }
    sizes
        .iter()
        .map(|&size| {
            if size == current {
                format!("[{}]", size)
            } else {
                size.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use datatable_lib::model::{Column, Row};
    use datatable_lib::{DataTable, TableConfig};

    use super::*;

    fn table() -> DataTable {
        let columns = vec![
            Column::new("name", "Name"),
            Column::new("kind", "Kind").facet(),
            Column::new("secret", "Secret").hidden(),
        ];
        let rows = (0..12i64)
            .map(|i| {
                Row::new()
                    .set("id", i)
                    .set("name", format!("Contract{:02}", i))
                    .set("kind", if i < 4 { "token" } else { "vault" })
                    .set("secret", "s3cr3t")
            })
            .collect();
        DataTable::new(columns, rows, TableConfig::new().with_search_column("name")).unwrap()
    }

    #[test]
    fn test_toolbar() {
        let mut table = table();
        assert_eq!(toolbar(&table.view()), "Filter name: \"\"");
        table.set_search_value("contract1");
        table.toggle_facet_value("kind", "vault");
        assert_eq!(
            toolbar(&table.view()),
            "Filter name: \"contract1\"  Kind: vault  [Reset]"
        );
    }

    #[test]
    fn test_facet_menus() {
        let mut table = table();
        table.toggle_facet_value("kind", "token");
        assert_eq!(facet_menus(&table.view()), "Kind: ■ token (4)  □ vault (8)");
    }

    #[test]
    fn test_body_uses_visible_columns_and_sort_arrows() {
        let mut table = table();
        table.set_sorting("name");
        table.set_sorting("name");
        let rendered = body(&table.view()).to_string();
        assert!(rendered.contains("Name ↓"));
        assert!(rendered.contains("Contract11"));
        assert!(!rendered.contains("Secret"));
        assert!(!rendered.contains("s3cr3t"));
        assert!(!rendered.contains("Link"));
    }

    #[test]
    fn test_body_empty() {
        let mut table = table();
        table.set_search_value("nothing");
        assert!(body(&table.view()).to_string().contains("No results."));
    }

    #[test]
    fn test_footer() {
        let mut table = table();
        assert_eq!(
            footer(&table.view()),
            "Page 1 of 2 · 12 rows · per page [10] 20 30 40 50  next ›"
        );
        table.next_page();
        assert_eq!(
            footer(&table.view()),
            "Page 2 of 2 · 12 rows · per page [10] 20 30 40 50  ‹ prev"
        );
    }

    #[test]
    fn test_footer_page_size_outside_options() {
        let mut table = table();
        table.set_page_size(4);
        assert_eq!(
            footer(&table.view()),
            "Page 1 of 3 · 12 rows · per page 10 20 30 40 50 [4]  next ›"
        );
    }
}
