//! Combined view: the category strip plus the selected category's products.

use std::fmt::Write;

use serde::Serialize;

use slider_core::Catalog;

use crate::cli::{GlobalOpts, ShowArgs};
use crate::error::CliError;
use crate::output;

use super::categories::{self, CategoryRow, CategoryView};
use super::products::{self, ProductRow, ProductView};

#[derive(Debug, Serialize)]
struct ShowView {
    selected: Option<usize>,
    categories: Vec<CategoryView>,
    products: Vec<ProductView>,
}

fn detail(view: &ShowView, color: bool) -> String {
    let mut out = String::new();
    let rows: Vec<_> = view
        .categories
        .iter()
        .map(|c| CategoryRow::new(c, color))
        .collect();
    let _ = writeln!(out, "{}", output::render_table(&rows));

    let heading = view
        .selected
        .and_then(|i| view.categories.get(i))
        .map_or("(no category)", |c| c.name.as_str());
    let _ = writeln!(out);
    let _ = writeln!(out, "── {heading} ──");

    if view.products.is_empty() {
        let _ = write!(out, "No products in this category");
    } else {
        let rows: Vec<_> = view.products.iter().map(ProductRow::from).collect();
        let _ = write!(out, "{}", output::render_table(&rows));
    }
    out
}

pub fn handle(catalog: &mut Catalog, args: &ShowArgs, global: &GlobalOpts) -> Result<(), CliError> {
    if let Some(index) = args.category {
        catalog.select_category(index)?;
    }

    let view = ShowView {
        selected: catalog.state().selected_index(),
        categories: categories::views(catalog.state()),
        products: products::views(catalog, false),
    };

    let color = output::should_color(&global.color_mode());
    let out = output::render_single(
        &global.output_format(),
        &view,
        |v| detail(v, color),
        |v| {
            v.products
                .iter()
                .map(|p| p.id.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        },
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
