//! Category listing.

use serde::Serialize;
use tabled::Tabled;

use slider_core::{Catalog, SelectionState};

use crate::cli::{CategoriesArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── View & table row ────────────────────────────────────────────────

/// Serializable view of one category with its selection flag.
#[derive(Debug, Serialize)]
pub(super) struct CategoryView {
    pub index: usize,
    pub id: i64,
    pub name: String,
    pub products: usize,
    pub selected: bool,
}

#[derive(Tabled)]
pub(super) struct CategoryRow {
    #[tabled(rename = "")]
    marker: String,
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Products")]
    products: usize,
}

impl CategoryRow {
    pub(super) fn new(view: &CategoryView, color: bool) -> Self {
        Self {
            marker: output::selection_marker(view.selected, color),
            index: view.index,
            id: view.id,
            name: output::highlight(&view.name, view.selected, color),
            products: view.products,
        }
    }
}

pub(super) fn views(state: &SelectionState) -> Vec<CategoryView> {
    state
        .active_categories()
        .iter()
        .enumerate()
        .map(|(index, c)| CategoryView {
            index,
            id: c.id,
            name: c.name.clone(),
            products: c.products.len(),
            selected: state.is_selected(index),
        })
        .collect()
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(
    catalog: &mut Catalog,
    args: &CategoriesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if let Some(index) = args.category {
        catalog.select_category(index)?;
    }

    let color = output::should_color(&global.color_mode());
    let all = views(catalog.state());
    let out = output::render_list(
        &global.output_format(),
        &all,
        |v| CategoryRow::new(v, color),
        |v| v.id.to_string(),
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use slider_core::{Category, Feed, Product};

    use super::*;

    #[test]
    fn views_flag_the_selected_category() {
        let mut state = SelectionState::with_feed(Feed::new(
            "Success",
            vec![
                Category::new(283, "Вода", vec![Product::new("1"), Product::new("2")]),
                Category::new(301, "Кулеры", vec![]),
            ],
        ));
        state.select_category(1).unwrap();

        let all = views(&state);
        assert_eq!(all.len(), 2);
        assert!(!all[0].selected);
        assert_eq!(all[0].products, 2);
        assert!(all[1].selected);
        assert_eq!(all[1].id, 301);
    }
}
