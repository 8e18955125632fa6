//! Product listing for the selected category.

use serde::Serialize;
use tabled::Tabled;

use slider_core::{Catalog, ImageResolver, Product};

use crate::cli::{GlobalOpts, OutputFormat, ProductsArgs};
use crate::error::CliError;
use crate::output;

// ── View & table rows ───────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(super) struct ProductView {
    pub id: String,
    pub name: String,
    pub price: Option<f64>,
    pub price_label: String,
    pub rating: Option<f64>,
    pub photos: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub photo_urls: Vec<String>,
}

impl ProductView {
    /// Build a view; image URLs are resolved only when `images` is set.
    pub(super) fn new(product: &Product, images: Option<&ImageResolver>) -> Self {
        let (image_url, photo_urls) = images.map_or_else(
            || (None, Vec::new()),
            |resolver| {
                (
                    resolver.product_image(product).map(String::from),
                    resolver
                        .product_photos(product)
                        .into_iter()
                        .map(String::from)
                        .collect(),
                )
            },
        );

        Self {
            id: product.id.clone(),
            name: product.display_name().to_owned(),
            price: product.price,
            price_label: product.price_label(),
            rating: product.rating,
            photos: product.photo_count(),
            image_url,
            photo_urls,
        }
    }
}

fn rating_cell(rating: Option<f64>) -> String {
    rating.map(|r| format!("{r:.1}")).unwrap_or_default()
}

#[derive(Tabled)]
pub(super) struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Photos")]
    photos: usize,
}

impl From<&ProductView> for ProductRow {
    fn from(p: &ProductView) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            price: p.price_label.clone(),
            rating: rating_cell(p.rating),
            photos: p.photos,
        }
    }
}

#[derive(Tabled)]
struct ProductImageRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Image")]
    image: String,
    #[tabled(rename = "Photos")]
    photos: String,
}

impl From<&ProductView> for ProductImageRow {
    fn from(p: &ProductView) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            price: p.price_label.clone(),
            image: p.image_url.clone().unwrap_or_default(),
            photos: p.photo_urls.join("\n"),
        }
    }
}

pub(super) fn views(catalog: &Catalog, with_images: bool) -> Vec<ProductView> {
    let images = with_images.then_some(catalog.images());
    catalog
        .state()
        .active_products()
        .iter()
        .map(|p| ProductView::new(p, images))
        .collect()
}

/// Render product views; the image columns only appear with `with_images`.
fn render(format: &OutputFormat, all: &[ProductView], with_images: bool) -> String {
    if with_images {
        output::render_list(format, all, |p| ProductImageRow::from(p), |p| p.id.clone())
    } else {
        output::render_list(format, all, |p| ProductRow::from(p), |p| p.id.clone())
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(
    catalog: &mut Catalog,
    args: &ProductsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if let Some(index) = args.category {
        catalog.select_category(index)?;
    }

    let all = views(catalog, args.with_images);
    let out = render(&global.output_format(), &all, args.with_images);
    output::print_output(&out, global.quiet);
    Ok(())
}
