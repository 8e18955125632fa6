//! Offline decode of a saved payload.

use std::fmt::Write;

use slider_core::{Feed, to_wire};

use crate::cli::{DecodeArgs, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::read_payload;

fn summary(feed: &Feed) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Status:      {}", feed.status);
    let _ = writeln!(out, "Categories:  {}", feed.categories.len());
    let _ = write!(out, "Products:    {}", feed.product_count());
    for (i, c) in feed.categories.iter().enumerate() {
        let _ = write!(
            out,
            "\n  [{i}] {} (id {}): {} products",
            c.name,
            c.id,
            c.products.len()
        );
    }
    out
}

/// Decode without gating on status: the point is to inspect the payload.
pub fn handle(args: &DecodeArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let raw = read_payload(&args.path)?;
    let feed = slider_core::decode(&raw)?;

    let out = if args.wire {
        let wire = to_wire(&feed);
        match global.output_format() {
            OutputFormat::JsonCompact => output::render_json_compact(&wire),
            OutputFormat::Yaml => output::render_yaml(&wire),
            _ => output::render_json_pretty(&wire),
        }
    } else {
        output::render_single(&global.output_format(), &feed, summary, |f| f.status.clone())
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
