// crates/cli/src/presentation.rs
use comfy_table::{Table, presets::UTF8_FULL};
use serde::Serialize;
use serde_json::json;
use shoe_sizes_domain::{BatchParseResult, CommonSizePreset, ProductDraft, SizeSet};
use shoe_sizes_shared_kernel::{Result, ShoeSize};

use crate::options::OutputFormat;

/// Serializes `value` for JSON/YAML, or hands it to `text` for table output.
fn render<T, F>(value: &T, format: OutputFormat, text: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Table => Ok(text(value)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?.trim_end().to_string()),
    }
}

fn join_sizes(sizes: &[ShoeSize]) -> String {
    sizes.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

pub fn size_set(sizes: &SizeSet, format: OutputFormat) -> Result<String> {
    render(sizes, format, |s| join_sizes(s))
}

pub fn validity(text: &str, sizes: &SizeSet, format: OutputFormat) -> Result<String> {
    let report = json!({ "input": text, "valid": !sizes.is_empty(), "sizes": sizes });
    render(&report, format, |_| (if sizes.is_empty() { "invalid" } else { "valid" }).to_string())
}

pub fn formatted(value: &str, format: OutputFormat) -> Result<String> {
    render(&json!({ "formatted": value }), format, |_| value.to_string())
}

pub fn batch(result: &BatchParseResult, format: OutputFormat) -> Result<String> {
    render(result, format, |r| match r.error_message() {
        Some(message) => format!("invalid: {message}"),
        None => format!("{} ({} sizes)", r.formatted, r.sizes.len()),
    })
}

pub fn presets(sizes: &[ShoeSize], format: OutputFormat) -> Result<String> {
    render(sizes, format, join_sizes)
}

pub fn common_presets(presets: &[CommonSizePreset], format: OutputFormat) -> Result<String> {
    render(presets, format, |presets| {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec!["LABEL", "VALUE", "TYPE"]);
        for preset in presets {
            table.add_row(vec![preset.label, preset.value, "preset"]);
        }
        table.to_string()
    })
}

pub fn sku(code: &str, format: OutputFormat) -> Result<String> {
    render(&json!({ "sku": code }), format, |_| code.to_string())
}

pub fn drafts(drafts: &[ProductDraft], format: OutputFormat) -> Result<String> {
    render(drafts, format, |drafts| {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["SKU", "NAME", "SIZE", "COLOR", "PRICE", "COST", "ALERT", "GENDER"]);
        for d in drafts {
            table.add_row(vec![
                d.sku.clone(),
                d.name.clone(),
                d.size.clone(),
                d.color.clone(),
                format!("{:.2}", d.price),
                format!("{:.2}", d.cost_price),
                d.stock_alert.to_string(),
                d.gender.to_string(),
            ]);
        }
        table.to_string()
    })
}
