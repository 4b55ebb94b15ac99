use std::process::ExitCode;

use shoe_sizes_domain::{
    BatchEntry, PresetCategory, common_sizes, expand_batch, format_raw_size, format_size_range,
    generate_sku_code, is_valid_size_range, parse_batch_size_input, parse_size_range,
};
use shoe_sizes_shared_kernel::{PresentationError, Result};

use crate::{
    args::{Command, ExpandArgs},
    config::Config,
    presentation,
};

/// Rendered output plus the exit status it should produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self { output, success: true }
    }

    fn with_status(output: String, success: bool) -> Self {
        Self { output, success }
    }

    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
    }
}

/// Runs one subcommand.
///
/// # Errors
/// Returns an error for unusable arguments or serialization failures.
/// Rejected size input is reported through [`Outcome::success`] instead.
pub fn run(command: &Command, config: &Config) -> Result<Outcome> {
    let format = config.format;
    match command {
        Command::Parse { text } => presentation::size_set(&parse_size_range(text), format).map(Outcome::ok),
        Command::Validate { text } => {
            let sizes = parse_size_range(text);
            let output = presentation::validity(text, &sizes, format)?;
            Ok(Outcome::with_status(output, is_valid_size_range(text)))
        }
        Command::Format { sizes } => presentation::formatted(&format_values(sizes)?, format).map(Outcome::ok),
        Command::Batch { text } => {
            let result = parse_batch_size_input(text);
            let output = presentation::batch(&result, format)?;
            Ok(Outcome::with_status(output, result.valid))
        }
        Command::Presets { common: true, .. } => presentation::common_presets(common_sizes(), format).map(Outcome::ok),
        Command::Presets { category, .. } => {
            let category = category.as_deref().map_or(config.category, PresetCategory::lookup);
            presentation::presets(category.sizes(), format).map(Outcome::ok)
        }
        Command::Sku { style, color, size } => {
            presentation::sku(&generate_sku_code(style, color, *size), format).map(Outcome::ok)
        }
        Command::Expand(args) => {
            let drafts = expand_batch(&batch_entry(args), &args.sizes)?;
            presentation::drafts(&drafts, format).map(Outcome::ok)
        }
    }
}

/// A lone value is formatted as stored text; several must all be numbers.
fn format_values(raw: &[String]) -> Result<String> {
    if let [only] = raw {
        return Ok(format_raw_size(only));
    }

    let values = raw
        .iter()
        .map(|s| {
            s.trim().parse::<f64>().map_err(|e| PresentationError::InvalidValue {
                flag: "sizes".to_string(),
                value: s.clone(),
                reason: e.to_string(),
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(format_size_range(&values))
}

fn batch_entry(args: &ExpandArgs) -> BatchEntry {
    let entry = BatchEntry::new(&args.name, &args.category, &args.color, args.price, args.cost_price)
        .with_stock_alert(args.stock_alert)
        .with_gender(args.gender);
    match &args.product_name {
        Some(product_name) => entry.with_product_name(product_name),
        None => entry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OutputFormat;

    fn config() -> Config {
        Config::default()
    }

    #[test]
    fn validate_reports_status() {
        let ok = run(&Command::Validate { text: "39-40".into() }, &config()).unwrap();
        assert!(ok.success);
        let bad = run(&Command::Validate { text: "50".into() }, &config()).unwrap();
        assert_eq!(bad, Outcome { output: "invalid".into(), success: false });
    }

    #[test]
    fn format_single_raw_value() {
        assert_eq!(format_values(&["XL".to_string()]).unwrap(), "XL");
        assert_eq!(format_values(&["40.0".to_string()]).unwrap(), "40");
    }

    #[test]
    fn format_many_values() {
        let raw: Vec<String> = ["41", "39", "40"].map(String::from).to_vec();
        assert_eq!(format_values(&raw).unwrap(), "39-41");
        let raw: Vec<String> = ["41", "XL"].map(String::from).to_vec();
        assert!(format_values(&raw).is_err());
    }

    #[test]
    fn presets_default_to_config_category() {
        let config = Config { category: PresetCategory::Female, ..Config::default() };
        let out = run(&Command::Presets { category: None, common: false }, &config).unwrap();
        assert_eq!(out.output, "35 36 37 38 39 40");
    }

    #[test]
    fn expand_renders_json() {
        let args = ExpandArgs {
            sizes: "39,41".into(),
            name: "Runner".into(),
            product_name: None,
            category: "sneaker".into(),
            color: "Black".into(),
            price: 299.0,
            cost_price: 150.0,
            stock_alert: 10,
            gender: Default::default(),
        };
        let config = Config { format: OutputFormat::Json, ..Config::default() };
        let out = run(&Command::Expand(args), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out.output).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["size"], "41");
        assert_eq!(value[0]["costPrice"], 150.0);
    }
}
