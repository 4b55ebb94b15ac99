// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};
use shoe_sizes_domain::GenderType;

use crate::{
    options::OutputFormat,
    parsers::{parse_price, parse_size_value, parse_stock_alert},
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "shoe_sizes",
    version = crate::VERSION,
    about = "Parse, format and expand shoe size ranges for batch product entry"
)]
pub struct Args {
    /// Output format (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Config file (.json, .yaml or .yml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a size specification such as "35-37,39,40-42"
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Check whether a size specification yields any size
    Validate {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Render sizes compactly ("39-42" or "36,38,40")
    Format {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        sizes: Vec<String>,
    },

    /// Read a batch-entry size field, reporting why it is rejected
    Batch {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// List preset sizes for a category (children, female, male, all)
    Presets {
        /// Category; unknown names list every size
        category: Option<String>,

        /// List the labeled common ranges instead
        #[arg(long, conflicts_with = "category")]
        common: bool,
    },

    /// Build a SKU label for one variant
    Sku {
        #[arg(long)]
        style: String,
        #[arg(long)]
        color: String,
        #[arg(long, value_parser = parse_size_value, allow_hyphen_values = true)]
        size: f64,
    },

    /// Expand one batch entry into a product draft per size
    Expand(ExpandArgs),
}

#[derive(ClapArgs, Debug)]
pub struct ExpandArgs {
    /// Size specification, e.g. "39-42"
    #[arg(allow_hyphen_values = true)]
    pub sizes: String,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub product_name: Option<String>,

    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub color: String,

    #[arg(long, value_parser = parse_price, allow_hyphen_values = true)]
    pub price: f64,

    #[arg(long, value_parser = parse_price, allow_hyphen_values = true)]
    pub cost_price: f64,

    #[arg(long, value_parser = parse_stock_alert, default_value = "10")]
    pub stock_alert: u32,

    /// adult_male, adult_female, boy, girl or unisex
    #[arg(long, default_value = "unisex")]
    pub gender: GenderType,
}
