// crates/cli/src/config.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use derive_builder::Builder;
use serde::Deserialize;
use shoe_sizes_domain::PresetCategory;
use shoe_sizes_shared_kernel::{
    ErrorContext, InfrastructureError, PresentationError, Result, ShoeSizesError,
};

use crate::{args::Args, options::OutputFormat};

/// Settings resolved from CLI flags, an optional config file and defaults.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub format: OutputFormat,
    /// Category listed by `presets` when none is given.
    #[builder(default)]
    pub category: PresetCategory,
}

/// On-disk config; every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub format: Option<OutputFormat>,
    pub category: Option<PresetCategory>,
}

impl FileConfig {
    /// Reads a JSON or YAML config, chosen by file extension.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or does not deserialize.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        let parsed = match ext.as_deref() {
            Some("json") => serde_json::from_str(&text).map_err(ShoeSizesError::from),
            Some("yaml" | "yml") => serde_yaml::from_str(&text).map_err(ShoeSizesError::from),
            _ => {
                return Err(PresentationError::UnsupportedConfigFormat { path: path.to_path_buf() }.into());
            }
        };
        parsed.with_context(|| format!("loading config {}", path.display()))
    }
}

impl Config {
    /// Flag > config file > default.
    ///
    /// # Errors
    /// Returns an error if the config file named by `--config` cannot be loaded.
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = args.config.as_deref().map(FileConfig::load).transpose()?.unwrap_or_default();
        let config = Self::layer(args.format, file)?;
        log::debug!("resolved config: {config:?} (file: {:?})", args.config.as_ref().map(PathBuf::as_path));
        Ok(config)
    }

    fn layer(format: Option<OutputFormat>, file: FileConfig) -> Result<Self> {
        let mut builder = ConfigBuilder::default();
        if let Some(format) = format.or(file.format) {
            builder.format(format);
        }
        if let Some(category) = file.category {
            builder.category(category);
        }
        builder
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = Config::layer(None, FileConfig::default()).unwrap();
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.category, PresetCategory::All);
    }

    #[test]
    fn flag_overrides_file() {
        let file = FileConfig { format: Some(OutputFormat::Yaml), category: Some(PresetCategory::Male) };
        let config = Config::layer(Some(OutputFormat::Json), file).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.category, PresetCategory::Male);
    }

    #[test]
    fn file_keys_deserialize() {
        let file: FileConfig = serde_yaml::from_str("format: json\ncategory: female\n").unwrap();
        assert_eq!(file, FileConfig { format: Some(OutputFormat::Json), category: Some(PresetCategory::Female) });
        assert!(serde_json::from_str::<FileConfig>(r#"{"colour":"red"}"#).is_err());
    }
}
