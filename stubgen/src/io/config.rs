//! Generator configuration stored in `stubgen.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::entities::{EntityNameList, default_entities};

/// Default config file name, looked up relative to the working directory.
pub const CONFIG_FILE_NAME: &str = "stubgen.toml";

/// Generator configuration (TOML).
///
/// This file is intended to be edited by hand per use. Missing fields fall
/// back to the defaults, which generate the `mirror`/`portal` loops.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Entity type names, in nesting order.
    pub entities: EntityNameList,

    /// One indentation unit; repeated once per nesting level.
    pub indent: String,

    /// Appended to an entity name to form its collection (`mirror` -> `mirrors`).
    pub collection_suffix: String,

    /// Appended to every check name (`mirrorVsPortal` + suffix).
    pub function_suffix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            entities: default_entities(),
            indent: "\t".to_string(),
            collection_suffix: "s".to_string(),
            function_suffix: String::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(anyhow!("indent must contain only spaces and tabs"));
        }
        if !is_suffix(&self.collection_suffix) {
            return Err(anyhow!(
                "collection_suffix must contain only identifier characters"
            ));
        }
        if !is_suffix(&self.function_suffix) {
            return Err(anyhow!(
                "function_suffix must contain only identifier characters"
            ));
        }
        Ok(())
    }
}

fn is_suffix(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `GeneratorConfig::default()`.
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    if !path.exists() {
        let cfg = GeneratorConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GeneratorConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &GeneratorConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
