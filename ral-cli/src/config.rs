use std::fs::File;
use std::io::Read;
use std::path::Path;

use ral_core::{RegimeError, TaxRegime};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading a tax regime file.
#[derive(Debug, Error)]
pub enum RegimeLoaderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid regime: {0}")]
    Invalid(#[from] RegimeError),
}

impl From<toml::de::Error> for RegimeLoaderError {
    fn from(err: toml::de::Error) -> Self {
        RegimeLoaderError::TomlParse(err.to_string())
    }
}

/// Loader for [`TaxRegime`] definitions stored as TOML.
///
/// The file mirrors the fields of [`TaxRegime`]. Amounts and rates should be
/// written as strings (`rate = "0.0919"`) so they keep their exact decimal
/// value; the unbounded top bracket simply omits `upper_bound`.
pub struct RegimeLoader;

impl RegimeLoader {
    /// Parse and validate a regime from any reader.
    pub fn parse<R: Read>(mut reader: R) -> Result<TaxRegime, RegimeLoaderError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let regime: TaxRegime = toml::from_str(&text)?;
        regime.validate()?;

        debug!(
            tax_year = regime.tax_year,
            region = %regime.region,
            municipality = %regime.municipality,
            "parsed tax regime"
        );
        Ok(regime)
    }

    /// Parse and validate the regime stored at `path`.
    pub fn load(path: &Path) -> Result<TaxRegime, RegimeLoaderError> {
        let file = File::open(path)?;
        let regime = Self::parse(file)?;
        info!(path = %path.display(), tax_year = regime.tax_year, "loaded tax regime");
        Ok(regime)
    }

    /// The regime at `path` when given, otherwise the built-in one.
    pub fn resolve(path: Option<&Path>) -> Result<TaxRegime, RegimeLoaderError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(TaxRegime::builtin().clone()),
        }
    }

    /// Serializes a regime into the TOML layout [`RegimeLoader::parse`] reads.
    pub fn to_toml(regime: &TaxRegime) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(regime)
    }
}
