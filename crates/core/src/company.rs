//! Company name and logo printed on documents.

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, require};

/// The company singleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Trading name.
    pub name: String,
    /// Logo as a data URL or path.
    #[serde(default)]
    pub logo: Option<String>,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "Minha Empresa".to_string(),
            logo: None,
        }
    }
}

impl CompanyInfo {
    /// Builds validated company info; a blank logo means none.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingField` for a blank name.
    pub fn new(name: &str, logo: Option<&str>) -> Result<Self, RecordError> {
        require("name", name)?;
        Ok(Self {
            name: name.trim().to_string(),
            logo: logo
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(ToString::to_string),
        })
    }
}
