//! Provider identity types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FolioError;

/// LLM vendors Folio knows how to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    /// Groq (OpenAI-compatible chat completions API)
    Groq,
    /// Google Gemini (generateContent API)
    Gemini,
}

impl Vendor {
    /// Get the vendor name
    pub fn name(&self) -> &'static str {
        match self {
            Vendor::Groq => "groq",
            Vendor::Gemini => "gemini",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Vendor {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "groq" => Ok(Vendor::Groq),
            "gemini" | "google" => Ok(Vendor::Gemini),
            other => Err(FolioError::config(format!("Unknown vendor: {}", other))),
        }
    }
}

/// One selectable backend: a vendor plus the model served through it.
///
/// Descriptors are immutable values. The failover controller compares them by
/// equality, so two descriptors with the same vendor and model but different
/// names are distinct chain entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    /// Display name, unique within a chain (e.g. `groq-primary`)
    pub name: String,
    /// Vendor model identifier (e.g. `gemma2-9b-it`)
    pub model_id: String,
    /// Vendor serving the model
    pub vendor: Vendor,
}

impl ProviderDescriptor {
    /// Create a new descriptor
    pub fn new(name: impl Into<String>, model_id: impl Into<String>, vendor: Vendor) -> Self {
        Self {
            name: name.into(),
            model_id: model_id.into(),
            vendor,
        }
    }
}

impl fmt::Display for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.vendor, self.model_id)
    }
}
