//! Assessment catalog
//!
//! The catalog is loaded once (embedded data or a JSON file) and treated as
//! read-only for the rest of the process. Assessment names are the identity
//! key used by evaluation labels and by provider name matching, so they must
//! be unique.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ArecError, Result};

mod duration;

pub use duration::first_integer;

/// Vendor suffix carried by catalog names.
pub const VENDOR_SUFFIX: &str = " | SHL";

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub name: String,
    pub url: String,
    pub remote_testing_support: bool,
    #[serde(rename = "adaptiveIRTSupport")]
    pub adaptive_irt_support: bool,
    /// Free text embedding a minute count, e.g. "35 minutes"
    pub duration: String,
    /// Free-text category label
    pub test_type: String,
}

impl Assessment {
    /// Name with the vendor suffix removed.
    #[must_use]
    pub fn display_name(&self) -> &str {
        strip_vendor_suffix(&self.name)
    }

    /// Duration in minutes: the first integer in the duration text.
    #[must_use]
    pub fn duration_minutes(&self) -> Option<u32> {
        first_integer(&self.duration)
    }
}

/// Remove the vendor suffix (if present) and surrounding whitespace.
#[must_use]
pub fn strip_vendor_suffix(name: &str) -> &str {
    name.strip_suffix(VENDOR_SUFFIX).unwrap_or(name).trim()
}

/// Immutable, ordered list of assessments with unique names.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Assessment>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names.
    pub fn new(entries: Vec<Assessment>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(ArecError::Catalog(format!(
                    "duplicate assessment name: {}",
                    entry.name
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let entries: Vec<Assessment> = serde_json::from_str(raw)
            .map_err(|err| ArecError::Catalog(format!("parse catalog: {err}")))?;
        Self::new(entries)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| ArecError::Catalog(format!("read {}: {err}", path.display())))?;
        let catalog = Self::from_json(&raw)?;
        debug!(path = %path.display(), entries = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise the built-in catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(Self::builtin, Self::load)
    }

    #[must_use]
    pub fn entries(&self) -> &[Assessment] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assessment> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Assessment> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Case-insensitive lookup that also accepts names without the vendor suffix.
    #[must_use]
    pub fn find_loose(&self, name: &str) -> Option<&Assessment> {
        let wanted = strip_vendor_suffix(name).to_lowercase();
        self.get(name).or_else(|| {
            self.entries
                .iter()
                .find(|entry| entry.display_name().to_lowercase() == wanted)
        })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Assessment;
    type IntoIter = std::slice::Iter<'a, Assessment>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
