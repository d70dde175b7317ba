use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Catalog format version this build understands
pub const SUPPORTED_VERSION: u32 = 1;

const EMBEDDED_CATALOG: &str = include_str!("../data/remedies.toml");

/// One home remedy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemedyRecord {
    pub remedy: String,
    pub ingredients: String,
    pub method: String,
    pub application: String,
    pub frequency: String,
    pub tips: String,
    pub how_it_works: String,
    pub benefits: String,
}

impl RemedyRecord {
    /// Attributes in display order, paired with their labels
    pub fn attributes(&self) -> [(&'static str, &str); 8] {
        [
            ("Remedy", self.remedy.as_str()),
            ("Ingredients", self.ingredients.as_str()),
            ("Method", self.method.as_str()),
            ("Application", self.application.as_str()),
            ("Frequency", self.frequency.as_str()),
            ("Tips", self.tips.as_str()),
            ("How It Works", self.how_it_works.as_str()),
            ("Benefits", self.benefits.as_str()),
        ]
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    version: u32,
    #[serde(default)]
    concerns: Vec<ConcernEntry>,
}

#[derive(Debug, Deserialize)]
struct ConcernEntry {
    key: String,
    #[serde(default)]
    remedies: Vec<RemedyRecord>,
}

/// Read-only mapping from concern key to its remedies
#[derive(Debug, Clone)]
pub struct RemedyCatalog {
    version: u32,
    /// Concern keys in file order
    order: Vec<String>,
    entries: HashMap<String, Vec<RemedyRecord>>,
}

impl RemedyCatalog {
    /// The catalog compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_toml_str(EMBEDDED_CATALOG)
    }

    /// Load a catalog file in the same format as the embedded one
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&contents)?;
        tracing::info!(
            "Loaded remedy catalog v{} from {} ({} concerns)",
            catalog.version,
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;

        if file.version != SUPPORTED_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                found: file.version,
                expected: SUPPORTED_VERSION,
            });
        }

        let mut order = Vec::with_capacity(file.concerns.len());
        let mut entries = HashMap::with_capacity(file.concerns.len());

        for entry in file.concerns {
            let key = entry.key;
            if key.is_empty() || key != key.trim() || key != key.to_lowercase() {
                return Err(CatalogError::InvalidKey(key));
            }
            if entries.contains_key(&key) {
                return Err(CatalogError::DuplicateConcern(key));
            }
            for (index, record) in entry.remedies.iter().enumerate() {
                check_record(&key, index, record)?;
            }
            order.push(key.clone());
            entries.insert(key, entry.remedies);
        }

        Ok(Self {
            version: file.version,
            order,
            entries,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Concern keys in the order they were declared
    pub fn concerns(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Remedies for an already-normalized key
    pub fn get(&self, key: &str) -> Option<&[RemedyRecord]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn check_record(concern: &str, index: usize, record: &RemedyRecord) -> Result<(), CatalogError> {
    let fields = [
        ("remedy", &record.remedy),
        ("ingredients", &record.ingredients),
        ("method", &record.method),
        ("application", &record.application),
        ("frequency", &record.frequency),
        ("tips", &record.tips),
        ("how_it_works", &record.how_it_works),
        ("benefits", &record.benefits),
    ];
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(CatalogError::EmptyField {
            concern: concern.to_string(),
            index,
            field: *field,
        }),
        None => Ok(()),
    }
}
