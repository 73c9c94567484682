use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::catalog::item::{ItemDefinition, ItemKind, PatternDescriptor, PatternRequirement};
use crate::io::configuration::{DEFAULT_ITEM_COLOR, DEFAULT_PATTERN_SIZE};
use crate::io::error::{Result, SolverError, file_system};

/// On-disk catalog layout: a flat list of `[[items]]` tables
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: String,
    name: String,
    #[serde(default)]
    abbr: Option<String>,
    #[serde(default)]
    color: Option<[u8; 3]>,
    #[serde(default)]
    kind: ItemKind,
    #[serde(default)]
    size: Option<usize>,
    #[serde(default)]
    requirements: Vec<PatternRequirement>,
}

/// Map each identifier to its position, rejecting repeats
fn index_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if index.insert(id.to_string(), position).is_some() {
            return Err(SolverError::DuplicateItem { id: id.to_string() });
        }
    }
    Ok(index)
}

/// Indexed collection of item definitions and placeable patterns
///
/// Lookups by identifier go through hash indices built once at construction,
/// so resolving items or patterns never scans a list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Arc<ItemDefinition>>,
    index: HashMap<String, usize>,
    patterns: Vec<PatternDescriptor>,
    pattern_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from item definitions and pattern descriptors
    ///
    /// # Errors
    ///
    /// Returns an error if two items or two patterns share an identifier
    pub fn new(items: Vec<ItemDefinition>, patterns: Vec<PatternDescriptor>) -> Result<Self> {
        let index = index_ids(items.iter().map(|item| item.id.as_str()))?;
        let pattern_index = index_ids(patterns.iter().map(|pattern| pattern.id.as_str()))?;

        Ok(Self {
            items: items.into_iter().map(Arc::new).collect(),
            index,
            patterns,
            pattern_index,
        })
    }

    /// Parse a catalog from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid catalog or repeats an identifier
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::parse(text, "<inline>")
    }

    /// Load a catalog from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(file_system(path, "catalog read"))?;
        Self::parse(&text, &path.display().to_string())
    }

    fn parse(text: &str, origin: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(text).map_err(|source| SolverError::CatalogParse {
            origin: origin.to_string(),
            source,
        })?;

        let mut items = Vec::with_capacity(file.items.len());
        let mut patterns = Vec::new();
        for entry in file.items {
            if entry.kind == ItemKind::Mutation {
                patterns.push(PatternDescriptor::new(
                    entry.id.clone(),
                    entry.size.unwrap_or(DEFAULT_PATTERN_SIZE),
                    entry.requirements,
                ));
            }
            items.push(ItemDefinition {
                id: entry.id,
                name: entry.name,
                abbr: entry.abbr,
                color: entry.color.unwrap_or(DEFAULT_ITEM_COLOR),
                kind: entry.kind,
            });
        }

        Self::new(items, patterns)
    }

    /// Look up an item by identifier
    pub fn item(&self, id: &str) -> Option<&Arc<ItemDefinition>> {
        self.index.get(id).and_then(|&position| self.items.get(position))
    }

    /// Look up a placeable pattern by identifier
    pub fn pattern(&self, id: &str) -> Option<&PatternDescriptor> {
        self.pattern_index
            .get(id)
            .and_then(|&position| self.patterns.get(position))
    }

    /// All items in definition order
    pub fn items(&self) -> &[Arc<ItemDefinition>] {
        &self.items
    }

    /// Filler-only items in definition order
    pub fn base_items(&self) -> impl Iterator<Item = &Arc<ItemDefinition>> {
        self.items.iter().filter(|item| item.kind == ItemKind::Base)
    }

    /// All placeable patterns in definition order
    pub fn patterns(&self) -> &[PatternDescriptor] {
        &self.patterns
    }
}
