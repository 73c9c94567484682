use serde::Deserialize;

use crate::io::configuration::{DEFAULT_ITEM_COLOR, DEFAULT_PATTERN_SIZE};

/// Whether an item is a plain filler or a pattern that can itself be placed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Filler-only item
    #[default]
    Base,
    /// Item with a footprint and filler requirements
    Mutation,
}

/// Immutable catalog entry referenced by solver layouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDefinition {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short label for board rendering
    pub abbr: Option<String>,
    /// RGB colour for board rendering
    pub color: [u8; 3],
    /// Base filler or placeable mutation
    pub kind: ItemKind,
}

impl ItemDefinition {
    /// Create a base item with the default colour and no abbreviation
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            abbr: None,
            color: DEFAULT_ITEM_COLOR,
            kind: ItemKind::Base,
        }
    }

    /// Set the board abbreviation
    #[must_use]
    pub fn with_abbr(mut self, abbr: impl Into<String>) -> Self {
        self.abbr = Some(abbr.into());
        self
    }

    /// Set the rendering colour
    #[must_use]
    pub const fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    /// Set the item kind
    #[must_use]
    pub const fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    /// Board label: the abbreviation, or the first two letters of the name
    pub fn label(&self) -> String {
        self.abbr.as_ref().map_or_else(
            || self.name.chars().take(2).collect::<String>().to_uppercase(),
            Clone::clone,
        )
    }
}

/// One entry of a pattern's filler requirement list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatternRequirement {
    /// Identifier of the required filler item
    pub id: String,
    /// Units needed around each placement
    pub amount: usize,
}

impl PatternRequirement {
    /// Require `amount` units of item `id`
    pub fn new(id: impl Into<String>, amount: usize) -> Self {
        Self {
            id: id.into(),
            amount,
        }
    }
}

/// Placeable pattern: a square footprint plus its filler requirements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDescriptor {
    /// Identifier, shared with the pattern's own `ItemDefinition`
    pub id: String,
    /// Footprint side length
    pub size: usize,
    /// Ordered filler requirements for a single placement
    pub requirements: Vec<PatternRequirement>,
}

impl PatternDescriptor {
    /// Create a pattern with an explicit footprint size
    pub fn new(id: impl Into<String>, size: usize, requirements: Vec<PatternRequirement>) -> Self {
        Self {
            id: id.into(),
            size,
            requirements,
        }
    }

    /// Create a 1x1 pattern
    pub fn single(id: impl Into<String>, requirements: Vec<PatternRequirement>) -> Self {
        Self::new(id, DEFAULT_PATTERN_SIZE, requirements)
    }

    /// Units of filler a single placement needs in total
    pub fn total_required(&self) -> usize {
        self.requirements.iter().map(|r| r.amount).sum()
    }
}
