use std::sync::Arc;

use crate::catalog::{Catalog, ItemDefinition, PatternDescriptor};
use crate::io::error::{Result, SolverError, invalid_pattern};

/// One resolved filler requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Catalog entry for the filler
    pub item: Arc<ItemDefinition>,
    /// Units needed around each placement
    pub count: usize,
}

/// Filler multiset a single placement needs, resolved against the catalog
///
/// Entries are unique by item: repeated identifiers in the descriptor are
/// merged into the first occurrence. Internally items are referred to by
/// their entry position, so comparing two units is an integer comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementSpec {
    entries: Vec<Requirement>,
}

impl RequirementSpec {
    /// Build a spec from already-resolved requirements, merging duplicates
    pub fn new(requirements: Vec<Requirement>) -> Self {
        let mut entries: Vec<Requirement> = Vec::with_capacity(requirements.len());
        for requirement in requirements {
            match entries
                .iter_mut()
                .find(|entry| entry.item.id == requirement.item.id)
            {
                Some(entry) => entry.count += requirement.count,
                None => entries.push(requirement),
            }
        }
        entries.retain(|entry| entry.count > 0);
        Self { entries }
    }

    /// Resolve a pattern's requirement list through the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if a requirement has a zero amount or names an item
    /// the catalog does not define
    pub fn resolve(pattern: &PatternDescriptor, catalog: &Catalog) -> Result<Self> {
        let mut requirements = Vec::with_capacity(pattern.requirements.len());
        for requirement in &pattern.requirements {
            if requirement.amount == 0 {
                return Err(invalid_pattern(
                    &pattern.id,
                    &format!("requirement '{}' has a zero amount", requirement.id),
                ));
            }
            let item = catalog
                .item(&requirement.id)
                .ok_or_else(|| SolverError::UnknownItem {
                    pattern: pattern.id.clone(),
                    item: requirement.id.clone(),
                })?;
            requirements.push(Requirement {
                item: Arc::clone(item),
                count: requirement.amount,
            });
        }
        Ok(Self::new(requirements))
    }

    /// Resolved entries in descriptor order
    pub fn entries(&self) -> &[Requirement] {
        &self.entries
    }

    /// Catalog entry for an entry position
    pub fn item(&self, entry: usize) -> Option<&Arc<ItemDefinition>> {
        self.entries.get(entry).map(|requirement| &requirement.item)
    }

    /// Entry position of an item, compared by identifier
    pub fn position_of(&self, item: &ItemDefinition) -> Option<usize> {
        self.entries
            .iter()
            .position(|requirement| requirement.item.id == item.id)
    }

    /// Total units of filler per placement
    pub fn total(&self) -> usize {
        self.entries.iter().map(|requirement| requirement.count).sum()
    }

    /// True if placements need no filler at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The multiset expanded to one entry position per unit, in order
    pub fn units(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .flat_map(|(position, requirement)| std::iter::repeat_n(position, requirement.count))
            .collect()
    }
}
