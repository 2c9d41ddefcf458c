// easing/registry.rs
//
// Fixed, ordered catalog of easings with cyclic navigation.
// The registry never changes after construction; "which easing is selected"
// lives in an `EaserCursor` owned by whoever navigates.

use log::{debug, warn};

use super::Easing;
use crate::error::TweenError;

/// An ordered set of easings with stable indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EaserRegistry {
    easings: Vec<Easing>,
}

impl Default for EaserRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl EaserRegistry {
    /// The full catalog, in [`Easing::ALL`] order.
    pub fn standard() -> Self {
        Self {
            easings: Easing::ALL.to_vec(),
        }
    }

    /// Build a registry with a custom order. Must be non-empty with no repeats.
    pub fn new(easings: Vec<Easing>) -> Result<Self, TweenError> {
        if easings.is_empty() {
            return Err(TweenError::EmptyRegistry);
        }
        for (i, easing) in easings.iter().enumerate() {
            if easings[..i].contains(easing) {
                return Err(TweenError::DuplicateEasing(easing.name().to_string()));
            }
        }
        debug!("easer registry: {} easings, first {}", easings.len(), easings[0]);
        Ok(Self { easings })
    }

    /// All entries in navigation order.
    pub fn all(&self) -> &[Easing] {
        &self.easings
    }

    pub fn len(&self) -> usize {
        self.easings.len()
    }

    /// Always false: construction rejects empty registries.
    pub fn is_empty(&self) -> bool {
        self.easings.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Easing> {
        self.easings.get(index).copied()
    }

    pub fn first(&self) -> Easing {
        self.easings[0]
    }

    pub fn index_of(&self, easing: Easing) -> Option<usize> {
        self.easings.iter().position(|e| *e == easing)
    }

    pub fn contains(&self, easing: Easing) -> bool {
        self.index_of(easing).is_some()
    }

    /// Index after `index`, wrapping from the last entry to the first.
    pub fn next_index(&self, index: usize) -> Result<usize, TweenError> {
        self.check_index(index)?;
        Ok((index + 1) % self.easings.len())
    }

    /// Index before `index`, wrapping from the first entry to the last.
    pub fn previous_index(&self, index: usize) -> Result<usize, TweenError> {
        self.check_index(index)?;
        Ok(index.checked_sub(1).unwrap_or(self.easings.len() - 1))
    }

    /// The easing after `current`. Fails if `current` is not registered.
    pub fn next(&self, current: Easing) -> Result<Easing, TweenError> {
        let index = self.position(current)?;
        Ok(self.easings[(index + 1) % self.easings.len()])
    }

    /// The easing before `current`. Fails if `current` is not registered.
    pub fn previous(&self, current: Easing) -> Result<Easing, TweenError> {
        let index = self.position(current)?;
        let index = index.checked_sub(1).unwrap_or(self.easings.len() - 1);
        Ok(self.easings[index])
    }

    /// A cursor selecting the first entry.
    pub fn cursor(&self) -> EaserCursor {
        EaserCursor::default()
    }

    fn position(&self, easing: Easing) -> Result<usize, TweenError> {
        self.index_of(easing).ok_or_else(|| {
            warn!("easing {easing} is not registered");
            TweenError::NotRegistered(easing.name().to_string())
        })
    }

    fn check_index(&self, index: usize) -> Result<(), TweenError> {
        if index < self.easings.len() {
            Ok(())
        } else {
            warn!("easer index {index} out of range (len {})", self.easings.len());
            Err(TweenError::NotRegistered(format!("#{index}")))
        }
    }
}

/// One independent selection within an [`EaserRegistry`].
///
/// Several cursors can share one registry, e.g. one per animated property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EaserCursor {
    index: usize,
}

impl EaserCursor {
    /// Cursor positioned on `easing`.
    pub fn at(registry: &EaserRegistry, easing: Easing) -> Result<Self, TweenError> {
        Ok(Self {
            index: registry.position(easing)?,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The selected easing. Fails if the cursor came from a shorter registry.
    pub fn current(&self, registry: &EaserRegistry) -> Result<Easing, TweenError> {
        registry.check_index(self.index)?;
        Ok(registry.easings[self.index])
    }

    /// Move to the next easing and return it.
    pub fn select_next(&mut self, registry: &EaserRegistry) -> Result<Easing, TweenError> {
        self.index = registry.next_index(self.index)?;
        self.current(registry)
    }

    /// Move to the previous easing and return it.
    pub fn select_previous(&mut self, registry: &EaserRegistry) -> Result<Easing, TweenError> {
        self.index = registry.previous_index(self.index)?;
        self.current(registry)
    }

    /// Jump straight to `easing`.
    pub fn select(&mut self, registry: &EaserRegistry, easing: Easing) -> Result<(), TweenError> {
        self.index = registry.position(easing)?;
        Ok(())
    }
}
