// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::fmt::Debug;

use anyhow::{Result, bail};
use serde::Serialize;

use crate::keys::{ProjectKey, ServiceKey};
use crate::model::{CategoryFilter, Project, Service, ServiceCategory};

/// Anything a catalog can hold: stable key, optional filter tag.
pub trait CatalogEntry {
    type Key: Copy + Eq + Debug;

    fn key(&self) -> Self::Key;

    /// Category consulted by chip filtering. Entries without one are
    /// visible under every filter.
    fn filter_tag(&self) -> Option<ServiceCategory> {
        None
    }
}

impl CatalogEntry for Service {
    type Key = ServiceKey;

    fn key(&self) -> ServiceKey {
        self.key
    }

    fn filter_tag(&self) -> Option<ServiceCategory> {
        Some(self.category)
    }
}

impl CatalogEntry for Project {
    type Key = ProjectKey;

    fn key(&self) -> ProjectKey {
        self.key
    }
}

/// Immutable, ordered entry store. Authoring order is display order and
/// never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog<T> {
    entries: Vec<T>,
}

impl<T: CatalogEntry> Catalog<T> {
    pub fn new(entries: Vec<T>) -> Result<Self> {
        for (index, entry) in entries.iter().enumerate() {
            if entries[..index].iter().any(|prior| prior.key() == entry.key()) {
                bail!(
                    "duplicate catalog key {:?} -- give each entry its own slug and retry",
                    entry.key()
                );
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: T::Key) -> Option<&T> {
        self.entries.iter().find(|entry| entry.key() == key)
    }

    pub fn position(&self, key: T::Key) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key() == key)
    }

    /// Entries admitted by `filter`, preserving catalog order. An empty
    /// result is a valid outcome, not an error.
    pub fn by_category(&self, filter: CategoryFilter) -> Vec<&T> {
        self.entries
            .iter()
            .filter(|entry| filter.admits(entry.filter_tag()))
            .collect()
    }
}
