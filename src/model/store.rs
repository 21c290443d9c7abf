//! The ordered list of projects supplied once at startup.

use serde_json::Value;

use super::ProjectRecord;
use crate::error::SiteError;
use crate::filter::Filter;

/// Read-only, ordered collection of project records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectStore {
    records: Vec<ProjectRecord>,
}

impl ProjectStore {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        Self { records }
    }

    /// Build a store from an already parsed JSON value.
    ///
    /// `null` is an empty store. Fields of a record read leniently; only
    /// entries that are not objects at all are skipped, with a warning.
    pub fn from_value(value: Value) -> Result<Self, SiteError> {
        let items = match value {
            Value::Null => return Ok(Self::default()),
            Value::Array(items) => items,
            other => return Err(SiteError::invalid_store(&other)),
        };

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            if !item.is_object() {
                log::warn!("⚠️  Skipping project #{}: not an object", index);
                continue;
            }
            match serde_json::from_value::<ProjectRecord>(item) {
                Ok(record) => records.push(record),
                Err(e) => log::warn!("⚠️  Skipping project #{}: {}", index, e),
            }
        }
        log::debug!("📁 Loaded {} projects", records.len());
        Ok(Self { records })
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter()
    }

    /// Indices of all records, in store order.
    pub fn all(&self) -> Vec<usize> {
        (0..self.records.len()).collect()
    }

    /// Indices of the records matching `filter`, in store order.
    pub fn filter(&self, filter: &Filter) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| filter.matches(record))
            .map(|(index, _)| index)
            .collect()
    }
}
