//! Snapshot repository backed by a JSON document.
//!
//! The snapshot is loaded once and shared read-only between request handlers,
//! so cloning a [`JsonRepository`] is cheap and needs no locking.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        service_category::ServiceCategory,
        specialization::Specialization,
        types::{ServiceCategoryId, SpecializationId},
    },
    repository::{
        ServiceCategoryReader, SpecializationReader,
        errors::{RepositoryError, RepositoryResult},
    },
};

/// Serialized form of all records served by the admin listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub specializations: Vec<Specialization>,
    #[serde(default)]
    pub service_categories: Vec<ServiceCategory>,
}

impl Snapshot {
    /// Rejects snapshots where an identifier appears twice within a collection.
    pub fn validate(&self) -> RepositoryResult<()> {
        ensure_unique_ids(
            "specializations",
            self.specializations.iter().map(|s| s.id.get()),
        )?;
        ensure_unique_ids(
            "service_categories",
            self.service_categories.iter().map(|c| c.id.get()),
        )
    }
}

fn ensure_unique_ids(collection: &str, ids: impl Iterator<Item = i32>) -> RepositoryResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "duplicate id {id} in {collection}"
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct JsonRepository {
    snapshot: Arc<Snapshot>,
}

impl JsonRepository {
    /// Loads and validates the snapshot stored at `path`.
    pub fn open(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            RepositoryError::StorageError(format!(
                "Cannot open snapshot {}: {err}",
                path.display()
            ))
        })?;
        let reader = BufReader::new(file);
        let snapshot: Snapshot = serde_json::from_reader(reader)?;

        log::info!(
            "Loaded snapshot from {}: {} specializations, {} service categories",
            path.display(),
            snapshot.specializations.len(),
            snapshot.service_categories.len()
        );

        Self::from_snapshot(snapshot)
    }

    pub fn from_snapshot(snapshot: Snapshot) -> RepositoryResult<Self> {
        snapshot.validate()?;
        Ok(Self {
            snapshot: Arc::new(snapshot),
        })
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Writes `snapshot` to `path` as pretty-printed JSON.
    pub fn write_snapshot(path: impl AsRef<Path>, snapshot: &Snapshot) -> RepositoryResult<()> {
        snapshot.validate()?;

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, snapshot)?;
        writer.flush()?;
        Ok(())
    }
}

impl SpecializationReader for JsonRepository {
    fn list_specializations(&self) -> RepositoryResult<Vec<Specialization>> {
        Ok(self.snapshot.specializations.clone())
    }

    fn get_specialization_by_id(
        &self,
        id: SpecializationId,
    ) -> RepositoryResult<Option<Specialization>> {
        Ok(self
            .snapshot
            .specializations
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }
}

impl ServiceCategoryReader for JsonRepository {
    fn list_service_categories(&self) -> RepositoryResult<Vec<ServiceCategory>> {
        Ok(self.snapshot.service_categories.clone())
    }

    fn get_service_category_by_id(
        &self,
        id: ServiceCategoryId,
    ) -> RepositoryResult<Option<ServiceCategory>> {
        Ok(self
            .snapshot
            .service_categories
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }
}
