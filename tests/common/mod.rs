#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use clinic_admin::domain::service_category::ServiceCategory;
use clinic_admin::domain::specialization::Specialization;
use clinic_admin::repository::{JsonRepository, Snapshot};
use tempfile::TempDir;

pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid timestamp")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Cardiology, Derma and a soft-deleted ENT.
pub fn clinic_specializations() -> Vec<Specialization> {
    vec![
        Specialization::try_new(1, "Cardiology", None, 2, true, false, at(2024, 1, 1))
            .expect("valid specialization"),
        Specialization::try_new(
            2,
            "Derma",
            Some("Skin and hair".to_string()),
            1,
            false,
            false,
            at(2024, 6, 1),
        )
        .expect("valid specialization"),
        Specialization::try_new(3, "ENT", None, 3, true, true, at(2024, 1, 1))
            .expect("valid specialization"),
    ]
}

pub fn clinic_service_categories() -> Vec<ServiceCategory> {
    vec![
        ServiceCategory::try_new(1, "Laboratory", None, 1, true, false, at(2024, 2, 1))
            .expect("valid category"),
        ServiceCategory::try_new(2, "Imaging", None, 2, false, false, at(2024, 2, 2))
            .expect("valid category"),
    ]
}

pub fn clinic_snapshot() -> Snapshot {
    Snapshot {
        specializations: clinic_specializations(),
        service_categories: clinic_service_categories(),
    }
}

/// Snapshot file living in a temporary directory removed on drop.
pub struct TestSnapshot {
    _dir: TempDir,
    path: PathBuf,
}

impl TestSnapshot {
    pub fn new(name: &str, snapshot: &Snapshot) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(name);
        JsonRepository::write_snapshot(&path, snapshot).expect("snapshot written");
        Self { _dir: dir, path }
    }

    pub fn from_raw(name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("raw snapshot written");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
