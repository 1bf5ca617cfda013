//! Writes a starter snapshot with the default specializations and service
//! categories to the configured `snapshot_path`.
//!
//! Refuses to overwrite an existing snapshot unless `--force` is passed.

use std::env;
use std::fs;
use std::path::Path;

use chrono::{NaiveDateTime, Utc};
use dotenvy::dotenv;

use clinic_admin::domain::{service_category::ServiceCategory, specialization::Specialization};
use clinic_admin::models::config::ServerConfig;
use clinic_admin::repository::errors::{RepositoryError, RepositoryResult};
use clinic_admin::repository::{JsonRepository, Snapshot};

const SPECIALIZATIONS: &[(&str, &str)] = &[
    ("قلب و عروق", "Cardiology"),
    ("داخلی", "Internal medicine"),
    ("اطفال", "Pediatrics"),
    ("زنان و زایمان", "Obstetrics and gynecology"),
    ("پوست و مو", "Dermatology"),
    ("گوش و حلق و بینی", "Otorhinolaryngology"),
    ("چشم پزشکی", "Ophthalmology"),
    ("ارتوپدی", "Orthopedics"),
    ("مغز و اعصاب", "Neurology"),
];

const SERVICE_CATEGORIES: &[(&str, &str)] = &[
    ("آزمایشگاه", "Laboratory tests"),
    ("تصویربرداری", "Radiology and imaging"),
    ("دندانپزشکی", "Dental services"),
    ("فیزیوتراپی", "Physiotherapy sessions"),
    ("واکسیناسیون", "Vaccination"),
];

/// Builds the starter records; display order follows the list order.
fn default_snapshot(created_at: NaiveDateTime) -> RepositoryResult<Snapshot> {
    let specializations = SPECIALIZATIONS
        .iter()
        .zip(1..)
        .map(|(&(name, description), id)| {
            Specialization::try_new(
                id,
                name,
                Some(description.to_string()),
                id,
                true,
                false,
                created_at,
            )
            .map_err(RepositoryError::from)
        })
        .collect::<RepositoryResult<Vec<_>>>()?;

    let service_categories = SERVICE_CATEGORIES
        .iter()
        .zip(1..)
        .map(|(&(name, description), id)| {
            ServiceCategory::try_new(
                id,
                name,
                Some(description.to_string()),
                id,
                true,
                false,
                created_at,
            )
            .map_err(RepositoryError::from)
        })
        .collect::<RepositoryResult<Vec<_>>>()?;

    Ok(Snapshot {
        specializations,
        service_categories,
    })
}

fn write_default_snapshot(path: &Path, force: bool) -> RepositoryResult<()> {
    if path.exists() && !force {
        return Err(RepositoryError::ConstraintViolation(format!(
            "{} already exists, pass --force to overwrite",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let snapshot = default_snapshot(Utc::now().naive_utc())?;
    JsonRepository::write_snapshot(path, &snapshot)?;

    log::info!(
        "Wrote {} specializations and {} service categories to {}",
        snapshot.specializations.len(),
        snapshot.service_categories.len(),
        path.display()
    );
    Ok(())
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let server_config = match ServerConfig::load(&app_env) {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let force = env::args().skip(1).any(|arg| arg == "--force");

    if let Err(err) = write_default_snapshot(Path::new(&server_config.snapshot_path), force) {
        log::error!("Failed to seed snapshot: {err}");
        std::process::exit(1);
    }
}
