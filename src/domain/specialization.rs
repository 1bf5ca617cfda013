use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    SpecializationId, SpecializationName, TypeConstraintError, normalize_description,
};
use crate::query::ListRecord;

/// Medical specialization offered by the clinics, e.g. cardiology.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Specialization {
    pub id: SpecializationId,
    pub name: SpecializationName,
    #[serde(default)]
    pub description: Option<String>,
    /// Position in admin lists and public menus; lower comes first.
    #[serde(default)]
    pub display_order: i32,
    pub is_active: bool,
    /// Soft-delete marker; deleted rows stay in storage.
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: NaiveDateTime,
}

impl Specialization {
    /// Validates raw values and builds a specialization.
    pub fn try_new(
        id: i32,
        name: impl Into<String>,
        description: Option<String>,
        display_order: i32,
        is_active: bool,
        is_deleted: bool,
        created_at: NaiveDateTime,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: SpecializationId::new(id)?,
            name: SpecializationName::new(name)?,
            description: normalize_description(description),
            display_order,
            is_active,
            is_deleted,
            created_at,
        })
    }
}

impl ListRecord for Specialization {
    fn id(&self) -> i32 {
        self.id.get()
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn display_order(&self) -> i32 {
        self.display_order
    }

    fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}
