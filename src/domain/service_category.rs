use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ServiceCategoryId, ServiceCategoryName, TypeConstraintError, normalize_description,
};
use crate::query::ListRecord;

/// Group of billable clinic services, e.g. laboratory tests.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceCategory {
    pub id: ServiceCategoryId,
    pub name: ServiceCategoryName,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    pub is_active: bool,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: NaiveDateTime,
}

impl ServiceCategory {
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
            id: ServiceCategoryId::new(id)?,
            name: ServiceCategoryName::new(name)?,
            description: normalize_description(description),
            display_order,
            is_active,
            is_deleted,
            created_at,
        })
    }
}

impl ListRecord for ServiceCategory {
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
