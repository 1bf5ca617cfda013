//! Domain entities listed by the clinic admin back-office.

pub mod service_category;
pub mod specialization;
pub mod types;
