//! Core record types for rolo.
//!
//! This module defines the two shapes a contact takes — [`RawContact`] as it
//! sits in the JSON resource and [`Contact`] after normalisation — plus the
//! [`Field`] enum naming the six searchable attributes.

use serde::{Deserialize, Serialize};

/// A contact record as it appears in the JSON dataset resource.
///
/// `job_history` is a list of job titles; every other field is a plain
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawContact {
    pub name: String,
    pub email: String,
    pub company: String,
    pub city: String,
    pub country: String,
    pub job_history: Vec<String>,
}

/// A normalised contact record, ready for filtering and serialization.
///
/// All six fields are strings. `job_history` is the comma-joined rendering of
/// the raw list (`"Teacher, Clerk"`), which is also what clients receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub company: String,
    pub city: String,
    pub country: String,
    pub job_history: String,
}

impl From<RawContact> for Contact {
    fn from(raw: RawContact) -> Self {
        Self {
            name: raw.name,
            email: raw.email,
            company: raw.company,
            city: raw.city,
            country: raw.country,
            job_history: raw.job_history.join(", "),
        }
    }
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// One of the six searchable contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    JobHistory,
    Company,
    Email,
    City,
    Country,
    Name,
}

/// Wire-name lookup table for [`Field`].
static FIELD_NAMES: phf::Map<&'static str, Field> = phf::phf_map! {
    "job_history" => Field::JobHistory,
    "company" => Field::Company,
    "email" => Field::Email,
    "city" => Field::City,
    "country" => Field::Country,
    "name" => Field::Name,
};

impl Field {
    /// Every field, in the order an unscoped query scans them.
    pub const ALL: [Field; 6] = [
        Field::JobHistory,
        Field::Company,
        Field::Email,
        Field::City,
        Field::Country,
        Field::Name,
    ];

    /// Read this field's value out of a contact.
    pub fn get<'c>(&self, contact: &'c Contact) -> &'c str {
        match self {
            Field::JobHistory => &contact.job_history,
            Field::Company => &contact.company,
            Field::Email => &contact.email,
            Field::City => &contact.city,
            Field::Country => &contact.country,
            Field::Name => &contact.name,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::JobHistory => write!(f, "job_history"),
            Field::Company => write!(f, "company"),
            Field::Email => write!(f, "email"),
            Field::City => write!(f, "city"),
            Field::Country => write!(f, "country"),
            Field::Name => write!(f, "name"),
        }
    }
}

/// Error returned when a request names a field that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field {name:?}; expected one of job_history, company, email, city, country, name")]
pub struct UnknownFieldError {
    pub name: String,
}

impl std::str::FromStr for Field {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FIELD_NAMES.get(s).copied().ok_or_else(|| UnknownFieldError {
            name: s.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
