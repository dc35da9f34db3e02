//! Hospital directory records.

use serde::{Deserialize, Serialize};

/// Placeholder for any missing or invalid field.
///
/// Cleaned records never carry empty strings; this value is written instead
/// and downstream consumers treat it as ordinary text.
pub const NOT_AVAILABLE: &str = "Not Available";

/// Column headers of the cleaned workbook, in field order.
pub const HEADERS: [&str; 7] = [
    "Hospital Name",
    "City",
    "District",
    "State",
    "Contact",
    "Email",
    "Specialties",
];

/// Name of the worksheet holding the cleaned directory.
pub const SHEET_NAME: &str = "Hospitals";

/// Raw field values pulled out of one input row by a [`crate::RowLayout`].
///
/// Values are untrimmed and uncleaned. Layouts without a city column fill
/// `city` with [`NOT_AVAILABLE`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawHospitalFields {
    pub hospital_name: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub contact: String,
    pub email: String,
    pub specialties: String,
}

/// A cleaned hospital directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalRecord {
    pub hospital_name: String,
    pub city: String,
    pub district: String,
    pub state: String,
    /// Decimal digits only, or [`NOT_AVAILABLE`].
    pub contact: String,
    /// Lowercased address, or [`NOT_AVAILABLE`].
    pub email: String,
    pub specialties: String,
}

impl HospitalRecord {
    /// Field values in [`HEADERS`] order.
    pub fn values(&self) -> [&str; 7] {
        [
            &self.hospital_name,
            &self.city,
            &self.district,
            &self.state,
            &self.contact,
            &self.email,
            &self.specialties,
        ]
    }

    /// True when every field holds a non-empty value.
    pub fn is_complete(&self) -> bool {
        self.values().iter().all(|value| !value.is_empty())
    }

    /// Key used to collapse duplicate entries: lowercased name plus contact.
    pub fn dedup_key(&self) -> (String, String) {
        (self.hospital_name.to_lowercase(), self.contact.clone())
    }
}
