//! Building cleaned records from raw fields.

use hospital_model::{HospitalRecord, RawHospitalFields};

use crate::normalization::{clean_contact, clean_email, clean_text};

/// Cleans every field of one raw row into a new record.
pub fn clean_record(raw: &RawHospitalFields) -> HospitalRecord {
    HospitalRecord {
        hospital_name: clean_text(&raw.hospital_name),
        city: clean_text(&raw.city),
        district: clean_text(&raw.district),
        state: clean_text(&raw.state),
        contact: clean_contact(&raw.contact),
        email: clean_email(&raw.email),
        specialties: clean_text(&raw.specialties),
    }
}

/// Cleans rows in order.
pub fn clean_records(rows: &[RawHospitalFields]) -> Vec<HospitalRecord> {
    rows.iter().map(clean_record).collect()
}
