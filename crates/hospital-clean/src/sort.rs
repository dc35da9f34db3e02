//! Output ordering.

use hospital_model::HospitalRecord;

/// Stable sort by state, then district, then city.
///
/// Values compare as plain strings, so `"Not Available"` sorts wherever it
/// falls alphabetically. Equal keys keep their input order.
pub fn sort_records(records: &mut [HospitalRecord]) {
    records.sort_by(|a, b| {
        (&a.state, &a.district, &a.city).cmp(&(&b.state, &b.district, &b.city))
    });
}
