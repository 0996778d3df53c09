use axum::Json;
use serde::Serialize;

use opal_core::models::context::{BillingVariant, FacilityClass, MedicationType};
use opal_core::models::rate::RateEntry;
use opal_rates::tables;

#[derive(Serialize)]
pub struct BundleRateRow {
    facility_class: FacilityClass,
    medication_type: MedicationType,
    variant: BillingVariant,
    entry: RateEntry,
}

pub async fn list_bundle_rates() -> Json<Vec<BundleRateRow>> {
    let rows = tables::bundle_rates()
        .iter()
        .map(|(&(facility_class, medication_type, variant), entry)| BundleRateRow {
            facility_class,
            medication_type,
            variant,
            entry: entry.clone(),
        })
        .collect();
    Json(rows)
}

#[derive(Serialize)]
pub struct ApgRateRow {
    service: String,
    label: String,
    entry: RateEntry,
}

pub async fn list_apg_rates() -> Json<Vec<ApgRateRow>> {
    let rows = tables::apg_rates()
        .iter()
        .map(|(service, entry)| ApgRateRow {
            service: service.id().to_string(),
            label: service.label().to_string(),
            entry: entry.clone(),
        })
        .collect();
    Json(rows)
}
