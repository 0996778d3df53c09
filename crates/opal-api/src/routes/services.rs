use axum::Json;
use serde::Serialize;

use opal_rates::vocab::{ApgService, QualifyingService};

#[derive(Serialize)]
pub struct ServiceSummary {
    id: String,
    label: String,
    /// Whether the service is covered by bundle billing.
    qualifying: bool,
}

/// The two service vocabularies, so the calculator UI renders its
/// checklists from the same source of truth it bills from.
pub async fn list_services() -> Json<Vec<ServiceSummary>> {
    let mut services: Vec<ServiceSummary> = QualifyingService::ALL
        .into_iter()
        .map(|s| ServiceSummary {
            id: s.id().to_string(),
            label: s.label().to_string(),
            qualifying: true,
        })
        .collect();

    services.extend(ApgService::ALL.into_iter().map(|s| ServiceSummary {
        id: s.id().to_string(),
        label: s.label().to_string(),
        qualifying: false,
    }));

    Json(services)
}
