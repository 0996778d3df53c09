//! The reimbursement classifier.
//!
//! Maps a service selection plus billing context to a recommendation:
//! weekly/take-home bundle, itemized APG lines, or both, with the
//! payer-specific overrides for guest dosing, dual eligibility, FQHC, and
//! CCBHC settings.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use opal_core::error::BillingError;
use opal_core::models::context::{BillingContext, BillingVariant, FacilityType, PatientType};
use opal_core::models::rate::RateEntry;
use opal_core::models::recommendation::BillingRecommendation;

use crate::tables;
use crate::vocab::{ApgService, QualifyingService};

/// Days of take-home medication beyond which payers flag the claim.
const TAKEHOME_DAY_MAX: u32 = 27;

/// Classify a service selection against a billing context.
///
/// Pure and deterministic: the same inputs always produce the same
/// recommendation, and `estimated_reimbursement` equals the sum of `rate`
/// over the returned `rate_codes`. Unrecognized service identifiers are
/// dropped, not rejected. Fails only when a required context selection is
/// absent.
pub fn classify(
    services: &[String],
    context: &BillingContext,
) -> Result<BillingRecommendation, BillingError> {
    let medication = context
        .medication_type
        .ok_or(BillingError::MissingParameter("medication_type"))?;
    let patient = context
        .patient_type
        .ok_or(BillingError::MissingParameter("patient_type"))?;
    let facility = context
        .facility_type
        .ok_or(BillingError::MissingParameter("facility_type"))?;

    // Partition the (deduplicated) selection against the two vocabularies.
    let mut qualifying = BTreeSet::new();
    let mut non_qualifying = BTreeSet::new();
    for id in services {
        if let Some(service) = QualifyingService::from_id(id) {
            qualifying.insert(service);
        } else if let Some(service) = ApgService::from_id(id) {
            non_qualifying.insert(service);
        }
    }

    let has_medication_admin = qualifying.contains(&QualifyingService::MedicationAdmin);
    // Qualifying services without an in-clinic administration event mark a
    // take-home visit. Table-lookup semantics, not a clinical judgment.
    let is_takehome = !has_medication_admin && !qualifying.is_empty();
    let class = facility.rate_class();
    let guest_dosing = patient == PatientType::GuestDosing;

    let mut billing_method: String;
    let mut rate_codes: Vec<RateEntry> = Vec::new();
    let mut notes: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let mut bundle_total = Decimal::ZERO;

    if guest_dosing {
        billing_method = "APG Only (Guest Dosing)".to_string();
        warnings.push(
            "guest dosing cannot use bundle billing; qualifying services are not payable here"
                .to_string(),
        );
    } else if !qualifying.is_empty() {
        let takehome_unit = if is_takehome && context.takehome_days > 0 {
            let unit = tables::bundle_rate(class, medication, BillingVariant::Takehome);
            if unit.is_none() {
                warnings.push(format!(
                    "{} has no take-home rate; falling back to the weekly bundle",
                    medication.label()
                ));
            }
            unit
        } else {
            None
        };

        let (method, selected) = match takehome_unit {
            Some(unit) => {
                let days = context.takehome_days;
                notes.push(format!("take-home bottles for {days} day(s)"));
                if days > TAKEHOME_DAY_MAX {
                    warnings.push(format!(
                        "{days} take-home days exceeds the typical monthly take-home maximum of {TAKEHOME_DAY_MAX}"
                    ));
                }
                let mut scaled = unit.clone();
                scaled.rate *= Decimal::from(days);
                scaled.description = format!("{}, {days} day(s)", unit.description);
                ("Take-Home Bundle", Some(scaled))
            }
            None => (
                "Weekly Bundle",
                tables::bundle_rate(class, medication, BillingVariant::Weekly).cloned(),
            ),
        };
        billing_method = method.to_string();

        match selected {
            Some(bundle) => {
                bundle_total = bundle.rate;
                rate_codes.push(bundle);
            }
            None => warnings.push(format!(
                "no bundle rate on file for {} at this facility class",
                medication.label()
            )),
        }
    } else if !non_qualifying.is_empty() {
        billing_method = "APG Only".to_string();
    } else {
        billing_method = "No Billable Services".to_string();
        warnings.push("no recognized billable services selected".to_string());
    }

    let mut apg_total = Decimal::ZERO;
    for service in &non_qualifying {
        if let Some(entry) = tables::apg_rate(*service) {
            apg_total += entry.rate;
            rate_codes.push(entry.clone());
        }
    }
    if !guest_dosing && !qualifying.is_empty() && !non_qualifying.is_empty() {
        billing_method.push_str(" + APG for Non-Qualifying Services");
        notes.push("submit separate APG claim for non-qualifying services on same day".to_string());
    }

    // Context overlays, applied on every branch.
    match patient {
        PatientType::DualEligible => {
            notes.push("bill Medicare first as the primary payer".to_string());
            notes.push(
                "submit a Medicaid crossover claim for the balance after Medicare adjudication"
                    .to_string(),
            );
            notes.push(
                "confirm the crossover posted before resubmitting to avoid a duplicate claim"
                    .to_string(),
            );
        }
        PatientType::NursingHome => {
            notes.push(
                "coordinate with the nursing facility's consolidated billing office".to_string(),
            );
            notes.push("append the nursing facility modifier to each claim line".to_string());
        }
        _ => {}
    }
    match facility {
        FacilityType::Fqhc => {
            warnings.push(
                "rate code 1671 (FQHC PPS encounter) and the OTP bundle cannot both be billed in the same week"
                    .to_string(),
            );
            notes.push(
                "choose either the PPS encounter rate or the OTP bundle for this week".to_string(),
            );
        }
        FacilityType::Ccbhc => {
            warnings.push(
                "medication administration is carved out of the CCBHC daily rate".to_string(),
            );
            notes.push(
                "bill medication administration separately from the CCBHC PPS rate".to_string(),
            );
        }
        _ => {}
    }

    let procedure_codes: BTreeSet<String> =
        rate_codes.iter().map(|entry| entry.hcpcs.clone()).collect();

    Ok(BillingRecommendation {
        billing_method,
        rate_codes,
        procedure_codes,
        estimated_reimbursement: bundle_total + apg_total,
        notes,
        warnings,
    })
}
