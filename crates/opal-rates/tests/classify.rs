use opal_core::models::context::{BillingContext, FacilityType, MedicationType, PatientType};
use opal_rates::classify;
use rust_decimal_macros::dec;

fn ctx(
    medication: MedicationType,
    patient: PatientType,
    facility: FacilityType,
    takehome_days: u32,
) -> BillingContext {
    BillingContext {
        medication_type: Some(medication),
        patient_type: Some(patient),
        facility_type: Some(facility),
        takehome_days,
    }
}

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn methadone_weekly_bundle_freestanding() {
    let rec = classify(
        &ids(&["medication-admin", "individual-counseling"]),
        &ctx(
            MedicationType::Methadone,
            PatientType::MedicaidOnly,
            FacilityType::Freestanding,
            0,
        ),
    )
    .unwrap();

    assert_eq!(rec.billing_method, "Weekly Bundle");
    assert_eq!(rec.rate_codes.len(), 1);
    assert_eq!(rec.rate_codes[0].code, "7969");
    assert_eq!(rec.rate_codes[0].rate, dec!(258.77));
    assert_eq!(rec.rate_codes[0].hcpcs, "G2067");
    assert_eq!(rec.estimated_reimbursement, dec!(258.77));
    assert!(rec.procedure_codes.contains("G2067"));
    assert!(rec.warnings.is_empty());
}

#[test]
fn takehome_bundle_scales_by_days() {
    let rec = classify(
        &ids(&["individual-counseling"]),
        &ctx(
            MedicationType::Methadone,
            PatientType::MedicaidOnly,
            FacilityType::Freestanding,
            5,
        ),
    )
    .unwrap();

    assert_eq!(rec.billing_method, "Take-Home Bundle");
    assert_eq!(rec.estimated_reimbursement, dec!(462.10));
    assert_eq!(rec.rate_codes.len(), 1);
    assert_eq!(rec.rate_codes[0].code, "7970");
    assert_eq!(rec.rate_codes[0].rate, dec!(462.10));
    assert!(rec.notes.iter().any(|n| n.contains("take-home bottles for 5 day(s)")));
}

#[test]
fn naltrexone_takehome_falls_back_to_weekly() {
    let rec = classify(
        &ids(&["individual-counseling"]),
        &ctx(
            MedicationType::Naltrexone,
            PatientType::MedicaidOnly,
            FacilityType::Freestanding,
            3,
        ),
    )
    .unwrap();

    // No take-home rate exists for naltrexone: weekly entry, no day scaling.
    assert_eq!(rec.billing_method, "Weekly Bundle");
    assert_eq!(rec.estimated_reimbursement, dec!(189.45));
    assert_eq!(rec.rate_codes.len(), 1);
    assert_eq!(rec.rate_codes[0].code, "7973");
    assert!(rec.warnings.iter().any(|w| w.contains("no take-home rate")));
}

#[test]
fn guest_dosing_bills_apg_only() {
    let rec = classify(
        &ids(&["individual-counseling", "admission-assessment"]),
        &ctx(
            MedicationType::Methadone,
            PatientType::GuestDosing,
            FacilityType::Freestanding,
            0,
        ),
    )
    .unwrap();

    assert_eq!(rec.billing_method, "APG Only (Guest Dosing)");
    assert_eq!(rec.estimated_reimbursement, dec!(156.78));
    assert_eq!(rec.rate_codes.len(), 1);
    assert_eq!(rec.rate_codes[0].code, "1400");
    assert!(rec.warnings.iter().any(|w| w.contains("guest dosing cannot use bundle billing")));
}

#[test]
fn guest_dosing_rate_codes_come_only_from_apg_table() {
    let rec = classify(
        &ids(&[
            "medication-admin",
            "group-counseling",
            "psychiatric-evaluation",
            "crisis-intervention",
        ]),
        &ctx(
            MedicationType::Buprenorphine,
            PatientType::GuestDosing,
            FacilityType::HospitalBased,
            0,
        ),
    )
    .unwrap();

    let apg_entries: Vec<_> = opal_rates::tables::apg_rates().values().collect();
    assert_eq!(rec.rate_codes.len(), 2);
    for entry in &rec.rate_codes {
        assert!(apg_entries.contains(&entry), "{} is not an APG entry", entry.code);
    }
}

#[test]
fn fqhc_warns_about_pps_bundle_exclusivity() {
    let rec = classify(
        &ids(&["medication-admin"]),
        &ctx(
            MedicationType::Methadone,
            PatientType::MedicaidOnly,
            FacilityType::Fqhc,
            0,
        ),
    )
    .unwrap();

    assert!(rec.warnings.iter().any(|w| w.contains("1671")));
    // FQHC bills against the freestanding rate partition.
    assert_eq!(rec.rate_codes[0].code, "7969");
}

#[test]
fn ccbhc_warns_about_medication_carve_out() {
    let rec = classify(
        &ids(&["medication-admin"]),
        &ctx(
            MedicationType::Methadone,
            PatientType::MedicaidOnly,
            FacilityType::Ccbhc,
            0,
        ),
    )
    .unwrap();

    assert!(rec.warnings.iter().any(|w| w.contains("carved out")));
    assert_eq!(rec.rate_codes[0].code, "7969");
}

#[test]
fn takehome_days_over_27_warns_without_clamping() {
    let rec = classify(
        &ids(&["individual-counseling"]),
        &ctx(
            MedicationType::Methadone,
            PatientType::MedicaidOnly,
            FacilityType::Freestanding,
            30,
        ),
    )
    .unwrap();

    assert!(rec.warnings.iter().any(|w| w.contains("27")));
    // The warning does not clamp the total.
    assert_eq!(rec.estimated_reimbursement, dec!(2772.60));
}

#[test]
fn bundle_plus_apg_appends_method_and_note() {
    let rec = classify(
        &ids(&[
            "medication-admin",
            "group-counseling",
            "psychiatric-evaluation",
            "peer-services",
        ]),
        &ctx(
            MedicationType::Methadone,
            PatientType::MedicaidOnly,
            FacilityType::HospitalBased,
            0,
        ),
    )
    .unwrap();

    assert_eq!(
        rec.billing_method,
        "Weekly Bundle + APG for Non-Qualifying Services"
    );
    assert!(rec.notes.iter().any(|n| n.contains("separate APG claim")));
    assert_eq!(rec.estimated_reimbursement, dec!(562.14));
}

#[test]
fn estimated_reimbursement_equals_sum_of_rate_codes() {
    let cases: Vec<(Vec<String>, BillingContext)> = vec![
        (
            ids(&["medication-admin", "individual-counseling", "medical-visit"]),
            ctx(
                MedicationType::Buprenorphine,
                PatientType::MedicaidOnly,
                FacilityType::HospitalBased,
                0,
            ),
        ),
        (
            ids(&["group-counseling", "family-therapy", "smoking-cessation"]),
            ctx(
                MedicationType::Methadone,
                PatientType::DualEligible,
                FacilityType::Freestanding,
                14,
            ),
        ),
        (
            ids(&["admission-assessment", "periodic-assessment"]),
            ctx(
                MedicationType::Naltrexone,
                PatientType::NursingHome,
                FacilityType::Ccbhc,
                0,
            ),
        ),
    ];

    for (services, context) in &cases {
        let rec = classify(services, context).unwrap();
        let sum: rust_decimal::Decimal = rec.rate_codes.iter().map(|e| e.rate).sum();
        assert_eq!(rec.estimated_reimbursement, sum);
    }
}

#[test]
fn classification_is_idempotent() {
    let services = ids(&["group-counseling", "psychiatric-evaluation"]);
    let context = ctx(
        MedicationType::Buprenorphine,
        PatientType::DualEligible,
        FacilityType::Fqhc,
        7,
    );

    let first = classify(&services, &context).unwrap();
    let second = classify(&services, &context).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn apg_only_when_no_qualifying_services() {
    let rec = classify(
        &ids(&["admission-assessment", "medical-visit"]),
        &ctx(
            MedicationType::Methadone,
            PatientType::MedicaidOnly,
            FacilityType::Freestanding,
            0,
        ),
    )
    .unwrap();

    assert_eq!(rec.billing_method, "APG Only");
    assert_eq!(rec.estimated_reimbursement, dec!(267.36));
    assert!(!rec.notes.iter().any(|n| n.contains("separate APG claim")));
}

#[test]
fn duplicate_and_unrecognized_ids_are_collapsed() {
    let deduped = classify(
        &ids(&["medication-admin", "individual-counseling"]),
        &ctx(
            MedicationType::Methadone,
            PatientType::MedicaidOnly,
            FacilityType::Freestanding,
            0,
        ),
    )
    .unwrap();

    let noisy = classify(
        &ids(&[
            "medication-admin",
            "medication-admin",
            "individual-counseling",
            "aromatherapy",
        ]),
        &ctx(
            MedicationType::Methadone,
            PatientType::MedicaidOnly,
            FacilityType::Freestanding,
            0,
        ),
    )
    .unwrap();

    assert_eq!(deduped, noisy);
}

#[test]
fn procedure_codes_are_deduplicated() {
    let rec = classify(
        &ids(&[
            "medication-admin",
            "individual-counseling",
            "group-counseling",
            "peer-services",
            "family-therapy",
        ]),
        &ctx(
            MedicationType::Methadone,
            PatientType::MedicaidOnly,
            FacilityType::Freestanding,
            0,
        ),
    )
    .unwrap();

    let mut seen = std::collections::BTreeSet::new();
    for entry in &rec.rate_codes {
        seen.insert(entry.hcpcs.clone());
    }
    assert_eq!(rec.procedure_codes, seen);
}

#[test]
fn all_unrecognized_services_yield_no_billable_services() {
    let rec = classify(
        &ids(&["reiki", "aromatherapy"]),
        &ctx(
            MedicationType::Methadone,
            PatientType::MedicaidOnly,
            FacilityType::Freestanding,
            0,
        ),
    )
    .unwrap();

    assert_eq!(rec.billing_method, "No Billable Services");
    assert_eq!(rec.estimated_reimbursement, rust_decimal::Decimal::ZERO);
    assert!(rec.rate_codes.is_empty());
    assert!(rec.warnings.iter().any(|w| w.contains("no recognized billable services")));
}

#[test]
fn dual_eligible_notes_are_ordered() {
    let rec = classify(
        &ids(&["medication-admin"]),
        &ctx(
            MedicationType::Methadone,
            PatientType::DualEligible,
            FacilityType::Freestanding,
            0,
        ),
    )
    .unwrap();

    let medicare = rec.notes.iter().position(|n| n.contains("Medicare first"));
    let crossover = rec.notes.iter().position(|n| n.contains("crossover claim"));
    let confirm = rec.notes.iter().position(|n| n.contains("confirm the crossover"));
    assert!(medicare < crossover && crossover < confirm);
    assert!(medicare.is_some());
}

#[test]
fn nursing_home_notes_present() {
    let rec = classify(
        &ids(&["medication-admin"]),
        &ctx(
            MedicationType::Methadone,
            PatientType::NursingHome,
            FacilityType::Freestanding,
            0,
        ),
    )
    .unwrap();

    assert!(rec.notes.iter().any(|n| n.contains("consolidated billing")));
    assert!(rec.notes.iter().any(|n| n.contains("modifier")));
}

#[test]
fn missing_context_selections_fail_fast() {
    let services = ids(&["medication-admin"]);

    let mut context = ctx(
        MedicationType::Methadone,
        PatientType::MedicaidOnly,
        FacilityType::Freestanding,
        0,
    );
    context.medication_type = None;
    let err = classify(&services, &context).unwrap_err();
    assert_eq!(err.to_string(), "missing required parameter: medication_type");

    let mut context = ctx(
        MedicationType::Methadone,
        PatientType::MedicaidOnly,
        FacilityType::Freestanding,
        0,
    );
    context.patient_type = None;
    let err = classify(&services, &context).unwrap_err();
    assert_eq!(err.to_string(), "missing required parameter: patient_type");

    let mut context = ctx(
        MedicationType::Methadone,
        PatientType::MedicaidOnly,
        FacilityType::Freestanding,
        0,
    );
    context.facility_type = None;
    let err = classify(&services, &context).unwrap_err();
    assert_eq!(err.to_string(), "missing required parameter: facility_type");
}

#[test]
fn takehome_days_ignored_when_medication_admin_present() {
    // An in-clinic administration event means this is not a take-home visit,
    // whatever the day count says.
    let rec = classify(
        &ids(&["medication-admin", "individual-counseling"]),
        &ctx(
            MedicationType::Methadone,
            PatientType::MedicaidOnly,
            FacilityType::Freestanding,
            5,
        ),
    )
    .unwrap();

    assert_eq!(rec.billing_method, "Weekly Bundle");
    assert_eq!(rec.estimated_reimbursement, dec!(258.77));
}
