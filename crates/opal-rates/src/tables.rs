//! Static reimbursement rate tables.
//!
//! One bundle table keyed by `(FacilityClass, MedicationType, BillingVariant)`
//! and one flat APG table keyed by service. Both are compiled-in
//! configuration, built once and never mutated.
//!
//! Not every bundle key exists: methadone and buprenorphine carry `weekly`
//! and `takehome` variants, naltrexone carries `weekly` and `injection`
//! only. `invariant_violations` audits the shape of the table.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use opal_core::models::context::{BillingVariant, FacilityClass, MedicationType};
use opal_core::models::rate::RateEntry;

use crate::vocab::ApgService;

pub type BundleKey = (FacilityClass, MedicationType, BillingVariant);

fn entry(code: &str, rate: Decimal, hcpcs: &str, description: &str) -> RateEntry {
    RateEntry {
        code: code.to_string(),
        rate,
        hcpcs: hcpcs.to_string(),
        description: description.to_string(),
    }
}

static BUNDLE_RATES: LazyLock<BTreeMap<BundleKey, RateEntry>> = LazyLock::new(|| {
    use BillingVariant::{Injection, Takehome, Weekly};
    use FacilityClass::{Freestanding, HospitalBased};
    use MedicationType::{Buprenorphine, Methadone, Naltrexone};

    let rows = [
        // Freestanding OTP
        (Freestanding, Methadone, Weekly, "7969", dec!(258.77), "G2067", "Methadone weekly bundle, freestanding"),
        (Freestanding, Methadone, Takehome, "7970", dec!(92.42), "G2078", "Methadone take-home bundle, freestanding, per day"),
        (Freestanding, Buprenorphine, Weekly, "7971", dec!(301.53), "G2068", "Buprenorphine weekly bundle, freestanding"),
        (Freestanding, Buprenorphine, Takehome, "7972", dec!(107.69), "G2079", "Buprenorphine take-home bundle, freestanding, per day"),
        (Freestanding, Naltrexone, Weekly, "7973", dec!(189.45), "G2073", "Naltrexone weekly bundle, freestanding"),
        (Freestanding, Naltrexone, Injection, "7974", dec!(1572.40), "J2315", "Naltrexone extended-release injection, freestanding"),
        // Hospital-based OTP
        (HospitalBased, Methadone, Weekly, "4613", dec!(275.90), "G2067", "Methadone weekly bundle, hospital-based"),
        (HospitalBased, Methadone, Takehome, "4614", dec!(98.55), "G2078", "Methadone take-home bundle, hospital-based, per day"),
        (HospitalBased, Buprenorphine, Weekly, "4615", dec!(321.68), "G2068", "Buprenorphine weekly bundle, hospital-based"),
        (HospitalBased, Buprenorphine, Takehome, "4616", dec!(114.87), "G2079", "Buprenorphine take-home bundle, hospital-based, per day"),
        (HospitalBased, Naltrexone, Weekly, "4617", dec!(202.11), "G2073", "Naltrexone weekly bundle, hospital-based"),
        (HospitalBased, Naltrexone, Injection, "4618", dec!(1604.73), "J2315", "Naltrexone extended-release injection, hospital-based"),
    ];

    rows.into_iter()
        .map(|(class, medication, variant, code, rate, hcpcs, description)| {
            ((class, medication, variant), entry(code, rate, hcpcs, description))
        })
        .collect()
});

static APG_RATES: LazyLock<BTreeMap<ApgService, RateEntry>> = LazyLock::new(|| {
    ApgService::ALL
        .into_iter()
        .map(|service| {
            let e = match service {
                ApgService::AdmissionAssessment => entry("1400", dec!(156.78), "H0001", "Admission assessment"),
                ApgService::PeriodicAssessment => entry("1401", dec!(132.45), "G2077", "Periodic assessment"),
                ApgService::PsychiatricEvaluation => entry("1402", dec!(217.90), "90792", "Psychiatric evaluation with medical services"),
                ApgService::PeerServices => entry("1403", dec!(68.34), "H0038", "Peer support services"),
                ApgService::SmokingCessation => entry("1404", dec!(54.12), "99407", "Smoking cessation counseling, intensive"),
                ApgService::MedicalVisit => entry("1405", dec!(110.58), "99213", "Medical visit, established patient"),
                ApgService::CrisisIntervention => entry("1406", dec!(163.25), "H2011", "Crisis intervention"),
                ApgService::FamilyTherapy => entry("1407", dec!(141.02), "90847", "Family therapy with patient present"),
            };
            (service, e)
        })
        .collect()
});

/// Look up a bundle rate. Returns `None` for combinations the payer does not
/// define (e.g. naltrexone take-home).
pub fn bundle_rate(
    class: FacilityClass,
    medication: MedicationType,
    variant: BillingVariant,
) -> Option<&'static RateEntry> {
    BUNDLE_RATES.get(&(class, medication, variant))
}

/// The full bundle table, for enumeration.
pub fn bundle_rates() -> &'static BTreeMap<BundleKey, RateEntry> {
    &BUNDLE_RATES
}

/// Look up the APG rate for a non-qualifying service. The table keys every
/// vocabulary variant, so this only returns `None` on a table defect.
pub fn apg_rate(service: ApgService) -> Option<&'static RateEntry> {
    APG_RATES.get(&service)
}

/// The full APG table, for enumeration.
pub fn apg_rates() -> &'static BTreeMap<ApgService, RateEntry> {
    &APG_RATES
}

/// Audit the shape of the compiled-in tables.
///
/// Violations here are construction bugs, not runtime conditions; the test
/// suite asserts this is empty.
pub fn invariant_violations() -> Vec<String> {
    let mut violations = Vec::new();

    for class in [FacilityClass::Freestanding, FacilityClass::HospitalBased] {
        for medication in [
            MedicationType::Methadone,
            MedicationType::Buprenorphine,
            MedicationType::Naltrexone,
        ] {
            if bundle_rate(class, medication, BillingVariant::Weekly).is_none() {
                violations.push(format!("no weekly rate for {class:?}/{medication:?}"));
            }
            let takehome = bundle_rate(class, medication, BillingVariant::Takehome);
            if medication == MedicationType::Naltrexone {
                if takehome.is_some() {
                    violations.push(format!("naltrexone must not expose a take-home rate ({class:?})"));
                }
            } else if takehome.is_none() {
                violations.push(format!("no take-home rate for {class:?}/{medication:?}"));
            }
        }
    }

    for service in ApgService::ALL {
        if apg_rate(service).is_none() {
            violations.push(format!("no APG rate for {}", service.id()));
        }
    }

    violations
}
