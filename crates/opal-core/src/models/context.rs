use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MedicationType {
    Methadone,
    Buprenorphine,
    Naltrexone,
}

impl MedicationType {
    pub fn label(self) -> &'static str {
        match self {
            MedicationType::Methadone => "methadone",
            MedicationType::Buprenorphine => "buprenorphine",
            MedicationType::Naltrexone => "naltrexone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PatientType {
    MedicaidOnly,
    DualEligible,
    /// Patient dosing at a facility other than their enrolled program.
    GuestDosing,
    NursingHome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FacilityType {
    Freestanding,
    HospitalBased,
    Fqhc,
    Ccbhc,
}

/// Rate-table partition. FQHC and CCBHC programs bill against the
/// freestanding rate partition; only hospital-based programs have their
/// own rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FacilityClass {
    Freestanding,
    HospitalBased,
}

impl FacilityType {
    pub fn rate_class(self) -> FacilityClass {
        match self {
            FacilityType::HospitalBased => FacilityClass::HospitalBased,
            _ => FacilityClass::Freestanding,
        }
    }
}

/// The bundle variant a rate entry prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BillingVariant {
    /// In-clinic weekly bundle.
    Weekly,
    /// Per-day take-home bundle.
    Takehome,
    /// Extended-release injection bundle (naltrexone only).
    Injection,
}

/// Caller-supplied billing parameters.
///
/// The three selections are optional because they mirror unset UI selects;
/// classification refuses to run until all three are present.
/// `takehome_days` of 0 means "not a take-home scenario".
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BillingContext {
    pub medication_type: Option<MedicationType>,
    pub patient_type: Option<PatientType>,
    pub facility_type: Option<FacilityType>,
    #[serde(default)]
    pub takehome_days: u32,
}
