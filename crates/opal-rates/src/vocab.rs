//! Fixed service vocabularies.
//!
//! A service selection is partitioned against these two sets at
//! classification time: qualifying services are covered by the weekly or
//! take-home bundle rate; non-qualifying services bill as itemized APG
//! lines. Identifiers outside both vocabularies are ignored.

/// Bundle-eligible services. Rendering any of these puts the visit on the
/// bundle billing path (unless the patient is guest dosing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QualifyingService {
    IndividualCounseling,
    GroupCounseling,
    /// In-clinic observed dose administration. Its absence from an otherwise
    /// qualifying selection is what marks a take-home visit.
    MedicationAdmin,
    MedicationManagement,
    BriefTreatment,
    PresumptiveToxicology,
    DefinitiveToxicology,
}

impl QualifyingService {
    pub const ALL: [QualifyingService; 7] = [
        QualifyingService::IndividualCounseling,
        QualifyingService::GroupCounseling,
        QualifyingService::MedicationAdmin,
        QualifyingService::MedicationManagement,
        QualifyingService::BriefTreatment,
        QualifyingService::PresumptiveToxicology,
        QualifyingService::DefinitiveToxicology,
    ];

    pub fn id(self) -> &'static str {
        match self {
            QualifyingService::IndividualCounseling => "individual-counseling",
            QualifyingService::GroupCounseling => "group-counseling",
            QualifyingService::MedicationAdmin => "medication-admin",
            QualifyingService::MedicationManagement => "medication-management",
            QualifyingService::BriefTreatment => "brief-treatment",
            QualifyingService::PresumptiveToxicology => "presumptive-toxicology",
            QualifyingService::DefinitiveToxicology => "definitive-toxicology",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualifyingService::IndividualCounseling => "Individual Counseling",
            QualifyingService::GroupCounseling => "Group Counseling",
            QualifyingService::MedicationAdmin => "Medication Administration",
            QualifyingService::MedicationManagement => "Medication Management",
            QualifyingService::BriefTreatment => "Brief Treatment",
            QualifyingService::PresumptiveToxicology => "Presumptive Toxicology",
            QualifyingService::DefinitiveToxicology => "Definitive Toxicology",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.id() == id)
    }
}

/// Services that never qualify for the bundle and map 1:1 into the APG
/// rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ApgService {
    AdmissionAssessment,
    PeriodicAssessment,
    PsychiatricEvaluation,
    PeerServices,
    SmokingCessation,
    MedicalVisit,
    CrisisIntervention,
    FamilyTherapy,
}

impl ApgService {
    pub const ALL: [ApgService; 8] = [
        ApgService::AdmissionAssessment,
        ApgService::PeriodicAssessment,
        ApgService::PsychiatricEvaluation,
        ApgService::PeerServices,
        ApgService::SmokingCessation,
        ApgService::MedicalVisit,
        ApgService::CrisisIntervention,
        ApgService::FamilyTherapy,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ApgService::AdmissionAssessment => "admission-assessment",
            ApgService::PeriodicAssessment => "periodic-assessment",
            ApgService::PsychiatricEvaluation => "psychiatric-evaluation",
            ApgService::PeerServices => "peer-services",
            ApgService::SmokingCessation => "smoking-cessation",
            ApgService::MedicalVisit => "medical-visit",
            ApgService::CrisisIntervention => "crisis-intervention",
            ApgService::FamilyTherapy => "family-therapy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ApgService::AdmissionAssessment => "Admission Assessment",
            ApgService::PeriodicAssessment => "Periodic Assessment",
            ApgService::PsychiatricEvaluation => "Psychiatric Evaluation",
            ApgService::PeerServices => "Peer Support Services",
            ApgService::SmokingCessation => "Smoking Cessation Counseling",
            ApgService::MedicalVisit => "Medical Visit",
            ApgService::CrisisIntervention => "Crisis Intervention",
            ApgService::FamilyTherapy => "Family Therapy",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.id() == id)
    }
}
