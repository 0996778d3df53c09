use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::rate::RateEntry;

/// The result of classifying a service selection against a billing context.
///
/// Derived, never persisted — recomputed fresh on every classification call.
/// `estimated_reimbursement` always equals the sum of `rate` over
/// `rate_codes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BillingRecommendation {
    /// Human-readable billing method, e.g. "Weekly Bundle" or "APG Only".
    pub billing_method: String,
    /// Itemized rate entries backing the total.
    pub rate_codes: Vec<RateEntry>,
    /// Deduplicated HCPCS codes across all rate entries.
    pub procedure_codes: BTreeSet<String>,
    #[ts(type = "string")]
    pub estimated_reimbursement: Decimal,
    pub notes: Vec<String>,
    pub warnings: Vec<String>,
}
