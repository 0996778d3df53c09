use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One billable line item at a fixed price point.
///
/// Rate entries are static configuration — defined once in the rate tables
/// and never mutated at runtime. Every computed total is a sum over these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RateEntry {
    /// Payer rate code (e.g., "7969").
    pub code: String,
    /// Reimbursement amount in dollars.
    #[ts(type = "string")]
    pub rate: Decimal,
    /// HCPCS procedure code (e.g., "G2067").
    pub hcpcs: String,
    pub description: String,
}
