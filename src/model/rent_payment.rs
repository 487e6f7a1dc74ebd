use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

/// Rent payment of a tenant for one period. Only produced by the rent
/// simulator for now; nothing writes these to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentPayment {
    pub tenant_id: ObjectId,
    pub amount: f64,
    pub due_date: String,
    pub paid_date: Option<String>,
    pub status: PaymentStatus,
    pub payment_method: Option<String>,
    pub late_fee: f64,
    pub notes: Option<String>,
}
