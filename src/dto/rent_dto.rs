use serde::Serialize;

use crate::model::rent_payment::RentPayment;

/// A payment row as shown on the landlord's rent page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub tenant_name: String,
    pub room_number: String,
    #[serde(flatten)]
    pub payment: RentPayment,
}

#[derive(Debug, Clone, Serialize)]
pub struct RentListResponse {
    pub success: bool,
    pub payments: Vec<RentRecord>,
    pub count: usize,
}

impl RentListResponse {
    pub fn new(payments: Vec<RentRecord>) -> Self {
        RentListResponse { success: true, count: payments.len(), payments }
    }
}
