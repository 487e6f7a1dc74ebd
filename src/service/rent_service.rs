//! Rent overview for the landlord.
//!
//! Payments are not recorded anywhere yet, so each tenant gets a fabricated
//! payment for the coming period. The random source is held by
//! [`PaymentSimulator`] and can be seeded.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Months, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{error, info, instrument, warn};

use crate::dto::rent_dto::{RentListResponse, RentRecord};
use crate::model::format_timestamp;
use crate::model::rent_payment::{PaymentStatus, RentPayment};
use crate::model::tenant::Tenant;
use crate::repository::tenant_repo::TenantRepository;
use crate::util::error::ServiceError;

pub const PAYMENT_METHODS: [&str; 3] = ["M-Pesa", "Bank", "Cash"];
pub const LATE_FEE: f64 = 500.0;
const PAID_PROBABILITY: f64 = 0.7;
const MAX_DAYS_LATE: u32 = 10;
const PAID_WITHIN_SECS: i64 = 30 * 24 * 60 * 60;

pub struct PaymentSimulator {
    rng: Mutex<StdRng>,
}

impl PaymentSimulator {
    pub fn new() -> Self {
        PaymentSimulator { rng: Mutex::new(StdRng::from_entropy()) }
    }

    pub fn seeded(seed: u64) -> Self {
        PaymentSimulator { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    /// Fabricates the payment of `tenant` for the period after `now`.
    /// Returns `None` for a tenant that was never stored.
    pub fn payment_for(&self, tenant: &Tenant, now: DateTime<Utc>) -> Option<RentRecord> {
        let tenant_id = tenant.id?;
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let days_late = rng.gen_range(0..MAX_DAYS_LATE);
        let status = if days_late > 0 {
            PaymentStatus::Overdue
        } else if rng.gen_bool(PAID_PROBABILITY) {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Pending
        };
        let paid_date = match status {
            PaymentStatus::Paid => Some(format_timestamp(now - Duration::seconds(rng.gen_range(0..=PAID_WITHIN_SECS)))),
            _ => None,
        };
        let payment_method = PAYMENT_METHODS.choose(&mut *rng).map(|method| method.to_string());
        let due_date = now.checked_add_months(Months::new(1)).unwrap_or(now + Duration::days(30));

        Some(RentRecord {
            id: format!("payment_{}", tenant_id.to_hex()),
            tenant_name: tenant.name.clone(),
            room_number: tenant.room_number.clone(),
            payment: RentPayment {
                tenant_id,
                amount: tenant.rent_amount,
                due_date: format_timestamp(due_date),
                paid_date,
                late_fee: if status == PaymentStatus::Overdue { LATE_FEE } else { 0.0 },
                status,
                payment_method,
                notes: None,
            },
        })
    }
}

impl Default for PaymentSimulator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
pub trait RentService: Send + Sync {
    async fn list_payments(&self) -> Result<RentListResponse, ServiceError>;
}

pub struct RentServiceImpl {
    pub tenant_repo: Arc<dyn TenantRepository>,
    pub simulator: PaymentSimulator,
}

impl RentServiceImpl {
    pub fn new(tenant_repo: Arc<dyn TenantRepository>, simulator: PaymentSimulator) -> Self {
        Self { tenant_repo, simulator }
    }
}

#[async_trait]
impl RentService for RentServiceImpl {
    #[instrument(skip(self))]
    async fn list_payments(&self) -> Result<RentListResponse, ServiceError> {
        let tenants = self.tenant_repo.list().await.map_err(|e| {
            error!("Failed to load tenants for rent overview: {e}");
            ServiceError::from(e)
        })?;
        let now = Utc::now();
        let payments: Vec<RentRecord> = tenants
            .iter()
            .filter_map(|tenant| {
                let record = self.simulator.payment_for(tenant, now);
                if record.is_none() {
                    warn!("Skipping tenant without id in room {}", tenant.room_number);
                }
                record
            })
            .collect();
        info!("Generated {} rent records", payments.len());
        Ok(RentListResponse::new(payments))
    }
}
