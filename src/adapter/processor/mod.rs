mod stripe;
mod transport;

use std::boxed::Box;
use std::marker::{Send, Sync};
use std::result::Result;
use std::sync::Arc;

use async_trait::async_trait;

pub use self::transport::{TransportError, TransportErrorReason};
use self::stripe::AppProcessorStripeCtx;
use crate::config::AppProcessorCfg;
use crate::logging::AppLogContext;
use crate::model::{ChargeModel, CustomerModel, PaymentIntentModel};

/// Operations consumed from the 3rd-party payment processor, the only seam
/// between the classifier and any concrete API client.
#[async_trait]
pub trait AbstractPaymentApiClient: Send + Sync {
    async fn fetch_charge(&self, charge_id: &str) -> Result<ChargeModel, AppProcessorError>;

    async fn fetch_payment_intent(
        &self,
        intent_id: &str,
    ) -> Result<PaymentIntentModel, AppProcessorError>;

    async fn search_customers(&self, query: &str)
        -> Result<Vec<CustomerModel>, AppProcessorError>;
}

#[derive(Debug)]
pub enum AppProcessorErrorReason {
    InvalidConfig,
    MissingCredential,
    CredentialCorrupted,
    InvalidIdentifier(String),
    LowLvlNet(TransportError),
    ApiRejected {
        status: u16,
        err_type: String,
        code: Option<String>,
        detail: Option<String>,
    },
}

#[derive(Debug, PartialEq)]
pub enum AppProcessorFnLabel {
    TryBuild,
    FetchCharge,
    FetchPaymentIntent,
    SearchCustomers,
}

#[derive(Debug)]
pub struct AppProcessorError {
    pub reason: AppProcessorErrorReason,
    pub fn_label: AppProcessorFnLabel,
}

impl From<TransportError> for AppProcessorErrorReason {
    fn from(value: TransportError) -> Self {
        Self::LowLvlNet(value)
    }
}

pub fn app_processor_context(
    cfg: &AppProcessorCfg,
    logctx: Arc<AppLogContext>,
) -> Result<Box<dyn AbstractPaymentApiClient>, AppProcessorError> {
    let proc = AppProcessorStripeCtx::try_build(cfg, logctx).map_err(|reason| {
        AppProcessorError {
            reason,
            fn_label: AppProcessorFnLabel::TryBuild,
        }
    })?;
    Ok(Box::new(proc))
}
