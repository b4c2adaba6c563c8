use std::boxed::Box;
use std::sync::Arc;

use crate::adapter::processor::AbstractPaymentApiClient;
use crate::logging::{app_log_event, AppLogContext, AppLogLevel};
use crate::model::{ChargeModel, IdentifierKind, PaymentIntentModel};

/// Answers whether a charge, or a payment intent, was settled through US bank
/// account transfer.
///
/// Any failure while talking to the payment processor ends up with negative
/// result, callers cannot tell "not a bank transfer" from "unable to confirm",
/// the detail is only reported through logging.
pub struct PaymentMethodClassifier {
    pub processor: Arc<Box<dyn AbstractPaymentApiClient>>,
    pub logctx: Arc<AppLogContext>,
}

impl PaymentMethodClassifier {
    pub async fn is_us_bank_transfer(&self, object_id: &str) -> bool {
        let logctx_p = &self.logctx;
        let intent_id = match self.resolve_payment_intent_id(object_id).await {
            Some(v) => v,
            None => {
                app_log_event!(
                    logctx_p,
                    AppLogLevel::DEBUG,
                    "unresolved-payment-intent, given:{object_id}"
                );
                return false;
            }
        };
        let result = self
            .latest_charge(intent_id.as_str())
            .await
            .map(|c| Self::is_us_bank_account(&c))
            .unwrap_or(false);
        app_log_event!(
            logctx_p,
            AppLogLevel::DEBUG,
            "given:{object_id}, payment-intent:{intent_id}, us-bank-transfer:{result}"
        );
        result
    } // end of fn is_us_bank_transfer

    /// Identifier of payment intent is returned as it is, identifier of charge
    /// record requires one fetch for the payment intent it refers to.
    pub async fn resolve_payment_intent_id(&self, object_id: &str) -> Option<String> {
        let logctx_p = &self.logctx;
        match IdentifierKind::from(object_id) {
            IdentifierKind::PaymentIntent => Some(object_id.to_string()),
            IdentifierKind::Charge => {
                let charge = self
                    .processor
                    .fetch_charge(object_id)
                    .await
                    .map_err(|e| {
                        app_log_event!(logctx_p, AppLogLevel::WARNING, "{:?}", e);
                    })
                    .ok()?;
                let found = charge.payment_intent_id().map(ToString::to_string);
                if found.is_none() {
                    app_log_event!(
                        logctx_p,
                        AppLogLevel::DEBUG,
                        "charge-without-payment-intent, charge:{object_id}"
                    );
                }
                found
            }
            IdentifierKind::Unknown => {
                app_log_event!(
                    logctx_p,
                    AppLogLevel::DEBUG,
                    "unknown-id-prefix, given:{object_id}"
                );
                None
            }
        }
    } // end of fn resolve_payment_intent_id

    /// Latest charge of the payment intent, taken from the charges embedded in
    /// the payment intent first, then fetched separately if the processor did
    /// not embed it.
    pub async fn latest_charge(&self, intent_id: &str) -> Option<ChargeModel> {
        let logctx_p = &self.logctx;
        let intent = self
            .processor
            .fetch_payment_intent(intent_id)
            .await
            .map_err(|e| {
                app_log_event!(logctx_p, AppLogLevel::WARNING, "{:?}", e);
            })
            .ok()?;
        if !intent.id_well_formed() {
            app_log_event!(
                logctx_p,
                AppLogLevel::DEBUG,
                "not-payment-intent, requested:{intent_id}, returned:{}",
                intent.id.as_str()
            );
            return None;
        }
        if !intent.has_charge_data() {
            app_log_event!(
                logctx_p,
                AppLogLevel::DEBUG,
                "no-charge-data, payment-intent:{intent_id}, status:{:?}",
                intent.status
            );
            return None;
        }
        if let Some(c) = intent.embedded_latest_charge() {
            app_log_event!(
                logctx_p,
                AppLogLevel::DEBUG,
                "embedded-charge-found, payment-intent:{intent_id}, charge:{}",
                c.id.as_str()
            );
            return Some(c.clone());
        }
        // the record returned is trusted to be the requested charge
        let latest_id = intent.latest_charge_id()?;
        app_log_event!(
            logctx_p,
            AppLogLevel::DEBUG,
            "fallback-fetch-charge, payment-intent:{intent_id}, charge:{latest_id}"
        );
        self.processor
            .fetch_charge(latest_id)
            .await
            .map_err(|e| {
                app_log_event!(logctx_p, AppLogLevel::WARNING, "{:?}", e);
            })
            .ok()
    } // end of fn latest_charge

    pub fn is_us_bank_account(charge: &ChargeModel) -> bool {
        charge.is_us_bank_account()
    }

    /// Classification without network access, the payment intent has to embed
    /// its charges, and one of them has to match the latest charge.
    pub fn classify_from_payment_intent(intent: &PaymentIntentModel) -> bool {
        if intent.charges.is_none() {
            return false;
        }
        intent
            .embedded_latest_charge()
            .map(Self::is_us_bank_account)
            .unwrap_or(false)
    }
} // end of impl PaymentMethodClassifier
