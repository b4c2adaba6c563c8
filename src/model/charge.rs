use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Expandable, IdentifierKind, ObjectIdentity, ObjectListModel};
use crate::constant::PAYMENT_METHOD_US_BANK_ACCOUNT;

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethodDetailModel {
    // discriminator string e.g. `card`, `us_bank_account`, `sepa_debit`
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChargeModel {
    pub id: String,
    #[serde(default)]
    pub payment_intent: Option<Expandable<PaymentIntentModel>>,
    #[serde(default)]
    pub payment_method_details: Option<PaymentMethodDetailModel>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
}

#[allow(non_camel_case_types)]
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum PaymentIntentStatusModel {
    requires_payment_method, requires_confirmation, requires_action,
    processing, requires_capture, canceled, succeeded,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntentModel {
    pub id: String,
    // embedded only by older API versions, or when explicitly expanded
    #[serde(default)]
    pub charges: Option<ObjectListModel<ChargeModel>>,
    #[serde(default)]
    pub latest_charge: Option<Expandable<ChargeModel>>,
    #[serde(default)]
    pub status: Option<PaymentIntentStatusModel>,
}

impl ObjectIdentity for ChargeModel {
    fn object_id(&self) -> &str {
        self.id.as_str()
    }
}
impl ObjectIdentity for PaymentIntentModel {
    fn object_id(&self) -> &str {
        self.id.as_str()
    }
}

impl ChargeModel {
    pub fn payment_intent_id(&self) -> Option<&str> {
        self.payment_intent
            .as_ref()
            .map(Expandable::id)
            .filter(|v| !v.is_empty())
    }

    pub fn payment_method_type(&self) -> Option<&str> {
        self.payment_method_details
            .as_ref()
            .map(|d| d.type_.as_str())
    }

    /// exact, case-sensitive comparison against the discriminator
    pub fn is_us_bank_account(&self) -> bool {
        self.payment_method_type() == Some(PAYMENT_METHOD_US_BANK_ACCOUNT)
    }
}

impl PaymentIntentModel {
    pub fn latest_charge_id(&self) -> Option<&str> {
        self.latest_charge
            .as_ref()
            .map(Expandable::id)
            .filter(|v| !v.is_empty())
    }

    pub fn has_charge_data(&self) -> bool {
        self.charges.is_some() || self.latest_charge_id().is_some()
    }

    /// Look up the latest charge within data already carried by this payment
    /// intent, the expanded `latest_charge` object is also taken into account.
    pub fn embedded_latest_charge(&self) -> Option<&ChargeModel> {
        let latest_id = self.latest_charge_id()?;
        let from_list = self
            .charges
            .as_ref()
            .and_then(|lst| lst.data.iter().find(|c| c.id.as_str() == latest_id));
        from_list.or_else(|| {
            self.latest_charge
                .as_ref()
                .and_then(Expandable::as_object)
        })
    }

    pub fn id_well_formed(&self) -> bool {
        IdentifierKind::from(self.id.as_str()) == IdentifierKind::PaymentIntent
    }
}
