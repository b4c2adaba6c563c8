mod charge;
mod customer;

use serde::Deserialize;

use crate::constant::identifier::{PREFIX_CHARGE, PREFIX_PAYMENT, PREFIX_PAYMENT_INTENT};

pub use charge::{
    ChargeModel, PaymentIntentModel, PaymentIntentStatusModel, PaymentMethodDetailModel,
};
pub use customer::CustomerModel;

pub trait ObjectIdentity {
    fn object_id(&self) -> &str;
}

/// Related object in a response, the payment processor returns either the
/// identifier only or the whole object when the field is expanded.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(String),
    Object(Box<T>),
}

impl<T: ObjectIdentity> Expandable<T> {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(v) => v.as_str(),
            Self::Object(o) => o.object_id(),
        }
    }
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Object(o) => Some(o.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectListModel<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    PaymentIntent,
    Charge,
    Unknown,
}

impl From<&str> for IdentifierKind {
    fn from(value: &str) -> Self {
        if value.starts_with(PREFIX_PAYMENT_INTENT) {
            Self::PaymentIntent
        } else if value.starts_with(PREFIX_CHARGE) || value.starts_with(PREFIX_PAYMENT) {
            Self::Charge
        } else {
            Self::Unknown
        }
    }
}
