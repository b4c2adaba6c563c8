use serde_json::json;

use payment_method_classifier::model::{
    ChargeModel, CustomerModel, Expandable, IdentifierKind, PaymentIntentModel,
    PaymentIntentStatusModel,
};

#[test]
fn identifier_kind_by_prefix() {
    let cases = [
        ("pi_3MtwBwLkdIwHu7ix28a3tqPa", IdentifierKind::PaymentIntent),
        ("ch_3MmlLrLkdIwHu7ix0snN0B15", IdentifierKind::Charge),
        ("py_1Oa2b3LkdIwHu7ix", IdentifierKind::Charge),
        ("pm_1MqLiJLkdIwHu7ixUEgbFdYF", IdentifierKind::Unknown),
        ("pi", IdentifierKind::Unknown),
        ("", IdentifierKind::Unknown),
    ];
    for (raw, expect) in cases {
        assert_eq!(IdentifierKind::from(raw), expect);
    }
}

#[test]
fn charge_from_api_response() {
    let raw = json!({
        "id": "py_3MmlLrLkdIwHu7ix0snN0B15",
        "object": "charge",
        "amount": 1099,
        "amount_captured": 1099,
        "balance_transaction": "txn_3MmlLrLkdIwHu7ix0uke3Ezy",
        "billing_details": {"address": null, "email": null, "name": "Jenny Rosen"},
        "created": 1679090539,
        "currency": "usd",
        "livemode": false,
        "metadata": {},
        "paid": true,
        "payment_intent": "pi_3MmlLrLkdIwHu7ix0uke3Ezy",
        "payment_method": "pm_1MmlLrLkdIwHu7ixIJwEWSNR",
        "payment_method_details": {
            "type": "us_bank_account",
            "us_bank_account": {
                "account_holder_type": "individual",
                "account_type": "checking",
                "bank_name": "STRIPE TEST BANK",
                "last4": "6789",
                "routing_number": "110000000"
            }
        },
        "status": "pending"
    });
    let charge = serde_json::from_value::<ChargeModel>(raw).unwrap();
    assert_eq!(charge.payment_intent_id(), Some("pi_3MmlLrLkdIwHu7ix0uke3Ezy"));
    assert_eq!(charge.payment_method_type(), Some("us_bank_account"));
    assert!(charge.is_us_bank_account());
    assert_eq!(charge.amount, Some(1099));
    assert_eq!(charge.created.map(|t| t.timestamp()), Some(1679090539));
}

#[test]
fn charge_minimal_fields() {
    let raw = json!({"id": "ch_1", "payment_intent": null, "created": null});
    let charge = serde_json::from_value::<ChargeModel>(raw).unwrap();
    assert!(charge.payment_intent_id().is_none());
    assert!(charge.payment_method_type().is_none());
    assert!(!charge.is_us_bank_account());
    assert!(charge.created.is_none());
}

#[test]
fn payment_intent_embedded_charges() {
    let raw = json!({
        "id": "pi_123",
        "object": "payment_intent",
        "status": "processing",
        "latest_charge": "ch_1",
        "charges": {
            "object": "list",
            "data": [
                {"id": "ch_0", "payment_method_details": {"type": "card"}},
                {"id": "ch_1", "payment_method_details": {"type": "us_bank_account"}}
            ],
            "has_more": false,
            "url": "/v1/charges?payment_intent=pi_123"
        }
    });
    let intent = serde_json::from_value::<PaymentIntentModel>(raw).unwrap();
    assert!(intent.id_well_formed());
    assert_eq!(intent.status, Some(PaymentIntentStatusModel::processing));
    assert!(intent.has_charge_data());
    assert_eq!(intent.latest_charge_id(), Some("ch_1"));
    let embedded = intent.embedded_latest_charge().unwrap();
    assert_eq!(embedded.id.as_str(), "ch_1");
    assert!(embedded.is_us_bank_account());
}

#[test]
fn payment_intent_expanded_latest_charge() {
    let raw = json!({
        "id": "pi_124",
        "status": "succeeded",
        "latest_charge": {"id": "ch_9", "payment_method_details": {"type": "card"}}
    });
    let intent = serde_json::from_value::<PaymentIntentModel>(raw).unwrap();
    assert!(intent.charges.is_none());
    assert_eq!(intent.latest_charge_id(), Some("ch_9"));
    let cond = matches!(intent.latest_charge, Some(Expandable::Object(_)));
    assert!(cond);
    let embedded = intent.embedded_latest_charge().unwrap();
    assert!(!embedded.is_us_bank_account());
}

#[test]
fn payment_intent_unknown_status() {
    let raw = json!({"id": "seti_1", "status": "some_future_status"});
    let intent = serde_json::from_value::<PaymentIntentModel>(raw).unwrap();
    assert!(!intent.id_well_formed());
    assert_eq!(intent.status, Some(PaymentIntentStatusModel::Unknown));
    assert!(!intent.has_charge_data());
    assert!(intent.embedded_latest_charge().is_none());
}

#[test]
fn customer_from_api_response() {
    let raw = json!({
        "id": "cus_NffrFeUfNV2Hib",
        "object": "customer",
        "email": "jennyrosen@example.com",
        "name": "Jenny Rosen",
        "created": 1680893993,
        "metadata": {"order_id": "6735"},
        "invoice_settings": {"custom_fields": null}
    });
    let c = serde_json::from_value::<CustomerModel>(raw).unwrap();
    assert_eq!(c.email.as_deref(), Some("jennyrosen@example.com"));
    let meta = c.metadata.unwrap();
    assert_eq!(meta.get("order_id").map(String::as_str), Some("6735"));
}
