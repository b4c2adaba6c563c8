use serde_json::json;

use payment_method_classifier::adapter::processor::{
    AppProcessorError, AppProcessorErrorReason, AppProcessorFnLabel,
};
use payment_method_classifier::model::CustomerModel;
use payment_method_classifier::usecase::{search_query_exact_email, CustomerLookupUseCase};

use super::{ut_network_error, ut_processor, ut_recorded, CallLog, MockPaymentApi};
use crate::ut_setup_logctx;

fn ut_setup_usecase(mock: MockPaymentApi) -> (CustomerLookupUseCase, CallLog) {
    let (processor, calls) = ut_processor(mock);
    let uc = CustomerLookupUseCase {
        processor,
        logctx: ut_setup_logctx(),
    };
    (uc, calls)
}

fn ut_customers() -> Vec<CustomerModel> {
    let raw = json!([
        {"id": "cus_NffrFeUfNV2Hib", "object": "customer", "email": "a@b.com",
         "name": "Jenny Rosen", "created": 1680893993,
         "metadata": {"crm_id": "88012", "tier": "gold"}},
        {"id": "cus_OtOGvD0ZVacBoj", "object": "customer", "email": "a@b.com",
         "name": null, "metadata": {}},
    ]);
    serde_json::from_value::<Vec<CustomerModel>>(raw).unwrap()
}

#[tokio::test]
async fn find_by_email_ok() {
    let mock = MockPaymentApi::default().search_result(Ok(ut_customers()));
    let (uc, calls) = ut_setup_usecase(mock);
    let result = uc.find_by_email("a@b.com").await;
    let found = result.unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id.as_str(), "cus_NffrFeUfNV2Hib");
    let meta = found[0].metadata.as_ref().unwrap();
    assert_eq!(meta.get("tier").map(String::as_str), Some("gold"));
    assert!(found[1].name.is_none());
    let expect = vec!["customer_search:email:'a@b.com'".to_string()];
    assert_eq!(ut_recorded(&calls), expect);
}

#[tokio::test]
async fn find_by_email_nothing_found() {
    let mock = MockPaymentApi::default().search_result(Ok(Vec::new()));
    let (uc, calls) = ut_setup_usecase(mock);
    let result = uc.find_by_email("nobody@b.com").await;
    // empty result set is still a valid answer
    assert_eq!(result.map(|v| v.len()), Some(0));
    assert_eq!(ut_recorded(&calls).len(), 1);
}

#[tokio::test]
async fn find_by_email_search_failure() {
    let mock = MockPaymentApi::default()
        .search_result(Err(ut_network_error(AppProcessorFnLabel::SearchCustomers)));
    let (uc, _calls) = ut_setup_usecase(mock);
    let result = uc.find_by_email("a@b.com").await;
    assert!(result.is_none());
}

#[tokio::test]
async fn find_by_email_api_rejected() {
    let e = AppProcessorError {
        reason: AppProcessorErrorReason::ApiRejected {
            status: 401,
            err_type: "invalid_request_error".to_string(),
            code: None,
            detail: Some("Invalid API Key provided".to_string()),
        },
        fn_label: AppProcessorFnLabel::SearchCustomers,
    };
    let mock = MockPaymentApi::default().search_result(Err(e));
    let (uc, _calls) = ut_setup_usecase(mock);
    assert!(uc.find_by_email("a@b.com").await.is_none());
}

#[test]
fn search_query_escape() {
    assert_eq!(search_query_exact_email("a@b.com"), "email:'a@b.com'");
    assert_eq!(
        search_query_exact_email("o'neil@b.com"),
        "email:'o\\'neil@b.com'"
    );
    assert_eq!(search_query_exact_email("x\\y@b.com"), "email:'x\\\\y@b.com'");
}
