use std::boxed::Box;
use std::sync::Arc;

use crate::adapter::processor::AbstractPaymentApiClient;
use crate::logging::{app_log_event, AppLogContext, AppLogLevel};
use crate::model::CustomerModel;

pub struct CustomerLookupUseCase {
    pub processor: Arc<Box<dyn AbstractPaymentApiClient>>,
    pub logctx: Arc<AppLogContext>,
}

/// Query language of the search API quotes string values with single quotes,
/// backslash and quote characters within the value have to be escaped.
pub fn search_query_exact_email(email: &str) -> String {
    let escaped = email.chars().fold(String::new(), |mut dst, c| {
        if c == '\\' || c == '\'' {
            dst.push('\\');
        }
        dst.push(c);
        dst
    });
    format!("email:'{escaped}'")
}

impl CustomerLookupUseCase {
    /// `None` means the search itself failed, which differs from an empty
    /// list of customers.
    pub async fn find_by_email(&self, email: &str) -> Option<Vec<CustomerModel>> {
        let logctx_p = &self.logctx;
        let query = search_query_exact_email(email);
        self.processor
            .search_customers(query.as_str())
            .await
            .map_err(|e| {
                app_log_event!(logctx_p, AppLogLevel::WARNING, "{:?}", e);
            })
            .ok()
    }
}
