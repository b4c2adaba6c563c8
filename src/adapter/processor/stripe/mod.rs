mod resources;
mod wire;

use std::result::Result;
use std::sync::Arc;

use async_trait::async_trait;
use http_body_util::Empty;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ACCEPT, AUTHORIZATION, HOST};
use hyper::{Method, Request};
use serde::de::DeserializeOwned;
use serde::ser::Serialize;

use crate::config::{is_loopback_host, AppProcessorCfg};
use crate::constant::processor::DEFAULT_API_PORT;
use crate::logging::{app_log_event, AppLogContext, AppLogLevel};
use crate::model::{ChargeModel, CustomerModel, PaymentIntentModel};

use self::resources::{SearchCustomerQuery, SearchResult};
use super::transport::{AppConnector, TransportError, TransportErrorReason};
use super::{
    AbstractPaymentApiClient, AppProcessorError, AppProcessorErrorReason, AppProcessorFnLabel,
};

// object identifiers issued by the processor are short, and consist of
// ASCII letters, digits and underscore only
const MAX_OBJECT_ID_LENGTH: usize = 255;

pub(super) struct AppProcessorStripeCtx {
    host: String,
    port: u16,
    connector: AppConnector,
    auth_value: HeaderValue,
    logctx: Arc<AppLogContext>,
}

fn validate_object_id(value: &str) -> Result<(), AppProcessorErrorReason> {
    let valid = !value.is_empty()
        && value.len() <= MAX_OBJECT_ID_LENGTH
        && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(AppProcessorErrorReason::InvalidIdentifier(value.to_string()))
    }
}

impl AppProcessorStripeCtx {
    pub(super) fn try_build(
        cfg: &AppProcessorCfg,
        logctx: Arc<AppLogContext>,
    ) -> Result<Self, AppProcessorErrorReason> {
        if cfg.secret_key.is_empty() {
            return Err(AppProcessorErrorReason::MissingCredential);
        }
        if cfg.host.is_empty() || cfg.port == 0 {
            return Err(AppProcessorErrorReason::InvalidConfig);
        }
        let mut auth_value = HeaderValue::from_str(format!("Bearer {}", cfg.secret_key).as_str())
            .map_err(|_e| AppProcessorErrorReason::CredentialCorrupted)?;
        auth_value.set_sensitive(true);
        let connector = if cfg.plaintext {
            // the secret key never leaves the host without encryption
            if !is_loopback_host(cfg.host.as_str()) {
                return Err(AppProcessorErrorReason::InvalidConfig);
            }
            AppConnector::Plain
        } else {
            AppConnector::secure()?
        };
        Ok(Self {
            host: cfg.host.clone(),
            port: cfg.port,
            connector,
            auth_value,
            logctx,
        })
    } // end of fn try-build

    fn build_get_request(&self, uri: &str) -> Result<Request<Empty<Bytes>>, TransportError> {
        // required in case the API server sits behind reverse proxy
        let host_val = if self.port == DEFAULT_API_PORT {
            self.host.clone()
        } else {
            format!("{}:{}", self.host, self.port)
        };
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(HOST, host_val)
            .header(AUTHORIZATION, self.auth_value.clone())
            .header(ACCEPT, "application/json")
            .body(Empty::new())
            .map_err(|e| TransportError {
                reason: TransportErrorReason::HttpRequest(e.to_string()),
            })
    }

    async fn _request<D, S>(
        &self,
        resource_path: &str,
        query: Option<&S>,
    ) -> Result<D, AppProcessorErrorReason>
    where
        D: DeserializeOwned + Send + 'static,
        S: Serialize + Sync,
    {
        let logctx_p = &self.logctx;
        let uri = wire::request_uri(resource_path, query)?;
        let req = self.build_get_request(uri.as_str())?;
        let (status, raw) = self
            .connector
            .send(req, self.host.as_str(), self.port, self.logctx.clone())
            .await?;
        if status.is_client_error() {
            app_log_event!(
                logctx_p,
                AppLogLevel::INFO,
                "path:{resource_path}, status:{}",
                status.as_u16()
            );
        } else if status.is_server_error() {
            app_log_event!(
                logctx_p,
                AppLogLevel::WARNING,
                "path:{resource_path}, status:{}",
                status.as_u16()
            );
        }
        wire::decode_response::<D>(status, raw.as_ref())
    } // end of fn _request

    async fn _fetch_object<D>(
        &self,
        collection: &str,
        object_id: &str,
    ) -> Result<D, AppProcessorErrorReason>
    where
        D: DeserializeOwned + Send + 'static,
    {
        validate_object_id(object_id)?;
        let path = format!("/{collection}/{object_id}");
        self._request::<D, ()>(path.as_str(), None).await
    }
} // end of impl AppProcessorStripeCtx

#[async_trait]
impl AbstractPaymentApiClient for AppProcessorStripeCtx {
    async fn fetch_charge(&self, charge_id: &str) -> Result<ChargeModel, AppProcessorError> {
        self._fetch_object::<ChargeModel>("charges", charge_id)
            .await
            .map_err(|reason| AppProcessorError {
                reason,
                fn_label: AppProcessorFnLabel::FetchCharge,
            })
    }

    async fn fetch_payment_intent(
        &self,
        intent_id: &str,
    ) -> Result<PaymentIntentModel, AppProcessorError> {
        self._fetch_object::<PaymentIntentModel>("payment_intents", intent_id)
            .await
            .map_err(|reason| AppProcessorError {
                reason,
                fn_label: AppProcessorFnLabel::FetchPaymentIntent,
            })
    }

    async fn search_customers(
        &self,
        query: &str,
    ) -> Result<Vec<CustomerModel>, AppProcessorError> {
        let logctx_p = &self.logctx;
        let q = SearchCustomerQuery {
            query: query.to_string(),
        };
        let result = self
            ._request::<SearchResult<CustomerModel>, SearchCustomerQuery>(
                "/customers/search",
                Some(&q),
            )
            .await
            .map_err(|reason| AppProcessorError {
                reason,
                fn_label: AppProcessorFnLabel::SearchCustomers,
            })?;
        app_log_event!(
            logctx_p,
            AppLogLevel::DEBUG,
            "customer-search, num-found:{}, has-more:{}, next-page:{}",
            result.data.len(),
            result.has_more,
            result.next_page.is_some()
        );
        Ok(result.data)
    }
} // end of impl AppProcessorStripeCtx
