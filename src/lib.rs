pub mod adapter;
pub mod config;
pub mod constant;
pub mod error;
pub mod logging;
pub mod model;
pub mod usecase;

use std::boxed::Box;
use std::result::Result;
use std::sync::Arc;

use crate::adapter::processor::{
    app_processor_context, AbstractPaymentApiClient, AppProcessorError,
};
use crate::config::AppClassifierCfg;
use crate::logging::AppLogContext;
use crate::usecase::{CustomerLookupUseCase, PaymentMethodClassifier};

pub struct AppSharedState {
    _config: Arc<AppClassifierCfg>,
    _log_ctx: Arc<AppLogContext>,
    _processor: Arc<Box<dyn AbstractPaymentApiClient>>,
}

impl AppSharedState {
    pub fn new(cfg: AppClassifierCfg) -> Result<Self, AppProcessorError> {
        let logctx = {
            let lc = AppLogContext::new(&cfg.logging);
            Arc::new(lc)
        };
        let _processor = {
            let proc = app_processor_context(&cfg.processor, logctx.clone())?;
            Arc::new(proc)
        };
        Ok(Self {
            _config: Arc::new(cfg),
            _log_ctx: logctx,
            _processor,
        })
    }

    /// for callers which bring their own payment API client e.g. test double
    pub fn with_processor(
        cfg: AppClassifierCfg,
        processor: Box<dyn AbstractPaymentApiClient>,
    ) -> Self {
        let logctx = Arc::new(AppLogContext::new(&cfg.logging));
        Self {
            _config: Arc::new(cfg),
            _log_ctx: logctx,
            _processor: Arc::new(processor),
        }
    }

    pub fn classifier(&self) -> PaymentMethodClassifier {
        PaymentMethodClassifier {
            processor: self._processor.clone(),
            logctx: self._log_ctx.clone(),
        }
    }
    pub fn customer_lookup(&self) -> CustomerLookupUseCase {
        CustomerLookupUseCase {
            processor: self._processor.clone(),
            logctx: self._log_ctx.clone(),
        }
    }
    pub fn log_context(&self) -> Arc<AppLogContext> {
        self._log_ctx.clone()
    }
    pub fn config(&self) -> Arc<AppClassifierCfg> {
        self._config.clone()
    }
} // end of impl AppSharedState

impl Clone for AppSharedState {
    fn clone(&self) -> Self {
        Self {
            _config: self._config.clone(),
            _log_ctx: self._log_ctx.clone(),
            _processor: self._processor.clone(),
        }
    }
}
