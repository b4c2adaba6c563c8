use std::result::Result;

use hyper::StatusCode;
use serde::de::DeserializeOwned;
use serde::ser::Serialize;

use crate::constant::processor::API_VERSION;

use super::super::transport::{TransportError, TransportErrorReason};
use super::super::AppProcessorErrorReason;
use super::resources::ApiErrorBody;

/// `/v1/<resource-path>`, followed by the serialised query if given
pub(super) fn request_uri<S: Serialize>(
    resource_path: &str,
    query: Option<&S>,
) -> Result<String, TransportError> {
    let mut uri = format!("/{API_VERSION}{resource_path}");
    if let Some(q) = query {
        let serial = serde_qs::to_string(q).map_err(|e| TransportError {
            reason: TransportErrorReason::SerialiseFailure(e.to_string()),
        })?;
        uri.push('?');
        uri.push_str(serial.as_str());
    }
    Ok(uri)
}

fn undecodable(e: serde_json::Error, status: StatusCode) -> AppProcessorErrorReason {
    let reason = TransportErrorReason::DeserialiseFailure(Box::new(e.to_string()), status.as_u16());
    AppProcessorErrorReason::LowLvlNet(TransportError { reason })
}

/// Success response carries the requested object, any other status carries
/// the error envelope `{"error": {"type", "code", "message"}}`.
pub(super) fn decode_response<D: DeserializeOwned>(
    status: StatusCode,
    raw: &[u8],
) -> Result<D, AppProcessorErrorReason> {
    if status.is_success() {
        return serde_json::from_slice::<D>(raw).map_err(|e| undecodable(e, status));
    }
    let body = serde_json::from_slice::<ApiErrorBody>(raw).map_err(|e| undecodable(e, status))?;
    Err(AppProcessorErrorReason::ApiRejected {
        status: status.as_u16(),
        err_type: body.error.type_,
        code: body.error.code,
        detail: body.error.message,
    })
}
