use std::io::{Error as IoError, ErrorKind};
use std::result::Result;
use std::sync::Arc;

use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::client::conn::http1::handshake;
use hyper::{Error as HyperError, Request, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_native_tls::{native_tls, TlsConnector};

use crate::logging::{app_log_event, AppLogContext, AppLogLevel};

#[derive(Debug)]
pub enum TransportErrorReason {
    Connect(ErrorKind, String),
    Tls(String),
    Http(String),
    HttpRequest(String),
    SerialiseFailure(String),
    /// decoding error message, and status code of the response
    DeserialiseFailure(Box<String>, u16),
}

#[derive(Debug)]
pub struct TransportError {
    pub reason: TransportErrorReason,
}

impl From<IoError> for TransportError {
    fn from(value: IoError) -> Self {
        let reason = TransportErrorReason::Connect(value.kind(), value.to_string());
        Self { reason }
    }
}
impl From<HyperError> for TransportError {
    fn from(value: HyperError) -> Self {
        let reason = TransportErrorReason::Http(value.to_string());
        Self { reason }
    }
}
impl From<native_tls::Error> for TransportError {
    fn from(value: native_tls::Error) -> Self {
        let reason = TransportErrorReason::Tls(value.to_string());
        Self { reason }
    }
}

/// How the byte stream to the processor is opened. The real API server is
/// always reached through TLS, plain TCP is only for a mock server listening
/// on loopback interface.
pub(super) enum AppConnector {
    Secure(TlsConnector),
    Plain,
}

impl AppConnector {
    pub(super) fn secure() -> Result<Self, TransportError> {
        let mut builder = native_tls::TlsConnector::builder();
        builder.min_protocol_version(Some(native_tls::Protocol::Tlsv12));
        let c = builder.build()?;
        Ok(Self::Secure(c.into()))
    }

    /// Send a request without body on a new connection, the connection is
    /// dropped once the whole response body is collected.
    pub(super) async fn send(
        &self,
        req: Request<Empty<Bytes>>,
        host: &str,
        port: u16,
        logctx: Arc<AppLogContext>,
    ) -> Result<(StatusCode, Bytes), TransportError> {
        let tcp_stream = TcpStream::connect((host, port)).await.map_err(|e| {
            app_log_event!(
                logctx,
                AppLogLevel::ERROR,
                "tcp-conn-err, {host}:{port}, {:?}",
                &e
            );
            TransportError::from(e)
        })?;
        match self {
            Self::Secure(c) => {
                let tls_stream = c.connect(host, tcp_stream).await?;
                exchange(tls_stream, req, logctx).await
            }
            Self::Plain => exchange(tcp_stream, req, logctx).await,
        }
    }
} // end of impl AppConnector

async fn exchange<S>(
    stream: S,
    req: Request<Empty<Bytes>>,
    logctx: Arc<AppLogContext>,
) -> Result<(StatusCode, Bytes), TransportError>
where
    S: AsyncRead + AsyncWrite + Send + Unpin + 'static,
{
    let (mut sender, conn) = handshake::<_, Empty<Bytes>>(TokioIo::new(stream)).await?;
    let _handle = tokio::spawn(async move {
        if let Err(e) = conn.await {
            app_log_event!(logctx, AppLogLevel::WARNING, "conn-closed-err, {:?}", e);
        }
    });
    let resp = sender.send_request(req).await?;
    let status = resp.status();
    let collected = resp.into_body().collect().await?;
    Ok((status, collected.to_bytes()))
}
