use super::error::{RequestError, RequestResult};
use super::transport::{HttpRequest, Transport};
use futures::future::{AbortHandle, Abortable, Aborted, LocalBoxFuture};
use futures::FutureExt;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

const JSON_MIME: &str = "application/json";

/// Request payload
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Serialized as JSON, with JSON `Accept`/`Content-Type` headers
    Json(Value),
    /// Sent verbatim, no headers
    Text(String),
}

impl Body {
    /// Empty text and JSON `null` are sent as no body at all
    fn is_empty(&self) -> bool {
        match self {
            Body::Json(value) => value.is_null(),
            Body::Text(text) => text.is_empty(),
        }
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Json(value)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

fn build_request(method: &str, url: &str, body: Option<Body>) -> HttpRequest {
    let request = HttpRequest::new(method, url);

    match body {
        Some(body) if body.is_empty() => request,
        Some(Body::Json(value)) => request
            .header("Accept", JSON_MIME)
            .header("Content-Type", JSON_MIME)
            .body(value.to_string()),
        Some(Body::Text(text)) => request.body(text),
        None => request,
    }
}

/// An in-flight request.
///
/// Resolves once with the parsed JSON body. The handle returned by
/// [`PendingRequest::handle`] cancels it from anywhere.
pub struct PendingRequest {
    inner: Abortable<LocalBoxFuture<'static, RequestResult<Value>>>,
    handle: AbortHandle,
}

impl PendingRequest {
    pub fn handle(&self) -> AbortHandle {
        self.handle.clone()
    }

    /// Cancel the request; safe to call more than once.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Future for PendingRequest {
    type Output = RequestResult<Value>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.inner.poll_unpin(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(Aborted)) => {
                tracing::debug!("request aborted by handle");
                Poll::Ready(Err(RequestError::Aborted))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Issue one request over `transport` and parse a 2xx body as JSON.
///
/// Any other status fails with [`RequestError::Status`]; cancellation, by the
/// returned handle or by the transport, fails with [`RequestError::Aborted`].
pub fn ajax<T>(transport: Rc<T>, method: &str, url: &str, body: Option<Body>) -> PendingRequest
where
    T: Transport + ?Sized + 'static,
{
    let request = build_request(method, url, body);
    let fut = request_json(transport, request, url.to_string()).boxed_local();

    let (inner, handle) = futures::future::abortable(fut);
    PendingRequest { inner, handle }
}

async fn request_json<T>(transport: Rc<T>, request: HttpRequest, url: String) -> RequestResult<Value>
where
    T: Transport + ?Sized,
{
    let response = transport.send(request).await?;

    if !response.is_success() {
        return Err(RequestError::Status {
            status: response.status,
            url,
        });
    }

    serde_json::from_str(&response.body).map_err(|source| RequestError::Parse { url, source })
}
