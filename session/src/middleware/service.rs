use std::convert::Infallible;

use axum_core::{
    body::Body,
    extract::Request,
    response::{IntoResponse, Response},
};
use bytes::{Bytes, BytesMut};
use futures::{
    future::{self, BoxFuture},
    stream, FutureExt, StreamExt,
};
use http::{header, HeaderMap, Method};
use http_body_util::BodyExt;
use judging_cookie::cookie_header_line;
use tower_service::Service;

use crate::{
    error::{IntoErrorResponse, SessionError},
    SessionRequest,
};

use super::{cookie::append_headers, SessionMiddleware};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

impl<S, H> Service<Request> for SessionMiddleware<S, H>
where
    S: Service<Request, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
    H: IntoErrorResponse<Error = SessionError> + Clone + Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(http.uri = %req.uri(), http.method = %req.method())))]
    fn call(&mut self, req: Request) -> Self::Future {
        let not_ready_inner = self.inner.clone();
        let mut ready_inner = std::mem::replace(&mut self.inner, not_ready_inner);

        let handler = self.handler.clone();
        let error_handler = self.error_handler.clone();
        let pending = async move {
            let (parts, body) = req.into_parts();

            // Only a form POST can carry the reset flag, other bodies pass through untouched.
            let (body, form) = if parts.method == Method::POST && is_form(&parts.headers) {
                match read_form(body, handler.config().body_limit()).await {
                    Ok(FormBody::Complete(bytes)) => (Body::from(bytes.clone()), bytes),
                    Ok(FormBody::Oversized(body)) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!("Form body over the limit, skipping reset detection");

                        (body, Bytes::new())
                    }
                    Err(err) => {
                        #[cfg(feature = "tracing")]
                        tracing::error!(error = %crate::error::log_error_chain(&err));

                        return error_handler.into_error_response(err);
                    }
                }
            } else {
                (body, Bytes::new())
            };

            let cookie = cookie_header_line(&parts.headers);
            let outcome = {
                let mut request = SessionRequest::new(&parts.method).with_body(&form);
                if let Some(cookie) = cookie.as_deref() {
                    request = request.with_cookie_header(cookie);
                }
                handler.handle(&request)
            };

            let headers = match outcome.headers() {
                Ok(headers) => headers,
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!(error = %crate::error::log_error_chain(&err));

                    return error_handler.into_error_response(err);
                }
            };

            let status = outcome.status();
            let Some(visit) = outcome.into_visit() else {
                #[cfg(feature = "tracing")]
                tracing::debug!("Session reset, redirecting");

                let mut response = status.into_response();
                append_headers(response.headers_mut(), &headers);
                return response;
            };

            let mut req = Request::from_parts(parts, body);
            req.extensions_mut().insert(visit);

            let mut response = match ready_inner.call(req).await {
                Ok(response) => response,
                Err(err) => match err {},
            };
            append_headers(response.headers_mut(), &headers);

            #[cfg(feature = "tracing")]
            tracing::debug!("Session middleware finished");

            response
        };

        pending.map(Ok::<Response, Infallible>).boxed()
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

enum FormBody {
    /// The whole body, no larger than the limit.
    Complete(Bytes),
    /// The body went past the limit; the bytes read so far are put back in front of the rest.
    Oversized(Body),
}

async fn read_form(mut body: Body, limit: usize) -> Result<FormBody, SessionError> {
    let mut buffered = BytesMut::new();

    while let Some(frame) = body.frame().await {
        let frame = frame.map_err(|err| SessionError::ReadBody(err.into()))?;
        let Ok(data) = frame.into_data() else {
            continue;
        };
        buffered.extend_from_slice(&data);

        if buffered.len() > limit {
            let read = stream::once(future::ready(Ok::<_, axum_core::Error>(buffered.freeze())));
            let rest = body.into_data_stream();
            return Ok(FormBody::Oversized(Body::from_stream(read.chain(rest))));
        }
    }

    Ok(FormBody::Complete(buffered.freeze()))
}
