use http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use judging_cookie::{CookieJar, SetCookieBuilder};

use crate::{
    config::SessionConfig, error::SessionError, state::SessionState, token::SessionToken, Visit,
};

/// The parts of an inbound request the session cares about.
#[derive(Debug, Clone, Copy)]
pub struct SessionRequest<'a> {
    method: &'a Method,
    cookie: Option<&'a str>,
    body: &'a [u8],
}

impl<'a> SessionRequest<'a> {
    pub fn new(method: &'a Method) -> Self {
        Self {
            method,
            cookie: None,
            body: &[],
        }
    }

    /// Raw `Cookie` header line, if the request had one.
    pub fn with_cookie_header(mut self, cookie: &'a str) -> Self {
        self.cookie = Some(cookie);
        self
    }

    /// Form-encoded body, only looked at for `POST`.
    pub fn with_body(mut self, body: &'a [u8]) -> Self {
        self.body = body;
        self
    }
}

/// What the transport layer should send back.
///
/// A reset carries a redirect and the deletion cookie and no visit. A normal visit
/// carries `200 OK`, the refreshed cookie and the [`Visit`] for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResponse {
    status: StatusCode,
    set_cookie: String,
    location: Option<String>,
    visit: Option<Visit>,
}

impl SessionResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// `Set-Cookie` header value.
    pub fn set_cookie(&self) -> &str {
        &self.set_cookie
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn visit(&self) -> Option<&Visit> {
        self.visit.as_ref()
    }

    pub fn into_visit(self) -> Option<Visit> {
        self.visit
    }

    pub fn is_reset(&self) -> bool {
        self.visit.is_none()
    }

    /// Headers to attach to the outgoing response.
    ///
    /// # Errors
    /// Returns a `SessionError` when the cookie or the redirect location cannot be put in
    /// a header, which only happens with a misconfigured cookie name, path or location.
    pub fn headers(&self) -> Result<HeaderMap, SessionError> {
        let mut headers = HeaderMap::with_capacity(2);
        let cookie = HeaderValue::from_str(&self.set_cookie)
            .map_err(|source| SessionError::InvalidHeader { name: "set-cookie", source })?;
        headers.append(header::SET_COOKIE, cookie);

        if let Some(location) = &self.location {
            let location = HeaderValue::from_str(location)
                .map_err(|source| SessionError::InvalidHeader { name: "location", source })?;
            headers.insert(header::LOCATION, location);
        }
        Ok(headers)
    }
}

/// Runs one request through the session lifecycle.
///
/// Holds configuration only. Every call works on its own inputs, so one handler can
/// serve any number of concurrent requests without locking.
#[derive(Debug, Clone, Default)]
pub struct SessionHandler {
    config: SessionConfig,
}

impl SessionHandler {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(http.method = %request.method)))]
    pub fn handle(&self, request: &SessionRequest<'_>) -> SessionResponse {
        let state = SessionState::detect(
            request.method,
            request.body,
            self.config.reset_field(),
            self.config.reset_marker(),
        );

        #[cfg(feature = "tracing")]
        tracing::debug!("Session state {}", state);

        match state {
            SessionState::ResetRequested => self.reset(),
            SessionState::Normal => self.visit(request.cookie),
        }
    }

    /// Clears the cookie and redirects. Nothing from the request is decoded.
    pub fn reset(&self) -> SessionResponse {
        let set_cookie = SetCookieBuilder::removal(self.config.cookie_name.clone())
            .with_path(self.config.path.clone())
            .with_http_only(true)
            .to_header_string();

        SessionResponse {
            status: StatusCode::SEE_OTHER,
            set_cookie,
            location: Some(self.config.redirect_to().to_owned()),
            visit: None,
        }
    }

    /// Counts a visit for the session found in `cookie`, or for a new one.
    pub fn visit(&self, cookie: Option<&str>) -> SessionResponse {
        let token = self.restore(cookie).increment();
        let visit = Visit::new(token);

        #[cfg(feature = "tracing")]
        tracing::debug!(session = %visit.key(), visits = visit.visits(), "Visit counted");

        let value = visit.token().to_string();
        let set_cookie = SetCookieBuilder::new(self.config.cookie_name.clone(), value)
            .with_max_age(self.config.max_age())
            .with_path(self.config.path.clone())
            .with_http_only(true)
            .to_header_string();

        SessionResponse {
            status: StatusCode::OK,
            set_cookie,
            location: None,
            visit: Some(visit),
        }
    }

    /// Prior token from the cookie header, or a fresh one when it is missing or malformed.
    pub fn restore(&self, cookie: Option<&str>) -> SessionToken {
        let restored = cookie
            .map(CookieJar::from_header)
            .and_then(|jar| jar.get(self.config.cookie_name()).and_then(SessionToken::parse));

        match restored {
            Some(token) => token,
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("No usable session cookie, starting a new session");
                SessionToken::fresh()
            }
        }
    }
}
