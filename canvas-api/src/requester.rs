//! The HTTP layer shared by every resource.

use reqwest::{
    header::{HeaderMap, WWW_AUTHENTICATE},
    Method, RequestBuilder, Response,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, trace, warn};
use url::Url;

use crate::{
    error::{ApiError, RequestError, Result},
    params::RequiredFields,
    token::AccessToken,
};

/// Sends authenticated requests relative to the API root of one Canvas
/// instance.
///
/// Cloning is cheap, clones share the connection pool of the underlying
/// [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct Requester {
    http_client: reqwest::Client,
    api_url: Url,
    token: AccessToken,
}

impl Requester {
    /// Creates a requester for the instance at `base_url`.
    ///
    /// `base_url` is the root of the instance, e.g.
    /// `https://canvas.example.edu`. A trailing `/api/v1` is stripped.
    pub fn new(http_client: reqwest::Client, base_url: &Url, token: AccessToken) -> Result<Self> {
        let api_url = api_url(base_url)?;
        Ok(Self {
            http_client,
            api_url,
            token,
        })
    }

    #[must_use]
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Resolves `path` against the API root.
    ///
    /// Characters that may not appear in a path are percent-encoded, existing
    /// escapes such as `%2F` are kept. Use [`escape_segment`] for ids that may
    /// contain `/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.api_url.clone();
        let full_path = format!("{}{}", url.path(), path.trim_matches('/'));
        url.set_path(&full_path);
        url
    }

    /// Prepares a request with credentials.
    ///
    /// Parameters become the query string for `GET` and `DELETE` and the JSON
    /// body for everything else.
    pub(crate) fn builder<P>(&self, method: Method, url: Url, params: Option<&P>) -> RequestBuilder
    where
        P: Serialize + ?Sized,
    {
        debug!(%method, %url, "Preparing request");
        let builder = self
            .http_client
            .request(method.clone(), url)
            .bearer_auth(&*self.token);
        match params {
            Some(params) if method == Method::GET || method == Method::DELETE => {
                builder.query(params)
            }
            Some(params) => builder.json(params),
            None => builder,
        }
    }

    /// Sends a prepared request and turns error statuses into [`ApiError`]s.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(%status, url = %response.url(), "Received response");
        if status.is_success() {
            return Ok(response);
        }

        let authenticate = response.headers().contains_key(WWW_AUTHENTICATE);
        let body = response.text().await?;
        let err = ApiError::from_response(status, authenticate, &body);
        debug!(%err, "Request failed");
        Err(err.into())
    }

    pub(crate) async fn decode<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = response.text().await?;
        trace!(body);

        let de = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(de).map_err(|err| {
            error!(%err, "Could not deserialize response");
            RequestError::Decode(err)
        })
    }

    /// Calls an endpoint and decodes the JSON response.
    pub async fn call<T, P>(&self, method: Method, path: &str, params: Option<&P>) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        let response = self.execute(self.builder(method, url, params)).await?;
        Self::decode(response).await
    }

    /// Like [`Requester::call`], but rejects `payload` without sending
    /// anything if it lacks a required field.
    ///
    /// `body` is what actually goes over the wire, usually `payload` wrapped
    /// in the resource's envelope key.
    pub async fn call_validated<T, V, P>(
        &self,
        method: Method,
        path: &str,
        payload: &V,
        body: &P,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        V: RequiredFields + ?Sized,
        P: Serialize + ?Sized,
    {
        payload.validate()?;
        self.call(method, path, Some(body)).await
    }

    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.call::<_, ()>(Method::GET, path, None).await
    }
}

/// Escapes the characters of a single path segment that would otherwise
/// change the path structure.
///
/// `%` is left alone so that callers may pass ids they escaped themselves.
pub fn escape_segment(segment: &str) -> String {
    segment
        .replace('/', "%2F")
        .replace('?', "%3F")
        .replace('#', "%23")
}

/// Finds the `rel="next"` target among the `Link` headers of a response.
pub(crate) fn next_link(headers: &HeaderMap) -> Result<Option<Url>> {
    for value in headers.get_all(reqwest::header::LINK) {
        let Ok(value) = value.to_str() else {
            warn!(?value, "Ignoring non-ASCII Link header");
            continue;
        };
        for link in split_links(value) {
            let mut parts = link.split(';');
            let target = parts.next().unwrap_or_default().trim();
            let Some(target) = target.strip_prefix('<').and_then(|t| t.strip_suffix('>')) else {
                continue;
            };
            let is_next = parts.any(|param| match param.split_once('=') {
                Some((name, value)) if name.trim().eq_ignore_ascii_case("rel") => value
                    .trim()
                    .trim_matches('"')
                    .split_whitespace()
                    .any(|rel| rel.eq_ignore_ascii_case("next")),
                _ => false,
            });
            if is_next {
                return Ok(Some(Url::parse(target)?));
            }
        }
    }
    Ok(None)
}

/// Splits a `Link` header value at the commas separating links, ignoring
/// commas inside `<...>`.
fn split_links(value: &str) -> impl Iterator<Item = &str> {
    let mut links = Vec::new();
    let mut depth = 0_usize;
    let mut start = 0;
    for (i, c) in value.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                links.push(&value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    links.push(&value[start..]);
    links.into_iter().map(str::trim).filter(|link| !link.is_empty())
}

fn api_url(base_url: &Url) -> Result<Url> {
    let mut base_url = base_url.clone();
    base_url.set_query(None);
    base_url.set_fragment(None);

    let path = base_url.path().trim_end_matches('/');
    let path = match path.strip_suffix("/api/v1") {
        Some(stripped) => {
            warn!(%base_url, "The base URL should not contain /api/v1, removing it");
            stripped.to_string()
        }
        None => path.to_string(),
    };
    base_url.set_path(&format!("{path}/"));
    Ok(base_url.join("api/v1/")?)
}
