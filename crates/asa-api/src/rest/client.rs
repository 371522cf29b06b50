// REST API HTTP client
//
// Wraps `reqwest::Client` with ASA-specific URL construction, token header
// injection, status mapping, and the `rangeInfo`/`items` pagination loop.
// Endpoint wrappers live in `endpoints.rs`, the token lifecycle in `auth.rs`.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace, warn};
use url::Url;

use crate::auth::{AUTH_TOKEN_HEADER, ApiGeneration, Credentials};
use crate::error::Error;
use crate::rest::types::RangeInfo;
use crate::transport::TransportConfig;

/// Async client for the ASA REST API.
///
/// Authenticates once through `/tokenservices` and then sends the issued
/// token on every request. All endpoints live under `{base}/api/`.
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    token: Option<String>,
}

impl RestClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for `base_url` (e.g. `https://10.0.0.1:443`).
    pub fn new(
        base_url: &str,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http, credentials)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(
        base_url: &str,
        http: reqwest::Client,
        credentials: Credentials,
    ) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            credentials,
            token: None,
        })
    }

    /// Append `/api/` unless the caller already pointed at it.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with("/api") {
            url.set_path(&format!("{path}/"));
        } else {
            let prefix = ApiGeneration::Rest.base_path();
            url.set_path(&format!("{path}{prefix}"));
        }

        Ok(url)
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The token currently attached to requests, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub(crate) fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join an endpoint (e.g. `"/monitoring/arp"`) onto the base URL.
    pub(crate) fn url(&self, endpoint: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    fn apply_token(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.as_deref() {
            Some(token) => builder.header(AUTH_TOKEN_HEADER, token),
            None => builder,
        }
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// POST with a JSON body when `payload` is present, GET otherwise.
    async fn send(
        &self,
        endpoint: &str,
        payload: Option<&Value>,
        params: &[(&str, String)],
    ) -> Result<reqwest::Response, Error> {
        let url = self.url(endpoint)?;
        let builder = match payload {
            Some(body) => {
                debug!("POST {url} params={params:?}");
                self.http.post(url).json(body)
            }
            None => {
                debug!("GET {url} params={params:?}");
                self.http.get(url)
            }
        };
        let builder = if params.is_empty() {
            builder
        } else {
            builder.query(params)
        };

        Ok(self.apply_token(builder).send().await?)
    }

    async fn request(
        &self,
        endpoint: &str,
        payload: Option<&Value>,
        params: &[(&str, String)],
    ) -> Result<Value, Error> {
        let resp = self.send(endpoint, payload, params).await?;
        let status = resp.status();
        if status != StatusCode::OK {
            debug!(%status, endpoint, "device returned non-success status");
            return Err(Error::Command {
                status: status.as_u16(),
                endpoint: endpoint.to_owned(),
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::deserialization(&e, &body))
    }

    /// Fetch `endpoint` and decode the JSON body.
    ///
    /// Any status other than 200 is an [`Error::Command`].
    pub async fn fetch(&self, endpoint: &str, payload: Option<&Value>) -> Result<Value, Error> {
        self.request(endpoint, payload, &[]).await
    }

    /// Like [`fetch`](Self::fetch), but a non-200 status yields `Ok(None)`.
    ///
    /// Transport failures are still errors.
    pub async fn try_fetch(
        &self,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> Result<Option<Value>, Error> {
        match self.fetch(endpoint, payload).await {
            Ok(body) => Ok(Some(body)),
            Err(Error::Command { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Fetch `endpoint` and follow `rangeInfo` pagination.
    ///
    /// When the first page reports `limit < total`, the same request is
    /// re-issued with `offset` set to the number of items collected so far
    /// until `total` is reached. The returned body is the first page with
    /// `items` replaced by the accumulated list.
    pub async fn fetch_paginated(
        &self,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> Result<Value, Error> {
        let first = self.fetch(endpoint, payload).await?;
        self.collect_pages(endpoint, payload, first).await
    }

    /// Paginated form of [`try_fetch`](Self::try_fetch).
    ///
    /// Only the first page may be absent; a failing follow-up page is an error.
    pub async fn try_fetch_paginated(
        &self,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> Result<Option<Value>, Error> {
        match self.try_fetch(endpoint, payload).await? {
            Some(first) => self.collect_pages(endpoint, payload, first).await.map(Some),
            None => Ok(None),
        }
    }

    async fn collect_pages(
        &self,
        endpoint: &str,
        payload: Option<&Value>,
        mut response: Value,
    ) -> Result<Value, Error> {
        let Some(range) = range_info(&response) else {
            return Ok(response);
        };
        if range.limit >= range.total {
            return Ok(response);
        }

        let mut items = take_items(&mut response);
        while collected(&items) < range.total {
            let offset = items.len();
            let mut page = self
                .request(endpoint, payload, &[("offset", offset.to_string())])
                .await?;
            let page_items = take_items(&mut page);
            trace!(
                endpoint,
                offset,
                received = page_items.len(),
                total = range.total,
                "fetched page"
            );

            if page_items.is_empty() {
                warn!(
                    endpoint,
                    collected = items.len(),
                    total = range.total,
                    "device returned an empty page before reaching the reported total"
                );
                break;
            }
            items.extend(page_items);
        }

        if let Some(obj) = response.as_object_mut() {
            obj.insert("items".into(), Value::Array(items));
        }
        Ok(response)
    }

    /// Fetch, paginate, and decode the listing into typed items.
    pub(crate) async fn list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, Error> {
        let body = self.fetch_paginated(endpoint, None).await?;
        decode_items(body)
    }

    /// Decode any JSON value into `T`, keeping the body for diagnostics.
    pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
        serde_json::from_value::<T>(value.clone())
            .map_err(|e| Error::deserialization(&e, &value.to_string()))
    }
}

// ── Pagination helpers ───────────────────────────────────────────────

fn range_info(body: &Value) -> Option<RangeInfo> {
    body.get("rangeInfo")
        .and_then(|r| serde_json::from_value(r.clone()).ok())
}

fn take_items(body: &mut Value) -> Vec<Value> {
    match body.get_mut("items").map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

fn collected(items: &[Value]) -> u64 {
    u64::try_from(items.len()).unwrap_or(u64::MAX)
}

pub(crate) fn decode_items<T: DeserializeOwned>(mut body: Value) -> Result<Vec<T>, Error> {
    let items = Value::Array(take_items(&mut body));
    RestClient::decode(items)
}
