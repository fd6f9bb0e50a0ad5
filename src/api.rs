// API client module: a small blocking HTTP client for the `/entries`
// resource. Each operation maps to exactly one REST call and hands the
// response (or the failure) back to the caller untouched.

use std::fmt::Display;

use reqwest::blocking::{Client, Request};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Serialize;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// A favorite movie or TV show. The backend owns the schema, so the client
/// only ever carries it around as plain JSON.
pub type EntryPayload = serde_json::Value;

const RESOURCE: &str = "entries";

/// Pagination parameters for `list_entries`. Both values start at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 20;

    pub fn new(page: u32, limit: u32) -> Result<Self> {
        if page == 0 || limit == 0 {
            return Err(ApiError::InvalidPage { page, limit });
        }
        Ok(PageRequest { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Raw result of a successful exchange: status, headers and body text,
/// exactly as the backend sent them.
#[derive(Clone, Debug)]
pub struct EntryResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl EntryResponse {
    /// Parse the body as JSON without assuming any particular shape.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Client for the entries API. Holds a reqwest blocking client and the
/// configuration it was built with; no other state survives a call.
#[derive(Clone, Debug)]
pub struct EntryClient {
    client: Client,
    config: ApiConfig,
}

impl EntryClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder().build().map_err(ApiError::Build)?;
        Ok(EntryClient { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GET /entries?page={page}&limit={limit}
    pub fn list_entries(&self, page: PageRequest) -> Result<EntryResponse> {
        let req = self.list_request(page)?;
        self.send(req)
    }

    /// First page with the default limit.
    pub fn list_first_page(&self) -> Result<EntryResponse> {
        self.list_entries(PageRequest::default())
    }

    /// POST /entries with `data` as the JSON body.
    pub fn create_entry(&self, data: &EntryPayload) -> Result<EntryResponse> {
        let req = self.create_request(data)?;
        self.send(req)
    }

    /// PUT /entries/{id} with `data` as the JSON body.
    pub fn update_entry(&self, id: impl Display, data: &EntryPayload) -> Result<EntryResponse> {
        let req = self.update_request(&id.to_string(), data)?;
        self.send(req)
    }

    /// DELETE /entries/{id}
    pub fn delete_entry(&self, id: impl Display) -> Result<EntryResponse> {
        let req = self.delete_request(&id.to_string())?;
        self.send(req)
    }

    fn list_request(&self, page: PageRequest) -> Result<Request> {
        self.client
            .get(self.entries_url(None))
            .query(&page)
            .build()
            .map_err(ApiError::Build)
    }

    fn create_request(&self, data: &EntryPayload) -> Result<Request> {
        self.client
            .post(self.entries_url(None))
            .json(data)
            .build()
            .map_err(ApiError::Build)
    }

    fn update_request(&self, id: &str, data: &EntryPayload) -> Result<Request> {
        self.client
            .put(self.entries_url(Some(id)))
            .json(data)
            .build()
            .map_err(ApiError::Build)
    }

    fn delete_request(&self, id: &str) -> Result<Request> {
        self.client
            .delete(self.entries_url(Some(id)))
            .build()
            .map_err(ApiError::Build)
    }

    /// `{base}/entries` or `{base}/entries/{id}`. The id always lands in a
    /// single, percent-encoded path segment.
    fn entries_url(&self, id: Option<&str>) -> Url {
        let mut url = self.config.base_url().clone();
        // ApiConfig rejects cannot-be-a-base urls, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(RESOURCE);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    fn send(&self, req: Request) -> Result<EntryResponse> {
        let method = req.method().clone();
        let url = req.url().clone();
        tracing::debug!(%method, %url, "sending request");

        let res = self.client.execute(req)?;
        let status = res.status();
        let headers = res.headers().clone();
        let body = res.text()?;
        tracing::debug!(%method, %url, %status, "received response");

        if !status.is_success() {
            tracing::warn!(%method, %url, %status, "request failed");
            return Err(ApiError::Status {
                status,
                headers,
                body,
            });
        }
        Ok(EntryResponse {
            status,
            headers,
            body,
        })
    }
}
