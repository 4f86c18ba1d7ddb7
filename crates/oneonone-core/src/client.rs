//! REST client for the 1on1 backend.
//!
//! Credentials travel in an explicit [`Session`] handed to each call; the
//! client itself holds no auth state. Token refresh is left to the caller.

use reqwest::{Response, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ApiError;
use crate::finalize::FinalizeRequest;
use crate::model::Calendar;

/// Bearer credentials for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    access_token: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client rooted at `base_url`. A missing trailing slash is added
    /// so relative endpoints join under it.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "unexpected API response");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// `GET calendars/{id}/`
    pub async fn fetch_calendar(&self, session: &Session, id: i64) -> Result<Calendar, ApiError> {
        let url = self.endpoint(&format!("calendars/{id}/"))?;
        tracing::info!(%url, "fetching calendar");
        let response = self
            .http
            .get(url)
            .bearer_auth(session.access_token())
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// `GET calendars/?page={page}` (pages start at 1)
    pub async fn list_calendars(
        &self,
        session: &Session,
        page: u32,
    ) -> Result<Page<Calendar>, ApiError> {
        let mut url = self.endpoint("calendars/")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        tracing::info!(%url, "listing calendars");
        let response = self
            .http
            .get(url)
            .bearer_auth(session.access_token())
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// Every calendar, page by page until the listing has no `next`, reading
    /// at most `max_pages` pages.
    pub async fn fetch_all_calendars(
        &self,
        session: &Session,
        max_pages: u32,
    ) -> Result<Vec<Calendar>, ApiError> {
        let mut calendars = Vec::new();
        for page in 1..=max_pages {
            let listing = self.list_calendars(session, page).await?;
            let more = listing.has_next();
            calendars.extend(listing.results);
            if !more {
                break;
            }
        }
        Ok(calendars)
    }

    /// `PUT calendars/{id}/finalize/`
    pub async fn finalize(
        &self,
        session: &Session,
        id: i64,
        request: &FinalizeRequest,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("calendars/{id}/finalize/"))?;
        tracing::info!(%url, date = %request.final_date, "finalizing calendar");
        let response = self
            .http
            .put(url)
            .bearer_auth(session.access_token())
            .json(request)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
