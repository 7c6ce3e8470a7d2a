//! `api/themes` endpoints.

use mdd_domain::request::RequestSpec;
use mdd_domain::{Theme, Themes};

use super::api::ApiClient;
use crate::error::ApplicationResult;
use crate::ports::HttpClient;

const PATH: &str = "api/themes";

/// Theme listing and subscriptions.
pub struct ThemeService<C> {
    api: ApiClient<C>,
}

impl<C: HttpClient> ThemeService<C> {
    /// Creates the service.
    #[must_use]
    pub const fn new(api: ApiClient<C>) -> Self {
        Self { api }
    }

    /// Lists every theme.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-success status or a malformed answer.
    pub async fn list(&self) -> ApplicationResult<Vec<Theme>> {
        let listing: Themes = self.api.fetch(RequestSpec::get(PATH)).await?;
        Ok(listing.themes)
    }

    /// Subscribes the current user to a theme.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-success status.
    pub async fn subscribe(&self, theme_id: u64) -> ApplicationResult<()> {
        self.api
            .send(RequestSpec::post(format!("{PATH}/subscribe/{theme_id}")))
            .await
            .map(|_| ())
    }

    /// Unsubscribes the current user from a theme.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or a non-success status.
    pub async fn unsubscribe(&self, theme_id: u64) -> ApplicationResult<()> {
        self.api
            .send(RequestSpec::post(format!("{PATH}/unsubscribe/{theme_id}")))
            .await
            .map(|_| ())
    }
}
