//! `api/articles` endpoints.

use mdd_domain::request::RequestSpec;
use mdd_domain::{Article, Articles, IdResponse, NewArticle, NewComment};

use super::api::{ApiClient, with_json};
use crate::error::ApplicationResult;
use crate::ports::HttpClient;

const PATH: &str = "api/articles";

/// Article feed, detail, creation and comments.
pub struct ArticleService<C> {
    api: ApiClient<C>,
}

impl<C: HttpClient> ArticleService<C> {
    /// Creates the service.
    #[must_use]
    pub const fn new(api: ApiClient<C>) -> Self {
        Self { api }
    }

    /// Lists every article.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, a non-success status or a malformed answer.
    pub async fn list(&self) -> ApplicationResult<Vec<Article>> {
        let listing: Articles = self.api.fetch(RequestSpec::get(PATH)).await?;
        Ok(listing.articles)
    }

    /// Publishes an article and returns its id.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or if the backend rejects the article.
    pub async fn create(&self, article: &NewArticle) -> ApplicationResult<u64> {
        let spec = with_json(RequestSpec::post(PATH), article)?;
        let created: IdResponse = self.api.fetch(spec).await?;
        Ok(created.id)
    }

    /// Fetches one article with its comments.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or if the article does not exist.
    pub async fn get(&self, id: u64) -> ApplicationResult<Article> {
        self.api.fetch(RequestSpec::get(format!("{PATH}/{id}"))).await
    }

    /// Comments on an article and returns the comment id.
    ///
    /// # Errors
    ///
    /// Fails on transport errors or if the backend rejects the comment.
    pub async fn add_comment(&self, article_id: u64, comment: &NewComment) -> ApplicationResult<u64> {
        let spec = with_json(RequestSpec::post(format!("{PATH}/{article_id}")), comment)?;
        let created: IdResponse = self.api.fetch(spec).await?;
        Ok(created.id)
    }
}
