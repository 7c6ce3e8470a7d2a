//! Article, comment and theme subscription use cases.

use mdd_domain::validation::{validate_article, validate_comment};
use mdd_domain::{NewArticle, NewComment};

use crate::error::ApplicationResult;
use crate::ports::HttpClient;
use crate::services::{ArticleService, ThemeService};

/// Publishes a new article.
pub struct CreateArticle<C> {
    articles: ArticleService<C>,
}

impl<C: HttpClient> CreateArticle<C> {
    /// Creates a new `CreateArticle` use case.
    #[must_use]
    pub const fn new(articles: ArticleService<C>) -> Self {
        Self { articles }
    }

    /// Validates and publishes the article, returning its id.
    ///
    /// # Errors
    ///
    /// Returns the validation or service error.
    pub async fn execute(&self, article: NewArticle) -> ApplicationResult<u64> {
        validate_article(&article)?;
        self.articles.create(&article).await
    }
}

/// Comments on an article.
pub struct AddComment<C> {
    articles: ArticleService<C>,
}

impl<C: HttpClient> AddComment<C> {
    /// Creates a new `AddComment` use case.
    #[must_use]
    pub const fn new(articles: ArticleService<C>) -> Self {
        Self { articles }
    }

    /// Validates and posts the comment, returning its id.
    ///
    /// # Errors
    ///
    /// Returns the validation or service error.
    pub async fn execute(&self, article_id: u64, comment: NewComment) -> ApplicationResult<u64> {
        validate_comment(&comment)?;
        self.articles.add_comment(article_id, &comment).await
    }
}

/// Toggles the current user's subscription to a theme.
pub struct SubscribeTheme<C> {
    themes: ThemeService<C>,
}

impl<C: HttpClient> SubscribeTheme<C> {
    /// Creates a new `SubscribeTheme` use case.
    #[must_use]
    pub const fn new(themes: ThemeService<C>) -> Self {
        Self { themes }
    }

    /// Subscribes when `subscribed` is true, unsubscribes otherwise.
    ///
    /// # Errors
    ///
    /// Returns the service error.
    pub async fn execute(&self, theme_id: u64, subscribed: bool) -> ApplicationResult<()> {
        if subscribed {
            self.themes.subscribe(theme_id).await
        } else {
            self.themes.unsubscribe(theme_id).await
        }
    }
}
