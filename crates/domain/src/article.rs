//! Article and comment payloads exchanged with `api/articles`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A published article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article identifier.
    pub id: u64,
    /// Title of the theme the article belongs to.
    pub theme: String,
    /// Article title.
    pub titre: String,
    /// Author display name.
    pub auteur: String,
    /// Last update timestamp.
    #[serde(default)]
    pub date: Option<NaiveDateTime>,
    /// Article body.
    pub contenu: String,
    /// Comments, oldest first.
    #[serde(default)]
    pub commentaires: Vec<Comment>,
}

/// A comment on an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Author display name.
    #[serde(default)]
    pub auteur: String,
    /// Comment body.
    pub contenu: String,
}

/// Body of `POST api/articles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArticle {
    /// Title of the target theme.
    pub theme: String,
    /// Article title.
    pub titre: String,
    /// Article body.
    pub contenu: String,
}

impl NewArticle {
    /// Creates a new article payload.
    #[must_use]
    pub fn new(
        theme: impl Into<String>,
        titre: impl Into<String>,
        contenu: impl Into<String>,
    ) -> Self {
        Self {
            theme: theme.into(),
            titre: titre.into(),
            contenu: contenu.into(),
        }
    }
}

/// Body of `POST api/articles/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    /// Comment body.
    pub contenu: String,
}

impl NewComment {
    /// Creates a new comment payload.
    #[must_use]
    pub fn new(contenu: impl Into<String>) -> Self {
        Self {
            contenu: contenu.into(),
        }
    }
}

/// Response of `GET api/articles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Articles {
    /// All articles.
    pub articles: Vec<Article>,
}

/// Identifier returned by creation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdResponse {
    /// Identifier of the created resource.
    pub id: u64,
}
