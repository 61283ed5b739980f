mod news;
mod taxonomy;

use crate::{
    client::Sanity,
    error::ClientError,
    models::{Expertise, Industry, News, Tag},
};

/// The read operations a page render needs from the content platform.
/// Narrow on purpose: handlers depend on this trait, so the concrete
/// transport can be swapped for an in-memory source in tests.
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    async fn published_news(&self) -> Result<Vec<News>, ClientError>;
    async fn news_by_slug(&self, slug: &str) -> Result<Option<News>, ClientError>;
    async fn industries(&self) -> Result<Vec<Industry>, ClientError>;
    async fn expertises(&self) -> Result<Vec<Expertise>, ClientError>;
    async fn tags(&self) -> Result<Vec<Tag>, ClientError>;
}

#[async_trait::async_trait]
impl ContentSource for Sanity {
    async fn published_news(&self) -> Result<Vec<News>, ClientError> {
        Sanity::published_news(self).await
    }

    async fn news_by_slug(&self, slug: &str) -> Result<Option<News>, ClientError> {
        Sanity::news_by_slug(self, slug).await
    }

    async fn industries(&self) -> Result<Vec<Industry>, ClientError> {
        Sanity::industries(self).await
    }

    async fn expertises(&self) -> Result<Vec<Expertise>, ClientError> {
        Sanity::expertises(self).await
    }

    async fn tags(&self) -> Result<Vec<Tag>, ClientError> {
        Sanity::tags(self).await
    }
}
