use tracing::debug;

use crate::{client::Sanity, error::ClientError, models::News, queries};

impl Sanity {
    /// All published news articles, newest first. Unpublished documents are
    /// filtered out by the query itself.
    pub async fn published_news(&self) -> Result<Vec<News>, ClientError> {
        let news: Option<Vec<News>> = self.run_query(queries::NEWS_LIST, &[]).await?;
        let news = news.unwrap_or_default();
        debug!("Fetched {} published news articles", news.len());
        Ok(news)
    }

    /// The article whose slug matches exactly, with the full body and SEO
    /// object. `Ok(None)` when nothing matches; signaling not-found is the
    /// caller's concern.
    pub async fn news_by_slug<T: AsRef<str>>(&self, slug: T) -> Result<Option<News>, ClientError> {
        self.run_query(queries::NEWS_BY_SLUG, &[("slug", slug.as_ref())])
            .await
    }
}
