//! News feed: one-shot fetch of the game's RSS feed.

use crate::server::{
    error::AppError,
    model::news::{NewsItem, RssDocument},
};

pub struct NewsService<'a> {
    http_client: &'a reqwest::Client,
    feed_url: &'a str,
}

impl<'a> NewsService<'a> {
    pub fn new(http_client: &'a reqwest::Client, feed_url: &'a str) -> Self {
        Self {
            http_client,
            feed_url,
        }
    }

    /// Fetches the feed and maps its items.
    ///
    /// Any failure, whether the request, a non-success status or the document, is
    /// reported as a single upstream error. Nothing is retried.
    ///
    /// # Returns
    /// - `Ok(Vec<NewsItem>)` - Items in feed order
    /// - `Err(AppError::Upstream)` - The feed could not be fetched or parsed
    pub async fn fetch(&self) -> Result<Vec<NewsItem>, AppError> {
        let body = self
            .http_client
            .get(self.feed_url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AppError::Upstream(format!("Failed to fetch news feed: {}", e)))?
            .text()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to read news feed: {}", e)))?;

        parse_feed(&body)
    }
}

/// Parses an RSS document into news items.
///
/// `image` is taken from the item's `media:content` `url` attribute.
pub fn parse_feed(xml: &str) -> Result<Vec<NewsItem>, AppError> {
    let document: RssDocument = quick_xml::de::from_str(xml)
        .map_err(|e| AppError::Upstream(format!("Failed to parse news feed: {}", e)))?;

    Ok(document
        .channel
        .items
        .into_iter()
        .map(|item| item.into_news_item())
        .collect())
}
