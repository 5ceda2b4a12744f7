//! News feed domain model and the RSS document it is read from.

use serde::Deserialize;

use crate::model::news::NewsItemDto;

#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: Option<String>,
    pub category: Vec<String>,
    pub image: Option<String>,
}

impl NewsItem {
    pub fn into_dto(self) -> NewsItemDto {
        NewsItemDto {
            title: self.title,
            link: self.link,
            description: self.description,
            pub_date: self.pub_date,
            category: self.category,
            image: self.image,
        }
    }
}

/// `<rss>` root element.
#[derive(Debug, Deserialize)]
pub struct RssDocument {
    pub channel: RssChannel,
}

#[derive(Debug, Deserialize)]
pub struct RssChannel {
    #[serde(rename = "item", default)]
    pub items: Vec<RssItem>,
}

#[derive(Debug, Deserialize)]
pub struct RssItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "pubDate")]
    pub pub_date: Option<String>,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(rename = "media:content", alias = "content")]
    pub media: Option<RssMedia>,
}

#[derive(Debug, Deserialize)]
pub struct RssMedia {
    #[serde(rename = "@url")]
    pub url: Option<String>,
}

impl RssItem {
    pub fn into_news_item(self) -> NewsItem {
        NewsItem {
            title: self.title.trim().to_string(),
            link: self.link.trim().to_string(),
            description: self.description.trim().to_string(),
            pub_date: self.pub_date.map(|date| date.trim().to_string()),
            category: self
                .category
                .into_iter()
                .map(|category| category.trim().to_string())
                .collect(),
            image: self.media.and_then(|media| media.url),
        }
    }
}
