use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NewsItemDto {
    pub title: String,
    pub link: String,
    pub description: String,
    pub pub_date: Option<String>,
    pub category: Vec<String>,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NewsFeedDto {
    pub items: Vec<NewsItemDto>,
}
