//! HTTP client for fetching a user's timeline
//!
//! Paginates with a max_id cursor until the timeline is exhausted or the
//! cycle budget runs out, backing off exponentially on rate-limit responses.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::models::{PostRecord, TimelineConfig};

/// Initial delay after a rate-limit response
const BACKOFF_BASE_SECS: u64 = 1;
/// Cap on the backoff delay
const BACKOFF_MAX_SECS: u64 = 64;
/// Attempts per page before giving up on rate limiting
const MAX_ATTEMPTS: u32 = 6;

/// Timeline API client
#[derive(Debug, Clone)]
pub struct TimelineClient {
    client: Client,
    config: TimelineConfig,
}

impl TimelineClient {
    /// Create a client with default configuration
    pub fn new() -> Self {
        Self::with_config(TimelineConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: TimelineConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetch a user's posts, newest first.
    ///
    /// Requests the first page, then follows the max_id cursor (oldest seen
    /// id minus one, which also prevents duplicates) for up to
    /// `max_cycles` further pages. Stops early on an empty page.
    pub async fn fetch_timeline(&self, username: &str) -> Result<Vec<PostRecord>> {
        let mut posts = self.fetch_page(username, None).await?;

        let mut cursor = match posts.last() {
            Some(oldest) => oldest.id.saturating_sub(1),
            None => return Ok(posts),
        };

        for _ in 0..self.config.max_cycles {
            let page = self.fetch_page(username, Some(cursor)).await?;
            match page.last() {
                Some(oldest) => cursor = oldest.id.saturating_sub(1),
                None => break,
            }
            posts.extend(page);
            info!("{} posts downloaded so far", posts.len());
        }

        Ok(posts)
    }

    /// Fetch one timeline page, retrying with exponential backoff while the
    /// API reports rate limiting
    async fn fetch_page(&self, username: &str, max_id: Option<u64>) -> Result<Vec<PostRecord>> {
        let url = format!("{}/statuses/user_timeline.json", self.config.base_url);
        let mut delay_secs = BACKOFF_BASE_SECS;

        for attempt in 1..=MAX_ATTEMPTS {
            let mut request = self
                .client
                .get(&url)
                .query(&[
                    ("screen_name", username),
                    ("count", &self.config.page_size.to_string()),
                    ("tweet_mode", "extended"),
                ]);
            if let Some(max_id) = max_id {
                request = request.query(&[("max_id", &max_id.to_string())]);
            }
            if let Some(ref token) = self.config.bearer_token {
                request = request.bearer_auth(token);
            }

            let response = request.send().await?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                warn!(
                    attempt,
                    delay_secs, "Rate limited, backing off before retrying"
                );
                tokio::time::sleep(Duration::from_secs(delay_secs)).await;
                delay_secs = (delay_secs * 2).min(BACKOFF_MAX_SECS);
                continue;
            }

            if !response.status().is_success() {
                return Err(Error::Api(format!(
                    "timeline request failed with status {}",
                    response.status()
                )));
            }

            let items: Vec<TimelineItem> = response.json().await?;
            debug!(count = items.len(), ?max_id, "Fetched timeline page");
            return Ok(items.into_iter().map(PostRecord::from).collect());
        }

        Err(Error::Api(format!(
            "rate limited after {} attempts",
            MAX_ATTEMPTS
        )))
    }
}

impl Default for TimelineClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull just the text out of fetched records, preserving order
pub fn post_texts(records: &[PostRecord]) -> Vec<String> {
    records.iter().map(|r| r.text.clone()).collect()
}

// ============= API Response Types =============

#[derive(Debug, Deserialize)]
struct TimelineItem {
    id: u64,
    full_text: String,
    created_at: String,
    user: TimelineUser,
}

#[derive(Debug, Deserialize)]
struct TimelineUser {
    screen_name: String,
}

impl From<TimelineItem> for PostRecord {
    fn from(item: TimelineItem) -> Self {
        // Timeline timestamps look like "Wed Oct 10 20:19:24 +0000 2018"
        let created_at = DateTime::parse_from_str(&item.created_at, "%a %b %d %H:%M:%S %z %Y")
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_default();

        PostRecord {
            id: item.id,
            text: item.full_text,
            created_at,
            author: item.user.screen_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_texts_preserves_order() {
        let records = vec![
            PostRecord {
                id: 2,
                text: "newest".to_string(),
                created_at: Utc::now(),
                author: "a".to_string(),
            },
            PostRecord {
                id: 1,
                text: "older".to_string(),
                created_at: Utc::now(),
                author: "a".to_string(),
            },
        ];

        assert_eq!(post_texts(&records), vec!["newest", "older"]);
    }

    #[test]
    fn test_timeline_item_conversion() {
        let item = TimelineItem {
            id: 42,
            full_text: "hello".to_string(),
            created_at: "Wed Oct 10 20:19:24 +0000 2018".to_string(),
            user: TimelineUser {
                screen_name: "someone".to_string(),
            },
        };

        let record = PostRecord::from(item);
        assert_eq!(record.id, 42);
        assert_eq!(record.author, "someone");
        assert_eq!(record.created_at.format("%Y-%m-%d").to_string(), "2018-10-10");
    }

    #[test]
    fn test_bad_timestamp_falls_back_to_epoch() {
        let item = TimelineItem {
            id: 1,
            full_text: "x".to_string(),
            created_at: "not a date".to_string(),
            user: TimelineUser {
                screen_name: "someone".to_string(),
            },
        };

        let record = PostRecord::from(item);
        assert_eq!(record.created_at, DateTime::<Utc>::default());
    }
}
