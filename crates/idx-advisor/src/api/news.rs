//! Google News RSS client for IDX stock headlines

use crate::error::{AdvisorError, Result};
use crate::ticker::strip_suffix;
use reqwest::Client;
use rss::Channel;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One news headline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
}

/// Client for the Google News RSS search feed
pub struct NewsClient {
    client: Client,
}

impl NewsClient {
    /// Create a new news client with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Fetch up to `limit` headlines for a ticker, in feed order.
    ///
    /// The exchange suffix is stripped so the query matches how the press
    /// writes the code ("BBNI", not "BBNI.JK").
    pub async fn headlines(&self, ticker: &str, limit: usize) -> Result<Vec<NewsItem>> {
        let url = search_url(ticker);

        let bytes = self.client.get(&url).send().await?.bytes().await?;
        let channel = Channel::read_from(&bytes[..])
            .map_err(|e| AdvisorError::Other(format!("Failed to parse news feed: {e}")))?;

        Ok(items_from_channel(&channel, limit))
    }
}

/// Build the search-feed URL for a ticker
fn search_url(ticker: &str) -> String {
    let query = strip_suffix(ticker);
    format!(
        "https://news.google.com/rss/search?q={query}+saham+OR+stock&hl=id&gl=ID&ceid=ID:id"
    )
}

/// Map parsed channel items to headlines, truncated to `limit`.
///
/// Missing titles or links become empty strings rather than dropping or
/// failing the entry.
fn items_from_channel(channel: &Channel, limit: usize) -> Vec<NewsItem> {
    channel
        .items()
        .iter()
        .take(limit)
        .map(|item| NewsItem {
            title: item.title().unwrap_or_default().to_string(),
            link: item.link().unwrap_or_default().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_with_items(n: usize) -> Channel {
        let mut items = String::new();
        for i in 0..n {
            items.push_str(&format!(
                "<item><title>Headline {i}</title><link>https://example.com/{i}</link></item>"
            ));
        }
        let xml = format!(
            "<rss version=\"2.0\"><channel><title>t</title>\
             <link>https://example.com</link><description>d</description>{items}</channel></rss>"
        );
        Channel::read_from(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_search_url_strips_suffix() {
        let url = search_url("BBNI.JK");
        assert!(url.contains("q=BBNI+saham+OR+stock"));
        assert!(!url.contains(".JK"));
        assert!(url.contains("ceid=ID:id"));
    }

    #[test]
    fn test_truncates_to_limit_in_feed_order() {
        let channel = feed_with_items(12);
        let items = items_from_channel(&channel, 8);

        assert_eq!(items.len(), 8);
        assert_eq!(items[0].title, "Headline 0");
        assert_eq!(items[7].title, "Headline 7");
        assert_eq!(items[7].link, "https://example.com/7");
    }

    #[test]
    fn test_short_feed_returns_all() {
        let channel = feed_with_items(3);
        assert_eq!(items_from_channel(&channel, 8).len(), 3);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let xml = "<rss version=\"2.0\"><channel><title>t</title>\
                   <link>https://example.com</link><description>d</description>\
                   <item><link>https://example.com/only-link</link></item>\
                   <item><title>Only title</title></item>\
                   </channel></rss>";
        let channel = Channel::read_from(xml.as_bytes()).unwrap();
        let items = items_from_channel(&channel, 8);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "");
        assert_eq!(items[0].link, "https://example.com/only-link");
        assert_eq!(items[1].title, "Only title");
        assert_eq!(items[1].link, "");
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_headlines_live() {
        let client = NewsClient::new(Duration::from_secs(30)).unwrap();
        let items = client.headlines("BBNI.JK", 8).await.unwrap();
        assert!(items.len() <= 8);
    }
}
