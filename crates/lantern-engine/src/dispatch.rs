//! The fallback ladder: model URL first, then intent-keyed defaults, then
//! a plain web search. Given any input there is always a final rung.

use thiserror::Error;
use tracing::debug;
use url::form_urlencoded;

use crate::browser::{Browser, BrowserError};
use crate::classifier::{Classifier, ClassifierError};
use crate::extract::extract;

const VIDEO_SEARCH: &str = "https://search.bilibili.com/all";
// Query lives inside the hash route, so this base keeps its fragment.
const MUSIC_SEARCH: &str = "https://music.163.com/#/search/m/";
const WEB_SEARCH: &str = "https://cn.bing.com/search";

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("classification failed: {0}")]
    Classifier(#[from] ClassifierError),
    #[error("could not open browser: {0}")]
    Browser(#[from] BrowserError),
}

/// Turns free text into an opened URL and a human-readable outcome line.
///
/// Stateless; safe to share and call repeatedly. Keeping at most one
/// request in flight is the caller's concern.
pub struct Dispatcher<C, B> {
    classifier: C,
    browser: B,
}

impl<C: Classifier, B: Browser> Dispatcher<C, B> {
    pub fn new(classifier: C, browser: B) -> Self {
        Self { classifier, browser }
    }

    pub async fn dispatch(&self, text: &str) -> Result<String, DispatchError> {
        let raw = self.classifier.classify(text).await?;
        let classification = extract(&raw);
        debug!(intent = %classification.intent, url = %classification.url, "classified");

        // A concrete URL from the model wins over intent handling.
        if !classification.url.is_empty() {
            self.browser.open(&classification.url)?;
            return Ok(format!("✅ 已打开: {}", classification.url));
        }

        match classification.intent.to_lowercase().as_str() {
            "watch_video" => {
                let url = search_url(VIDEO_SEARCH, &[("keyword", text)]);
                self.browser.open(&url)?;
                Ok(format!("🎬 已为你在哔哩哔哩搜索: {}", text))
            }
            "listen_music" => {
                let url = search_url(MUSIC_SEARCH, &[("s", text), ("type", "1")]);
                self.browser.open(&url)?;
                Ok(format!("🎵 已为你在网易云搜索: {}", text))
            }
            "open_website" if text.contains('.') => {
                let url = if text.starts_with("http") {
                    text.to_string()
                } else {
                    format!("https://{}", text)
                };
                self.browser.open(&url)?;
                Ok(format!("🌐 已尝试打开: {}", url))
            }
            // unknown, search_web, open_website without a dot, anything else
            _ => {
                let url = search_url(WEB_SEARCH, &[("q", text)]);
                self.browser.open(&url)?;
                Ok(format!("🔍 已为你搜索: {}", text))
            }
        }
    }
}

fn search_url(base: &str, pairs: &[(&str, &str)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        query.append_pair(key, value);
    }
    format!("{}?{}", base, query.finish())
}
