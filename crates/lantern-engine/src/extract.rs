//! Best-effort extraction of a classification from raw model output.
//!
//! The model is instructed to emit only a JSON object, but is not trusted
//! to honor that: the raw text may carry leading/trailing prose. Anything
//! that cannot be understood degrades to `unknown` — the dispatcher always
//! has a fallback path, so extraction never errors.

use serde::Deserialize;

/// Outcome of classifying a single input. Short-lived; each request
/// produces an independent value and nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub intent: String,
    pub url: String,
}

impl Classification {
    /// Sentinel returned whenever the response cannot be understood.
    pub fn unknown() -> Self {
        Self {
            intent: "unknown".to_string(),
            url: String::new(),
        }
    }
}

#[derive(Deserialize)]
struct RawClassification {
    intent: Option<String>,
    url: Option<String>,
}

/// Pull the `{intent, url}` object out of whatever the model returned.
///
/// The candidate span is the greedy first-`{`-to-last-`}` substring, not a
/// balanced-brace scan. A response carrying two separate JSON objects
/// therefore merges into one invalid span and degrades to `unknown`.
///
/// A non-empty url without an `http` prefix gets `https://` prepended.
pub fn extract(raw: &str) -> Classification {
    let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) else {
        return Classification::unknown();
    };
    if end < start {
        return Classification::unknown();
    }

    let parsed: RawClassification = match serde_json::from_str(&raw[start..=end]) {
        Ok(parsed) => parsed,
        Err(_) => return Classification::unknown(),
    };

    let intent = parsed.intent.unwrap_or_else(|| "unknown".to_string());
    let mut url = parsed.url.unwrap_or_default();
    if !url.is_empty() && !url.starts_with("http") {
        url = format!("https://{}", url);
    }

    Classification { intent, url }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_object() {
        let got = extract(r#"{"intent":"watch_video","url":"https://example.com/v"}"#);
        assert_eq!(got.intent, "watch_video");
        assert_eq!(got.url, "https://example.com/v");
    }

    #[test]
    fn surrounding_prose_is_ignored() {
        let got = extract(r#"noise {"intent":"open_website","url":"zhihu.com"} noise"#);
        assert_eq!(got.intent, "open_website");
        assert_eq!(got.url, "https://zhihu.com");
    }

    #[test]
    fn no_braces_degrades_to_unknown() {
        assert_eq!(extract("plain prose, no json at all"), Classification::unknown());
        assert_eq!(extract(""), Classification::unknown());
    }

    #[test]
    fn malformed_json_degrades_to_unknown() {
        assert_eq!(
            extract(r#"{"intent":"watch_video","url":"x.com",}"#),
            Classification::unknown()
        );
        assert_eq!(extract("{not json}"), Classification::unknown());
    }

    #[test]
    fn reversed_braces_degrade_to_unknown() {
        assert_eq!(extract("} mirror {"), Classification::unknown());
    }

    #[test]
    fn two_objects_merge_into_invalid_span() {
        // Greedy span swallows both objects and fails to parse.
        let raw = r#"{"intent":"a","url":""} {"intent":"b","url":""}"#;
        assert_eq!(extract(raw), Classification::unknown());
    }

    #[test]
    fn missing_fields_get_defaults() {
        let got = extract(r#"{"url":"https://example.com"}"#);
        assert_eq!(got.intent, "unknown");
        assert_eq!(got.url, "https://example.com");

        let got = extract(r#"{"intent":"search_web"}"#);
        assert_eq!(got.intent, "search_web");
        assert_eq!(got.url, "");
    }

    #[test]
    fn existing_scheme_is_kept() {
        let got = extract(r#"{"intent":"open_website","url":"http://example.com"}"#);
        assert_eq!(got.url, "http://example.com");
    }

    #[test]
    fn cjk_prose_around_the_object() {
        let got = extract("好的，结果如下：{\"intent\":\"listen_music\",\"url\":\"music.163.com\"}谢谢");
        assert_eq!(got.intent, "listen_music");
        assert_eq!(got.url, "https://music.163.com");
    }

    #[test]
    fn extraction_is_idempotent() {
        let raw = r#"prefix {"intent":"open_website","url":"zhihu.com"} suffix"#;
        assert_eq!(extract(raw), extract(raw));
    }
}
