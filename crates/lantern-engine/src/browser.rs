//! Default-browser launching, injected as a capability so the dispatcher
//! can be exercised without a GUI or a real browser.

use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::info;
use url::Url;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("refusing to open non-http(s) URL: {0}")]
    UnsupportedUrl(String),
    #[error("failed to launch system opener: {0}")]
    Spawn(#[from] io::Error),
}

/// Side-effect seam for "open this URL for the user".
pub trait Browser: Send + Sync {
    fn open(&self, url: &str) -> Result<(), BrowserError>;
}

/// Opens URLs through the platform's default-browser mechanism.
///
/// Only absolute http(s) URLs are accepted; everything else is rejected
/// before any process is spawned.
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        validate(url)?;
        let mut command = opener_command(url);
        command.stdout(Stdio::null()).stderr(Stdio::null());
        command.spawn()?;
        info!(%url, "opened in default browser");
        Ok(())
    }
}

fn validate(url: &str) -> Result<(), BrowserError> {
    let parsed = Url::parse(url).map_err(|_| BrowserError::UnsupportedUrl(url.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(BrowserError::UnsupportedUrl(url.to_string()));
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_schemes_before_spawning() {
        let browser = SystemBrowser;
        assert!(matches!(
            browser.open("ftp://example.com"),
            Err(BrowserError::UnsupportedUrl(_))
        ));
        assert!(matches!(
            browser.open("javascript:alert(1)"),
            Err(BrowserError::UnsupportedUrl(_))
        ));
    }

    #[test]
    fn rejects_relative_and_garbage_input() {
        let browser = SystemBrowser;
        assert!(browser.open("not a url").is_err());
        assert!(browser.open("example.com/path").is_err());
    }

    #[test]
    fn accepts_absolute_http_urls() {
        assert!(validate("https://www.zhihu.com/").is_ok());
        assert!(validate("http://example.com").is_ok());
    }
}
