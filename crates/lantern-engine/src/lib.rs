//! Intent-resolution pipeline: free text in, an opened browser tab out.
//!
//! The pipeline is stateless and synchronous from the caller's point of
//! view: classify → extract → dispatch. Presentation (REPL, widget, tray)
//! lives outside this crate and only sees the outcome string.

pub mod browser;
pub mod classifier;
pub mod config;
pub mod dispatch;
pub mod extract;

pub use browser::{Browser, BrowserError, SystemBrowser};
pub use classifier::{Classifier, ClassifierError, RemoteClassifier};
pub use dispatch::{DispatchError, Dispatcher};
pub use extract::{Classification, extract};
