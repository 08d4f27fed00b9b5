use std::path::PathBuf;

use clap::Parser;
use lantern_engine::browser::{Browser, BrowserError, SystemBrowser};
use lantern_engine::classifier::{Classifier, RemoteClassifier};
use lantern_engine::config::ConfigLoader;
use lantern_engine::dispatch::Dispatcher;

mod repl;

#[derive(Parser)]
#[command(name = "lantern", version, about = "自然语言启动器：说出需求，打开网页")]
struct Args {
    /// Free-text request to resolve and open; interactive mode if omitted
    text: Vec<String>,

    /// Print the resolved URL instead of opening a browser
    #[arg(long)]
    dry_run: bool,

    /// Config file (default: ./lantern.yaml, then ~/.lantern/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Stand-in for the system browser in --dry-run mode.
struct PrintBrowser;

impl Browser for PrintBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        println!("{}", url);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging goes to stderr so stdout stays clean for outcome lines.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from(path).await?,
        None => ConfigLoader::load_default().await?,
    };
    ConfigLoader::resolve_api_key(&mut config)?;

    let classifier = RemoteClassifier::new(config.classifier)?;

    if args.dry_run {
        run(Dispatcher::new(classifier, PrintBrowser), args.text).await
    } else {
        run(Dispatcher::new(classifier, SystemBrowser), args.text).await
    }
}

async fn run<C: Classifier, B: Browser>(
    dispatcher: Dispatcher<C, B>,
    text: Vec<String>,
) -> anyhow::Result<()> {
    if text.is_empty() {
        return repl::run(&dispatcher).await;
    }

    let line = text.join(" ");
    let outcome = dispatcher.dispatch(&line).await?;
    println!("{}", outcome);
    Ok(())
}
