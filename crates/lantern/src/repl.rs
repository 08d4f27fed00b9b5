use std::io::{self, Write};

use lantern_engine::browser::Browser;
use lantern_engine::classifier::Classifier;
use lantern_engine::dispatch::Dispatcher;
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run<C: Classifier, B: Browser>(
    dispatcher: &Dispatcher<C, B>,
) -> anyhow::Result<()> {
    println!("输入你的需求，例如「想听周杰伦的歌」或「打开知乎」。");
    println!("Type 'exit' or 'quit' to close.");

    let stdin = tokio::io::stdin();
    let mut reader = BufReader::new(stdin).lines();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = reader.next_line().await? else {
            break;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        // One request in flight at a time: the next prompt only appears
        // once this dispatch has finished.
        match dispatcher.dispatch(trimmed).await {
            Ok(outcome) => println!("{}", outcome),
            Err(e) => println!("❌ {}", e),
        }
    }

    println!("再见。");
    Ok(())
}
