use anyhow::Result;
use log::info;
use std::io::{self, BufRead, Write};
use yt_dataset_fetcher::config::{init_logger, load_environment};
use yt_dataset_fetcher::export::save_to_csv;
use yt_dataset_fetcher::pipeline::build_dataset;
use yt_dataset_fetcher::{Config, FixedDelay, YouTubeClient};

#[tokio::main]
async fn main() -> Result<()> {
    load_environment();
    init_logger();

    let config = Config::from_env()?;
    let client = YouTubeClient::new(config.api_key.clone(), &config.api_base_url)?;
    let pacer = FixedDelay(config.request_delay);

    let genre = prompt("Enter a genre: ")?;
    info!("Building dataset for {genre:?}, up to {} videos", config.max_results);

    let rows = build_dataset(&client, &pacer, &genre, config.max_results).await;

    println!("Saving data to CSV...");
    save_to_csv(&config.output_file, &rows)?;
    println!("Data saved to {}", config.output_file.display());
    println!("Task completed!");
    Ok(())
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
