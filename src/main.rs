//! CLI for social post sentiment and word-frequency analysis
//!
//! Usage:
//! ```bash
//! cargo run -- --help
//! cargo run -- fetch --user somename
//! cargo run -- words --snapshot data/texts.json --aware
//! cargo run -- report --snapshot data/texts.json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use social_sentiment::collector::{post_texts, snapshot, TimelineClient};
use social_sentiment::models::{Sentiment, TimelineConfig};
use social_sentiment::sentiment::{SentimentClassifier, SentimentStore};
use social_sentiment::text::{to_lower, tokenize_aware, tokenize_simple, top_n, word_freq, StopwordFilter};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "social_sentiment")]
#[command(version = "0.1.0")]
#[command(about = "Word frequency and sentiment analysis for social media posts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a user's posts and write snapshot files
    Fetch {
        /// Screen name to fetch
        #[arg(short, long)]
        user: String,

        /// Follow-up pages to request after the first
        #[arg(short, long, default_value = "15")]
        pages: usize,

        /// Directory for the snapshot files
        #[arg(short, long, default_value = "data")]
        out: PathBuf,
    },

    /// Print the most common words in a snapshot
    Words {
        /// Path to a texts snapshot (JSON list of strings)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Use the tweet-aware tokenizer instead of normalize-and-split
        #[arg(short, long)]
        aware: bool,

        /// Skip stopword filtering
        #[arg(long)]
        keep_stop: bool,

        /// Stopword list location
        #[arg(long, default_value = "stopwords.txt")]
        stopwords: PathBuf,

        /// Number of words to print
        #[arg(short, default_value = "10")]
        n: usize,
    },

    /// Sentiment summary and ranked views for a snapshot
    Report {
        /// Path to a texts snapshot (JSON list of strings)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Entries per ranked view
        #[arg(short, default_value = "5")]
        n: usize,
    },

    /// Run the whole pipeline on one text
    Demo {
        /// Text to analyze
        #[arg(short, long, default_value = "What a great day for the markets! @trader check http://example.com")]
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Fetch { user, pages, out } => {
            run_fetch(&user, pages, &out).await?;
        }
        Commands::Words {
            snapshot,
            aware,
            keep_stop,
            stopwords,
            n,
        } => {
            run_words(&snapshot, aware, keep_stop, &stopwords, n)?;
        }
        Commands::Report { snapshot, n } => {
            run_report(&snapshot, n)?;
        }
        Commands::Demo { text } => {
            run_demo(&text)?;
        }
    }

    Ok(())
}

async fn run_fetch(user: &str, pages: usize, out: &PathBuf) -> Result<()> {
    let config = TimelineConfig {
        max_cycles: pages,
        ..TimelineConfig::default()
    };
    let client = TimelineClient::with_config(config);

    info!("Fetching timeline for {}", user);
    let records = client.fetch_timeline(user).await?;
    println!("Fetched {} posts", records.len());

    std::fs::create_dir_all(out)?;
    let records_path = out.join(format!("{}_records.json", user));
    let texts_path = out.join(format!("{}_texts.json", user));

    snapshot::save_records(&records, &records_path)?;
    snapshot::save_texts(&post_texts(&records), &texts_path)?;

    println!("Wrote {}", records_path.display());
    println!("Wrote {}", texts_path.display());

    Ok(())
}

fn run_words(
    snapshot_path: &PathBuf,
    aware: bool,
    keep_stop: bool,
    stopwords: &PathBuf,
    n: usize,
) -> Result<()> {
    let texts = snapshot::load_texts(snapshot_path)?;
    info!("Loaded {} posts", texts.len());

    let words = if aware {
        tokenize_aware(&texts)
    } else {
        tokenize_simple(&texts)
    };
    let mut words = to_lower(&words);

    if !keep_stop {
        let filter = StopwordFilter::from_path(stopwords)?;
        words = filter.filter(&words);
    }

    let hist = word_freq(&words);
    println!("\nMost common words ({} tokenizer):", if aware { "tweet-aware" } else { "simple" });
    for (word, count) in top_n(&hist, n) {
        println!("{:>6}  {}", count, word);
    }

    Ok(())
}

fn run_report(snapshot_path: &PathBuf, n: usize) -> Result<()> {
    let texts = snapshot::load_texts(snapshot_path)?;
    info!("Loaded {} posts", texts.len());

    let classifier = SentimentClassifier::new();
    let store = SentimentStore::new(classifier.classify_all(&texts)?);

    println!("\n{}\n", store.summary());

    for label in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
        println!("Most recent {} posts:", label);
        for post in store.most_recent(label, n) {
            println!("  {}", post.text);
        }
        println!();
    }

    for label in [Sentiment::Positive, Sentiment::Negative] {
        println!("Most extreme {} posts:", label);
        for post in store.most_extreme(label, n)? {
            println!("  [{:+.2}] {}", post.polarity, post.text);
        }
        println!();
    }

    println!("Most objective posts:");
    for post in store.most_objective(n) {
        println!("  [{:.2}] {}", post.subjectivity, post.text);
    }

    println!("\nMost subjective posts:");
    for post in store.most_subjective(n) {
        println!("  [{:.2}] {}", post.subjectivity, post.text);
    }

    Ok(())
}

fn run_demo(text: &str) -> Result<()> {
    println!("\nInput: \"{}\"\n", text);

    let posts = vec![text.to_string()];

    println!("Normalized: \"{}\"", social_sentiment::normalize(text));
    println!("Simple tokens: {:?}", tokenize_simple(&posts));
    println!("Tweet-aware tokens: {:?}", tokenize_aware(&posts));

    let classifier = SentimentClassifier::new();
    let scored = classifier.classify(text)?;
    println!("\nSentiment: {}", scored.sentiment);
    println!("Polarity: {:+.3}", scored.polarity);
    println!("Subjectivity: {:.3}", scored.subjectivity);

    Ok(())
}
