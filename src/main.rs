use std::time::Instant;

use structopt::StructOpt;
use tracing::Level;
use word_trie::driver::{demo, dump, scaling, ScalingConfig};
use word_trie::{Result, Trie};

/// Insert, search and delete lowercase words in a prefix trie.
#[derive(StructOpt)]
struct Cli {
    /// Log more; repeat for more detail
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Run the reference insert/search/delete scenario
    Demo,
    /// Time operations on ever longer words of one repeated letter
    Scale {
        #[structopt(long, default_value = "10")]
        steps: usize,
        #[structopt(long, default_value = "1000")]
        step_len: usize,
        #[structopt(long, default_value = "a")]
        letter: char,
    },
    /// Print the raw node structure after inserting and deleting words
    Dump {
        words: Vec<String>,
        #[structopt(short, long = "delete")]
        deletions: Vec<String>,
    },
    /// Insert words, then report whether each query is stored
    Check {
        words: Vec<String>,
        #[structopt(short, long = "query", required = true)]
        queries: Vec<String>,
    },
}

fn main() {
    let args = Cli::from_args();
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    if let Err(e) = run(args.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Demo => {
            for (word, found) in demo()? {
                println!("{} {}", word, found);
            }
        }
        Command::Scale { steps, step_len, letter } => {
            let config = ScalingConfig::builder().steps(steps).step_len(step_len).letter(letter).build();
            let start = Instant::now();
            for sample in scaling(&config)? {
                println!("{:>8} insert {:>10?} search {:>10?} delete {:>10?} found {}",
                         sample.len, sample.insert, sample.search, sample.delete, sample.found);
            }
            println!("total {}s", start.elapsed().as_millis() as f64 / 1000.0);
        }
        Command::Dump { words, deletions } => {
            println!("{}", dump(words.iter().map(String::as_str), deletions.iter().map(String::as_str))?);
        }
        Command::Check { words, queries } => {
            let mut trie = Trie::new();
            trie.insert_all(words.iter().map(String::as_str))?;
            for query in &queries {
                println!("{} {}", query, trie.search(query)?);
            }
        }
    }
    Ok(())
}
