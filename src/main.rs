#![forbid(unsafe_code)]

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use name_crossword::{
    extract_first_names, render_word_list, words_from_lines, LayoutConfig, PlacementEngine, Word,
};

#[derive(Parser, Debug)]
#[command(name = "name-crossword", about = "Lay out names on a crossword-style grid")]
struct Args {
    /// File with one full name per line. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Grid width in columns.
    #[arg(long, default_value_t = 60)]
    width: usize,

    /// Grid height in rows.
    #[arg(long, default_value_t = 35)]
    height: usize,

    /// RNG seed. If omitted, a fresh seed is drawn and printed.
    #[arg(long)]
    seed: Option<u64>,

    /// Treat every line as a word instead of extracting a first name.
    #[arg(long)]
    raw: bool,

    /// Print the finished layout as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Also write a binary layout snapshot to this path.
    #[arg(long)]
    save: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    run(Args::parse())
}

fn run(args: Args) -> Result<()> {
    let text = read_input(args.input.as_ref())?;
    let words = if args.raw {
        words_from_lines(text.lines())
    } else {
        extract_first_names(text.lines())
    };
    info!("{} words to place", words.len());

    let mut config = LayoutConfig::new(args.width, args.height);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut engine = PlacementEngine::new(&config).context("invalid layout configuration")?;

    if !args.json {
        print_words(&words);
    }

    let report = engine.generate(words);
    let layout = engine.layout();

    if let Some(path) = &args.save {
        let bytes = layout.to_bytes()?;
        std::fs::write(path, bytes)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }

    print!("{}", layout.grid);
    println!();
    print!("{}", render_word_list(&layout.words));

    let dropped: Vec<_> = report.dropped().map(Word::as_str).collect();
    if !dropped.is_empty() {
        println!("\nDropped words ({}): {}", dropped.len(), dropped.join(", "));
    }
    println!("\nSeed: {}", report.seed);
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_words(words: &[Word]) {
    let mut sorted: Vec<_> = words.iter().map(Word::as_str).collect();
    sorted.sort_unstable();

    println!("Words extracted:");
    for word in sorted {
        println!("  {word}");
    }
    println!();
}
