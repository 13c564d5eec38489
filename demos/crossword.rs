use std::{fs, path::PathBuf};

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crossfill::{
    examples::crossword::{Crossword, Slot},
    solver::stats::render_stats_table,
};

/// Fill a crossword structure from a word list.
#[derive(Parser)]
struct Args {
    /// Path to the structure grid; '_' marks a fillable cell.
    structure: PathBuf,

    /// Path to the word list, one word per line.
    words: PathBuf,

    /// Emit the fill as JSON instead of grid text.
    #[arg(long)]
    json: bool,

    /// Print search statistics after solving.
    #[arg(long)]
    stats: bool,
}

#[derive(Serialize)]
struct FilledSlot {
    #[serde(flatten)]
    slot: Slot,
    word: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let structure = fs::read_to_string(&args.structure)?;
    let words = fs::read_to_string(&args.words)?;
    let crossword = Crossword::parse(&structure, words.lines())?;

    let (fill, stats) = crossword.fill()?;
    match fill {
        Some(fill) if args.json => {
            let mut entries: Vec<FilledSlot> = fill
                .into_iter()
                .map(|(slot, word)| FilledSlot { slot, word })
                .collect();
            entries.sort_by_key(|entry| (entry.slot.row, entry.slot.col, entry.word.clone()));
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Some(fill) => print!("{}", crossword.render(&fill)),
        None => println!("No solution."),
    }

    if args.stats {
        println!("{}", render_stats_table(&stats));
    }
    Ok(())
}
