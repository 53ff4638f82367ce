// rootsift-dedupe: Remove duplicate words from a word-list file.
//
// Keeps the first occurrence of each word and rewrites the file in place
// (or to --output). Words are normalized the same way the curation tools
// read them, so "Apple" and "apple" count as one word.
//
// Prints the number of duplicates removed and lists each one.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use rootsift_en::lexicon::dedupe_preserving_order;

/// Remove duplicate words from a word list, keeping first occurrences
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Word-list file to deduplicate
    path: PathBuf,

    /// Write the result here instead of rewriting the input
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report duplicates without writing anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    rootsift_cli::init_tracing();
    let args = Args::parse();

    let words = rootsift_cli::read_word_file(&args.path)?;
    let total = words.len();
    let (unique, duplicates) = dedupe_preserving_order(words);
    tracing::info!(total, unique = unique.len(), "deduplicated word list");

    if !args.dry_run {
        let target = args.output.as_ref().unwrap_or(&args.path);
        rootsift_cli::write_atomically(target, |out| {
            for word in &unique {
                writeln!(out, "{word}")?;
            }
            Ok(())
        })?;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if duplicates.is_empty() {
        writeln!(out, "No duplicates found")?;
    } else {
        writeln!(out, "Removed {} duplicate words:", duplicates.len())?;
        for word in &duplicates {
            writeln!(out, "- {word}")?;
        }
    }
    out.flush()?;
    Ok(())
}
