// rootsift-check: Curate words from stdin and report each decision.
//
// Reads words from stdin (one per line), treats them as one lexicon and
// prints, in input order:
//   K: word            (kept)
//   R: word: reason    (removed)
//
// Words from --popular join the lexicon as popular roots but are only
// reported when they also appear on stdin.

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rootsift_cli::ConfigArgs;
use rootsift_core::Decision;
use rootsift_en::Lexicon;
use rootsift_en::lexicon::{dedupe_preserving_order, parse_word_list};

/// Check which words from stdin survive curation
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Popular word source used as extra roots
    #[arg(long)]
    popular: Option<PathBuf>,

    /// Treat every stdin word as popular
    #[arg(long)]
    all_popular: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> anyhow::Result<()> {
    rootsift_cli::init_tracing();
    let args = Args::parse();

    let config = args.config.load()?;
    let curator = args.config.curator(config)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("error reading stdin")?;
    let (words, _) = dedupe_preserving_order(parse_word_list(&input));

    let mut lexicon = Lexicon::new();
    if let Some(path) = &args.popular {
        lexicon.extend_from(rootsift_cli::read_word_file(path)?, true);
    }
    lexicon.extend_from(words.iter().map(String::as_str), args.all_popular);

    let outcome = curator.run(&lexicon);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for word in &words {
        match outcome.decision_for(word) {
            Some(Decision::Keep) => writeln!(out, "K: {word}")?,
            Some(Decision::Remove(reason)) => writeln!(out, "R: {word}: {reason}")?,
            None => {}
        }
    }
    out.flush()?;
    Ok(())
}
