// rootsift-curate: Build a curated word list from word sources.
//
// Merges a popular word source and a general word source into one
// lexicon, removes invalid words and derivatives of shorter accepted
// words, and writes:
//   - the curated list, sorted, one word per line
//   - a removal log with a reason for every rejected word
//
// A summary (or, with --json, the run statistics as JSON) is printed on
// stdout. Logging goes to stderr and is controlled by RUST_LOG.
//
// The curated list does not record popularity. To re-curate it, pass it
// as --words together with the original --popular source; otherwise
// popular words lose their override and may be removed as derivatives.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use rootsift_cli::ConfigArgs;
use rootsift_en::{Lexicon, report};

/// Curate a game word list by removing derived word forms
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Popular word source; these words are never removed as derivatives
    #[arg(long)]
    popular: Option<PathBuf>,

    /// General word source
    #[arg(long)]
    words: Option<PathBuf>,

    /// Where to write the curated list
    #[arg(short, long, default_value = "curated_words.txt")]
    output: PathBuf,

    /// Where to write the removal log
    #[arg(long, default_value = "removed_words.txt")]
    removed_log: PathBuf,

    /// Print run statistics as JSON instead of the text summary
    #[arg(long)]
    json: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> anyhow::Result<()> {
    rootsift_cli::init_tracing();
    let args = Args::parse();

    let config = args.config.load()?;
    if args.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    if args.popular.is_none() && args.words.is_none() {
        anyhow::bail!("nothing to curate: pass --popular and/or --words");
    }

    let mut lexicon = Lexicon::new();
    if let Some(path) = &args.popular {
        let words = rootsift_cli::read_word_file(path)?;
        tracing::info!(words = words.len(), path = %path.display(), "read popular source");
        lexicon.extend_from(words, true);
    }
    if let Some(path) = &args.words {
        let words = rootsift_cli::read_word_file(path)?;
        tracing::info!(words = words.len(), path = %path.display(), "read general source");
        lexicon.extend_from(words, false);
    }

    let curator = args.config.curator(config)?;
    let outcome = curator.run(&lexicon);

    rootsift_cli::write_atomically(&args.output, |out| {
        report::write_word_list(out, &outcome.accepted)
    })?;
    rootsift_cli::write_atomically(&args.removed_log, |out| {
        report::write_removal_log(out, &outcome.removed)
    })?;
    tracing::info!(
        output = %args.output.display(),
        removed_log = %args.removed_log.display(),
        "wrote results"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &outcome.stats)?;
        writeln!(out)?;
    } else {
        report::write_summary(&mut out, &outcome.stats)?;
    }
    Ok(())
}
