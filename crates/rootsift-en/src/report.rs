//! Output formatting for curated lists and removal logs.
//!
//! Writers take any [`Write`] so callers decide where the text goes; the
//! CLI writes to a temporary file and renames it into place once the run
//! has finished.

use std::io::{self, Write};

use crate::curation::{CurationStats, RemovalLog};
use crate::derivation::AcceptedSet;

/// Header written at the top of a removal log.
pub const REMOVAL_LOG_HEADER: &str = "REMOVED WORDS AND REASONS:\n=========================\n\n";

/// Write accepted words sorted, one per line.
pub fn write_word_list<W: Write + ?Sized>(out: &mut W, accepted: &AcceptedSet) -> io::Result<()> {
    for word in accepted.sorted() {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

/// Write the removal log as `word: reason` lines sorted by word.
pub fn write_removal_log<W: Write + ?Sized>(out: &mut W, removed: &RemovalLog) -> io::Result<()> {
    out.write_all(REMOVAL_LOG_HEADER.as_bytes())?;
    for (word, reason) in removed {
        writeln!(out, "{word}: {reason}")?;
    }
    Ok(())
}

/// Write a human-readable summary of a run.
pub fn write_summary<W: Write + ?Sized>(out: &mut W, stats: &CurationStats) -> io::Result<()> {
    writeln!(out, "Total words processed: {}", stats.input_words)?;
    writeln!(out, "Popular words:         {}", stats.popular_words)?;
    writeln!(out, "Kept words:            {}", stats.kept)?;
    writeln!(out, "Removed words:         {}", stats.removed)?;
    for (category, count) in &stats.removed_by_category {
        writeln!(out, "  {category:?}: {count}")?;
    }
    if !stats.kept_length_distribution.is_empty() {
        writeln!(out)?;
        writeln!(out, "Word length distribution of final list:")?;
        for (length, count) in &stats.kept_length_distribution {
            writeln!(out, "  {length} letters: {count} words")?;
        }
    }
    Ok(())
}
