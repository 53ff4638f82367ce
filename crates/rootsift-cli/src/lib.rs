// rootsift-cli: shared utilities for the command-line tools.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use rootsift_en::lexicon::parse_word_list;
use rootsift_en::{CurationConfig, Curator, DenyList, Preset};
use tempfile::NamedTempFile;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV: &str = "ROOTSIFT_CONFIG";

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "rootsift_en=info,rootsift_cli=info";

/// Install the global tracing subscriber.
///
/// Logs go to stderr; stdout is reserved for tool output.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration flags shared by every tool that runs the engine.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// TOML config file (preset plus overrides)
    #[arg(long, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Rule preset used when no config file is given: full or basic
    #[arg(long)]
    pub preset: Option<Preset>,

    /// Override the minimum word length
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Override the maximum root length gap for the shared-prefix scan
    #[arg(long)]
    pub max_delta: Option<usize>,

    /// Profanity deny-list file, one term per line (replaces the built-in list)
    #[arg(long)]
    pub profanity_list: Option<PathBuf>,
}

impl ConfigArgs {
    /// Resolve the effective configuration: file or preset, then flag
    /// overrides.
    pub fn load(&self) -> anyhow::Result<CurationConfig> {
        if self.config.is_some() && self.preset.is_some() {
            tracing::warn!("--preset is ignored when a config file is given");
        }
        let mut config = load_config(self.config.as_deref(), self.preset.unwrap_or_default())?;
        if let Some(min) = self.min_length {
            config.min_word_length = min;
        }
        if let Some(delta) = self.max_delta {
            config.max_root_delta = delta;
        }
        config.validate()?;
        Ok(config)
    }

    /// Build a curator for `config`, wiring in the deny-list file if one
    /// was given.
    pub fn curator(&self, config: CurationConfig) -> anyhow::Result<Curator> {
        let mut curator = Curator::new(config)?;
        if let Some(path) = &self.profanity_list {
            let list = DenyList::from_file(path)
                .with_context(|| format!("failed to read deny-list {}", path.display()))?;
            tracing::info!(terms = list.len(), path = %path.display(), "loaded deny-list");
            curator = curator.with_profanity_filter(Box::new(list));
        }
        Ok(curator)
    }
}

/// Load a configuration from `path`, or fall back to `preset`.
pub fn load_config(path: Option<&Path>, preset: Preset) -> anyhow::Result<CurationConfig> {
    match path {
        Some(path) => {
            let config = CurationConfig::from_file(path)?;
            tracing::info!(path = %path.display(), "loaded config file");
            Ok(config)
        }
        None => Ok(CurationConfig::preset(preset)),
    }
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

/// Read a word-source file and return its normalized tokens.
pub fn read_word_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    Ok(parse_word_list(&content))
}

/// Write `path` through a temporary file in the same directory and rename
/// it into place, so a failed run never leaves a partial file.
pub fn write_atomically<F>(path: &Path, write: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        write(&mut out).with_context(|| format!("failed to write {}", path.display()))?;
        out.flush()
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    tmp.persist(path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
