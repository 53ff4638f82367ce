// Curation configuration: rule tables, thresholds and toggles.
//
// One engine serves both the lightweight and the full curation passes;
// the difference between them lives entirely in this struct. Values come
// from a preset and may be overridden from a TOML file.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =========================================================================
// Default tables
// =========================================================================

/// Suffixes tried by the full preset, in reporting order.
pub const DEFAULT_SUFFIXES: &[&str] = &[
    "ed", "ing", "ion", "s", "es", "ned", "er", "est", "ly", "ment", "ness", "ful", "less",
    "able", "ible", "ial", "al", "ic", "ive", "ous", "ical", "ize", "ise", "ism", "ity", "ian",
    "ology", "el", "ary", "ation", "ence", "ance", "ship", "hood", "ways",
];

/// Prefixes tried by the full preset.
pub const DEFAULT_PREFIXES: &[&str] = &[
    "un", "re", "dis", "over", "under", "pre", "post", "non", "anti", "sub", "super", "inter",
    "intra", "co", "de", "en", "em", "ex", "in", "im", "micro", "macro", "mega", "mini", "mono",
    "multi", "neo", "out", "para", "poly", "pseudo", "semi", "tri", "ultra",
];

/// Letter pairs that disqualify a word wherever they appear.
pub const DEFAULT_UNUSUAL_COMBINATIONS: &[&str] = &[
    "uu", "ii", "jj", "kk", "qq", "vv", "ww", "xx", "yy", "zz", "fq", "jx", "qj", "qx", "qz",
    "vj", "vq", "vx", "wx", "xj", "zx",
];

/// Letter pairs that disqualify a word when it ends with them.
pub const DEFAULT_UNCOMMON_ENDINGS: &[&str] = &[
    "dg", "fk", "gk", "hk", "jk", "mk", "nk", "pk", "rk", "sk", "tk", "vk", "wk", "xk", "yk",
    "zk", "jz", "qz", "vz", "wz",
];

pub const DEFAULT_MIN_WORD_LENGTH: usize = 5;
pub const DEFAULT_MAX_ROOT_DELTA: usize = 4;

// =========================================================================
// Errors
// =========================================================================

/// Error type for loading and validating a [`CurationConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid entry {entry:?} in {table}: entries must be non-empty lowercase a-z")]
    InvalidEntry { table: &'static str, entry: String },

    #[error("max_root_delta must be at least 1 while shared_prefix_scan is enabled")]
    ZeroRootDelta,

    #[error("unknown preset {0:?} (expected \"full\" or \"basic\")")]
    UnknownPreset(String),
}

// =========================================================================
// Presets
// =========================================================================

/// Named starting points for a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Every rule table populated; shared-prefix scan enabled.
    #[default]
    Full,
    /// Minimum length 1, last-letter truncation and "-ing" only.
    Basic,
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(Preset::Full),
            "basic" => Ok(Preset::Basic),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Full => f.write_str("full"),
            Preset::Basic => f.write_str("basic"),
        }
    }
}

// =========================================================================
// CurationConfig
// =========================================================================

/// Options controlling one curation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurationConfig {
    /// Words with fewer characters are rejected as too short.
    pub min_word_length: usize,
    /// Largest length gap between a word and a root found by the scan.
    pub max_root_delta: usize,
    /// Suffix table, tried in order.
    pub suffixes: Vec<String>,
    /// Prefix table, tried in order.
    pub prefixes: Vec<String>,
    /// Substrings that make a word invalid.
    pub unusual_combinations: Vec<String>,
    /// Endings that make a word invalid.
    pub uncommon_endings: Vec<String>,
    /// Reject a word when dropping its last letter gives an accepted word.
    pub strip_last_letter: bool,
    /// Run the shared-prefix scan after the affix rules.
    pub shared_prefix_scan: bool,
    /// Popular words skip the profanity and validity checks.
    pub popular_bypasses_filters: bool,
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl CurationConfig {
    /// The complete rule set.
    pub fn full() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            max_root_delta: DEFAULT_MAX_ROOT_DELTA,
            suffixes: to_owned_list(DEFAULT_SUFFIXES),
            prefixes: to_owned_list(DEFAULT_PREFIXES),
            unusual_combinations: to_owned_list(DEFAULT_UNUSUAL_COMBINATIONS),
            uncommon_endings: to_owned_list(DEFAULT_UNCOMMON_ENDINGS),
            strip_last_letter: false,
            shared_prefix_scan: true,
            popular_bypasses_filters: false,
        }
    }

    /// The lightweight rule set used for quick plural / "-ing" cleanup.
    pub fn basic() -> Self {
        Self {
            min_word_length: 1,
            max_root_delta: DEFAULT_MAX_ROOT_DELTA,
            suffixes: vec!["ing".to_string()],
            prefixes: Vec::new(),
            unusual_combinations: Vec::new(),
            uncommon_endings: Vec::new(),
            strip_last_letter: true,
            shared_prefix_scan: false,
            popular_bypasses_filters: false,
        }
    }

    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Full => Self::full(),
            Preset::Basic => Self::basic(),
        }
    }

    /// Parse a TOML document. Keys absent from the document keep the values
    /// of the preset it names (`preset = "basic"`), or of `full`.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let config = file.into_config();
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check the rule tables and thresholds for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tables: [(&'static str, &[String]); 4] = [
            ("suffixes", &self.suffixes),
            ("prefixes", &self.prefixes),
            ("unusual_combinations", &self.unusual_combinations),
            ("uncommon_endings", &self.uncommon_endings),
        ];
        for (table, entries) in tables {
            if let Some(bad) = entries
                .iter()
                .find(|e| !rootsift_core::character::is_ascii_lower_word(e))
            {
                return Err(ConfigError::InvalidEntry {
                    table,
                    entry: bad.clone(),
                });
            }
        }
        if self.shared_prefix_scan && self.max_root_delta == 0 {
            return Err(ConfigError::ZeroRootDelta);
        }
        Ok(())
    }
}

impl Default for CurationConfig {
    fn default() -> Self {
        Self::full()
    }
}

/// On-disk shape: a preset name plus optional overrides.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    preset: Preset,
    min_word_length: Option<usize>,
    max_root_delta: Option<usize>,
    suffixes: Option<Vec<String>>,
    prefixes: Option<Vec<String>>,
    unusual_combinations: Option<Vec<String>>,
    uncommon_endings: Option<Vec<String>>,
    strip_last_letter: Option<bool>,
    shared_prefix_scan: Option<bool>,
    popular_bypasses_filters: Option<bool>,
}

impl ConfigFile {
    fn into_config(self) -> CurationConfig {
        let mut config = CurationConfig::preset(self.preset);
        if let Some(v) = self.min_word_length {
            config.min_word_length = v;
        }
        if let Some(v) = self.max_root_delta {
            config.max_root_delta = v;
        }
        if let Some(v) = self.suffixes {
            config.suffixes = v;
        }
        if let Some(v) = self.prefixes {
            config.prefixes = v;
        }
        if let Some(v) = self.unusual_combinations {
            config.unusual_combinations = v;
        }
        if let Some(v) = self.uncommon_endings {
            config.uncommon_endings = v;
        }
        if let Some(v) = self.strip_last_letter {
            config.strip_last_letter = v;
        }
        if let Some(v) = self.shared_prefix_scan {
            config.shared_prefix_scan = v;
        }
        if let Some(v) = self.popular_bypasses_filters {
            config.popular_bypasses_filters = v;
        }
        config
    }
}
