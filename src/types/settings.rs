use serde::{Deserialize, Serialize};

/// Theme ids the dashboard ships with. The first one is the default.
pub const THEME_IDS: [&str; 9] = [
    "gx-neon",
    "cyber-purple",
    "electric-blue",
    "lava-red",
    "midnight-black",
    "sakura-pink",
    "toxic-green",
    "deep-space",
    "sunset-orange",
];

pub const DEFAULT_THEME: &str = THEME_IDS[0];

/// The user settings record.
///
/// Every field falls back to its default when missing from a stored record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub search_engine: SearchEngine,
    pub homepage: HomepageMode,
    pub custom_homepage: String,
    pub block_trackers: bool,
    pub clear_cache_on_exit: bool,
    pub font_size: FontSize,
    pub button_style: ButtonStyle,
    pub notifications: bool,
    pub vpn_enabled: bool,
    pub theme: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            search_engine: SearchEngine::Google,
            homepage: HomepageMode::Default,
            custom_homepage: String::new(),
            block_trackers: true,
            clear_cache_on_exit: false,
            font_size: FontSize::Medium,
            button_style: ButtonStyle::Rounded,
            notifications: true,
            vpn_enabled: false,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

/// Search engine used for non-URL queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Google,
    Duckduckgo,
    Bing,
}

impl SearchEngine {
    /// Query URL prefix; the escaped query is appended to it.
    pub fn template(self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search?q=",
            SearchEngine::Duckduckgo => "https://duckduckgo.com/?q=",
            SearchEngine::Bing => "https://www.bing.com/search?q=",
        }
    }
}

/// What the home view shows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HomepageMode {
    #[default]
    Default,
    Blank,
    Custom,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Rounded,
    Sharp,
    Pill,
}

/// Returns true if `id` names a shipped theme.
pub fn is_known_theme(id: &str) -> bool {
    THEME_IDS.contains(&id)
}
