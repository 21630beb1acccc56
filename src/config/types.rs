use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub dialog: DialogConfig,
    /// Languages offered by the search dialog, in display order.
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,
}

/// Remote pictogram catalog endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the search API (e.g., "https://api.arasaac.org/api/pictograms").
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Base URL of the static image store.
    #[serde(default = "default_image_url")]
    pub image_url: String,
    /// Put the language code in front of `/search/` in the request path.
    #[serde(default)]
    pub language_in_path: bool,
}

/// Search dialog settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogConfig {
    /// Results shown per page (default: 20).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Language selected when the dialog opens (default: "fr").
    #[serde(default = "default_language")]
    pub default_language: String,
}

/// Entry of the language selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Code sent to the catalog and matched against keyword labels (e.g., "fr").
    pub code: String,
    /// Name shown in the selector (e.g., "Français").
    pub name: String,
}

impl Language {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.arasaac.org/api/pictograms".to_string()
}

fn default_image_url() -> String {
    "https://static.arasaac.org/pictograms".to_string()
}

fn default_page_size() -> usize {
    20
}

fn default_language() -> String {
    "fr".to_string()
}

fn default_languages() -> Vec<Language> {
    vec![
        Language::new("fr", "Français"),
        Language::new("en", "English"),
        Language::new("es", "Español"),
        Language::new("de", "Deutsch"),
        Language::new("it", "Italiano"),
    ]
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            image_url: default_image_url(),
            language_in_path: false,
        }
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_language: default_language(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            dialog: DialogConfig::default(),
            languages: default_languages(),
        }
    }
}

impl Config {
    /// Look up a configured language by code.
    pub fn language(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Language following `code` in the selector, wrapping around.
    ///
    /// Unknown codes restart from the first entry.
    pub fn next_language(&self, code: &str) -> Option<&Language> {
        let position = self.languages.iter().position(|lang| lang.code == code);
        match position {
            Some(index) => self.languages.get((index + 1) % self.languages.len()),
            None => self.languages.first(),
        }
    }
}
