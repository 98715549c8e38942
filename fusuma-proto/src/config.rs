use serde::{Deserialize, Serialize};

pub const DEFAULT_LAYOUT: &str = "tile";

/// On-disk configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub default_layout: String,
    pub tags: Vec<TagConfig>,
    pub rules: Vec<Rule>,
    pub screens: u32,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            default_layout: DEFAULT_LAYOUT.to_string(),
            tags: (1..=9).map(|n| TagConfig::new(n.to_string())).collect(),
            rules: Vec::new(),
            screens: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagConfig {
    pub name: String,
    /// Layout adopted when this tag is viewed. Falls back to the default layout.
    #[serde(default)]
    pub layout: Option<String>,
}

impl TagConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layout: None,
        }
    }
}

/// Declarative window rule.
///
/// `prop` is an extended regular expression searched in
/// `"<class>:<instance>:<title>"`, `tags` is searched in every tag name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub prop: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub is_floating: bool,
}

impl Rule {
    pub fn new(prop: &str, tags: Option<&str>, is_floating: bool) -> Self {
        Self {
            prop: Some(prop.to_string()),
            tags: tags.map(|t| t.to_string()),
            is_floating,
        }
    }
}
