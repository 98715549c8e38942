use fusuma_proto::{ConfigFile, Rule, TagConfig};

use super::{RulesEngine, TagList};

/// Application configuration.
/// Owns the rule list and the matcher table compiled from it.
#[derive(Debug)]
pub struct Config {
    pub default_layout: String,
    pub tags: Vec<TagConfig>,
    pub screen_count: u32,
    rules: Vec<Rule>,
    rules_engine: RulesEngine,
}

impl Config {
    pub fn new() -> Self {
        Self::from_file(ConfigFile::default())
    }

    pub fn from_file(file: ConfigFile) -> Self {
        Self {
            default_layout: file.default_layout,
            tags: file.tags,
            screen_count: file.screens.max(1),
            rules: file.rules,
            rules_engine: RulesEngine::new(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The compiled rules, built from `rules()` on first access.
    pub fn rules_engine(&self) -> &RulesEngine {
        if !self.rules_engine.is_compiled() {
            self.rules_engine.compile(&self.rules);
        }
        &self.rules_engine
    }

    pub fn tag_list(&self) -> TagList {
        TagList::from_config(&self.tags, &self.default_layout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
