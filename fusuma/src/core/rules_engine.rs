use std::cell::OnceCell;

use fusuma_proto::Rule;
use regex::Regex;

use super::{TagList, TagSet};

/// Compile outcome of one rule pattern.
#[derive(Debug, Clone)]
pub enum CompiledPattern {
    Compiled(Regex),
    /// The rule did not specify this pattern.
    Missing,
    Invalid { pattern: String, error: String },
}

impl CompiledPattern {
    fn compile(pattern: Option<&str>) -> Self {
        let Some(pattern) = pattern else {
            return CompiledPattern::Missing;
        };
        match Regex::new(pattern) {
            Ok(re) => CompiledPattern::Compiled(re),
            Err(e) => CompiledPattern::Invalid {
                pattern: pattern.to_string(),
                error: e.to_string(),
            },
        }
    }

    pub fn regex(&self) -> Option<&Regex> {
        match self {
            CompiledPattern::Compiled(re) => Some(re),
            CompiledPattern::Missing | CompiledPattern::Invalid { .. } => None,
        }
    }

    pub fn is_compiled(&self) -> bool {
        matches!(self, CompiledPattern::Compiled(_))
    }
}

#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub prop: CompiledPattern,
    pub tags: CompiledPattern,
    pub is_floating: bool,
}

impl CompiledRule {
    fn compile(index: usize, rule: &Rule) -> Self {
        let compiled = Self {
            prop: CompiledPattern::compile(rule.prop.as_deref()),
            tags: CompiledPattern::compile(rule.tags.as_deref()),
            is_floating: rule.is_floating,
        };
        for pattern in [&compiled.prop, &compiled.tags] {
            if let CompiledPattern::Invalid { pattern, error } = pattern {
                tracing::warn!("Rule {}: dropping pattern {:?}: {}", index, pattern, error);
            }
        }
        compiled
    }
}

/// Result of classifying a new window.
#[derive(Debug, Default, PartialEq)]
pub struct Classification {
    /// Tag bitset from the last matching rule that has a tag pattern.
    pub tags: Option<TagSet>,
    /// Floating default of the last matching rule.
    pub is_floating: Option<bool>,
}

/// Compiled window rules.
///
/// Compilation happens once; later `compile` calls are ignored, so the
/// table stays aligned with the rules it was first built from.
#[derive(Debug, Default)]
pub struct RulesEngine {
    compiled: OnceCell<Vec<CompiledRule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles `rules` unless a table already exists.
    /// Returns whether this call built the table.
    pub fn compile(&self, rules: &[Rule]) -> bool {
        if self.compiled.get().is_some() {
            tracing::debug!("Rules already compiled, ignoring {} rules", rules.len());
            return false;
        }
        let table: Vec<CompiledRule> = rules
            .iter()
            .enumerate()
            .map(|(i, rule)| CompiledRule::compile(i, rule))
            .collect();
        tracing::info!("Compiled {} rules", table.len());
        self.compiled.set(table).is_ok()
    }

    pub fn is_compiled(&self) -> bool {
        self.compiled.get().is_some()
    }

    pub fn compiled(&self) -> &[CompiledRule] {
        self.compiled.get().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Runs every rule in order against `key` (`"<class>:<instance>:<title>"`).
    ///
    /// Each matching rule overwrites the floating flag. A matching rule with
    /// a tag pattern recomputes the whole bitset from the tag names, so the
    /// last such rule wins outright; earlier results are not merged in.
    pub fn classify(&self, key: &str, tags: &TagList) -> Classification {
        let mut result = Classification::default();

        for (index, rule) in self.compiled().iter().enumerate() {
            let Some(prop) = rule.prop.regex() else {
                continue;
            };
            if !prop.is_match(key) {
                continue;
            }
            tracing::debug!("Rule {} matched {:?}", index, key);

            result.is_floating = Some(rule.is_floating);
            if let Some(tag_re) = rule.tags.regex() {
                let set: TagSet = tags.iter().map(|t| tag_re.is_match(&t.name)).collect();
                tracing::debug!("Rule {} assigns tags {}", index, set);
                result.tags = Some(set);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tag;

    fn tag_list(names: &[&str]) -> TagList {
        TagList::new(names.iter().map(|n| Tag::new(*n, "tile")).collect())
    }

    fn engine(rules: &[Rule]) -> RulesEngine {
        let engine = RulesEngine::new();
        assert!(engine.compile(rules));
        engine
    }

    #[test]
    fn test_firefox_rule_assigns_web_only() {
        let tags = tag_list(&["term", "web", "webdev", "mail"]);
        let engine = engine(&[Rule::new("^Firefox:.*", Some("^web$"), false)]);

        let result = engine.classify("Firefox:Navigator:Mozilla", &tags);

        assert_eq!(result.tags, Some(TagSet::from_bits(vec![false, true, false, false])));
        assert_eq!(result.is_floating, Some(false));
    }

    #[test]
    fn test_match_is_unanchored_substring() {
        let tags = tag_list(&["term", "web"]);
        let engine = engine(&[Rule::new("Navigator", Some("we"), true)]);

        let result = engine.classify("Firefox:Navigator:Mozilla", &tags);

        assert_eq!(result.tags, Some(TagSet::from_bits(vec![false, true])));
        assert_eq!(result.is_floating, Some(true));
    }

    #[test]
    fn test_no_match_leaves_result_empty() {
        let tags = tag_list(&["term", "web"]);
        let engine = engine(&[Rule::new("^Gimp", Some("web"), true)]);

        assert_eq!(engine.classify("xterm:xterm:bash", &tags), Classification::default());
    }

    #[test]
    fn test_last_matching_rule_wins() {
        let tags = tag_list(&["term", "web", "mail"]);
        let engine = engine(&[
            Rule::new("Firefox", Some("web|mail"), true),
            Rule::new("Navigator", Some("^term$"), false),
        ]);

        let result = engine.classify("Firefox:Navigator:Mozilla", &tags);

        // Second rule replaces the first rule's bits instead of merging.
        assert_eq!(result.tags, Some(TagSet::from_bits(vec![true, false, false])));
        assert_eq!(result.is_floating, Some(false));
    }

    #[test]
    fn test_rule_without_tag_pattern_only_sets_floating() {
        let tags = tag_list(&["term", "web"]);
        let engine = engine(&[
            Rule::new("Firefox", Some("web"), false),
            Rule::new("Firefox", None, true),
        ]);

        let result = engine.classify("Firefox:Navigator:Mozilla", &tags);

        assert_eq!(result.tags, Some(TagSet::from_bits(vec![false, true])));
        assert_eq!(result.is_floating, Some(true));
    }

    #[test]
    fn test_invalid_pattern_drops_only_that_matcher() {
        let rules = [
            Rule::new("(unclosed", Some("web"), true),
            Rule::new("Firefox", Some("[bad"), true),
            Rule::new("xterm", Some("term"), false),
        ];
        let engine = engine(&rules);
        let compiled = engine.compiled();

        assert_eq!(compiled.len(), 3);
        assert!(matches!(compiled[0].prop, CompiledPattern::Invalid { .. }));
        assert!(compiled[0].tags.is_compiled());
        assert!(compiled[1].prop.is_compiled());
        assert!(matches!(compiled[1].tags, CompiledPattern::Invalid { .. }));
        assert!(compiled[2].prop.is_compiled());
        assert!(compiled[2].tags.is_compiled());

        let tags = tag_list(&["term", "web"]);
        let result = engine.classify("Firefox:Navigator:Mozilla", &tags);
        // Rule 1 still matches and sets floating, but cannot assign tags.
        assert_eq!(result.tags, None);
        assert_eq!(result.is_floating, Some(true));

        let result = engine.classify("xterm:xterm:bash", &tags);
        assert_eq!(result.tags, Some(TagSet::from_bits(vec![true, false])));
    }

    #[test]
    fn test_missing_patterns() {
        let engine = engine(&[Rule {
            prop: None,
            tags: Some("web".to_string()),
            is_floating: true,
        }]);
        let compiled = &engine.compiled()[0];

        assert!(matches!(compiled.prop, CompiledPattern::Missing));
        // A rule without a property pattern never matches.
        let tags = tag_list(&["term", "web"]);
        assert_eq!(engine.classify("a:b:c", &tags), Classification::default());
    }

    #[test]
    fn test_compile_twice_is_noop() {
        let tags = tag_list(&["term", "web"]);
        let engine = RulesEngine::new();
        assert!(!engine.is_compiled());

        assert!(engine.compile(&[Rule::new("Firefox", Some("web"), false)]));
        assert!(!engine.compile(&[Rule::new("Firefox", Some("term"), true)]));

        assert_eq!(engine.compiled().len(), 1);
        let result = engine.classify("Firefox:Navigator:Mozilla", &tags);
        assert_eq!(result.tags, Some(TagSet::from_bits(vec![false, true])));
        assert_eq!(result.is_floating, Some(false));
    }

    #[test]
    fn test_uncompiled_engine_matches_nothing() {
        let tags = tag_list(&["term"]);
        let engine = RulesEngine::new();
        assert!(engine.compiled().is_empty());
        assert_eq!(engine.classify("a:b:c", &tags), Classification::default());
    }
}
