use fusuma_proto::TagConfig;

use super::TagSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub selected: bool,
    /// Selection snapshot taken by `view`, swapped back by `view_prev_selected`.
    pub was_selected: bool,
    pub layout: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, layout: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selected: false,
            was_selected: false,
            layout: layout.into(),
        }
    }
}

/// Outcome of looking up a tag by name.
///
/// `Unnamed` (no name given) and `Unknown` (name given, no such tag) are
/// kept apart here; `index` collapses both onto the first tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLookup {
    Found(usize),
    Unnamed,
    Unknown(String),
}

impl TagLookup {
    pub fn index(&self) -> usize {
        match self {
            TagLookup::Found(index) => *index,
            TagLookup::Unnamed | TagLookup::Unknown(_) => 0,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, TagLookup::Found(_))
    }
}

/// Ordered tag list of one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<Tag>,
}

impl TagList {
    /// Builds a tag list with the first tag selected.
    ///
    /// `was_selected` starts equal to `selected` so that swapping history
    /// before any `view` keeps a non-empty selection.
    pub fn new(mut tags: Vec<Tag>) -> Self {
        if let Some(first) = tags.first_mut() {
            first.selected = true;
            first.was_selected = true;
        }
        Self { tags }
    }

    pub fn from_config(configs: &[TagConfig], default_layout: &str) -> Self {
        Self::new(
            configs
                .iter()
                .map(|c| Tag::new(&c.name, c.layout.as_deref().unwrap_or(default_layout)))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.tags.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tag> {
        self.tags.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Tag> {
        self.tags.iter_mut()
    }

    pub fn lookup(&self, name: Option<&str>) -> TagLookup {
        let Some(name) = name else {
            return TagLookup::Unnamed;
        };
        match self.tags.iter().position(|t| t.name == name) {
            Some(index) => TagLookup::Found(index),
            None => TagLookup::Unknown(name.to_string()),
        }
    }

    /// Resolves a tag name to an index, falling back to the first tag.
    pub fn resolve(&self, name: Option<&str>) -> usize {
        let lookup = self.lookup(name);
        if let TagLookup::Unknown(name) = &lookup {
            tracing::warn!("Unknown tag {:?}, using first tag", name);
        }
        lookup.index()
    }

    pub fn any_selected(&self) -> bool {
        self.tags.iter().any(|t| t.selected)
    }

    /// Snapshot of the current selection.
    pub fn selection(&self) -> TagSet {
        self.tags.iter().map(|t| t.selected).collect()
    }

    pub fn selected_names(&self) -> Vec<String> {
        self.names_of(&self.selection())
    }

    pub fn names_of(&self, set: &TagSet) -> Vec<String> {
        set.indices()
            .filter_map(|i| self.tags.get(i))
            .map(|t| t.name.clone())
            .collect()
    }
}
