use serde::{Deserialize, Serialize};

/// Tag kinds that render as a lone opening tag.
pub const SELF_CLOSING_KINDS: &[&str] = &["input", "img"];

/// Insertion-ordered string map. Used for element attributes and for the
/// declarations inside a style rule; iteration order is rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderedMap(Vec<(String, String)>);

pub type Attributes = OrderedMap;
pub type Declarations = OrderedMap;

impl OrderedMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Overwrite an existing key in place, or append a new one at the end.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OrderedMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

/// One node of a generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub kind: String,
    pub attributes: Attributes,
    pub content: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Attributes::new(),
            content: None,
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Boolean attribute, rendered as `name="true"`.
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, "true")
    }

    /// Inner text. Dropped for self-closing kinds.
    pub fn text(mut self, content: impl Into<String>) -> Self {
        if self.is_self_closing() {
            log::debug!("ignoring content on self-closing <{}>", self.kind);
        } else {
            self.content = Some(content.into());
        }
        self
    }

    /// Nested element. Dropped for self-closing kinds.
    pub fn child(mut self, child: Element) -> Self {
        if self.is_self_closing() {
            log::debug!("ignoring child <{}> of self-closing <{}>", child.kind, self.kind);
        } else {
            self.children.push(child);
        }
        self
    }

    pub fn is_self_closing(&self) -> bool {
        SELF_CLOSING_KINDS.contains(&self.kind.as_str())
    }

    /// This element plus all of its descendants.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }
}

/// Selector -> declarations, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleSheet(Vec<(String, Declarations)>);

impl StyleSheet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Replace the rule for `selector`, keeping its original position if it
    /// already exists.
    pub fn insert(&mut self, selector: impl Into<String>, declarations: Declarations) {
        let selector = selector.into();
        match self.0.iter_mut().find(|(s, _)| *s == selector) {
            Some(entry) => entry.1 = declarations,
            None => self.0.push((selector, declarations)),
        }
    }

    pub fn rule(&self, selector: &str) -> Option<&Declarations> {
        self.0.iter().find(|(s, _)| s == selector).map(|(_, d)| d)
    }

    pub fn rule_mut(&mut self, selector: &str) -> Option<&mut Declarations> {
        self.0
            .iter_mut()
            .find(|(s, _)| s == selector)
            .map(|(_, d)| d)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declarations)> {
        self.0.iter().map(|(s, d)| (s.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScriptSet(Vec<String>);

impl ScriptSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, body: impl Into<String>) {
        self.0.push(body.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The live, editable representation of one generated page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentModel {
    pub elements: Vec<Element>,
    pub styles: StyleSheet,
    pub scripts: ScriptSet,
}

impl DocumentModel {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A model counts as populated once it holds at least one element.
    pub fn is_populated(&self) -> bool {
        !self.elements.is_empty()
    }

    /// Total number of elements, nested ones included.
    pub fn element_count(&self) -> usize {
        self.elements.iter().map(Element::count).sum()
    }
}

/// The three text outputs derived from a [`DocumentModel`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratedArtifacts {
    pub markup: String,
    pub stylesheet: String,
    pub script: String,
}

impl GeneratedArtifacts {
    pub fn is_empty(&self) -> bool {
        self.markup.is_empty() && self.stylesheet.is_empty() && self.script.is_empty()
    }
}
