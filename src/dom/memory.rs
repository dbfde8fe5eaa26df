use crate::{
    dom::{Dom, ElementId, ElementRef},
    prelude::HashMap,
};

/// In-memory element: a tag name plus plain string attributes.
///
/// Classes and the `id` attribute are ordinary attributes, exactly as in a
/// real document; selector matching reads them back out.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryElement {
    id: ElementId,
    tag: String,
    attributes: HashMap<String, String>,
}

impl MemoryElement {
    /// Creates a detached element; [`MemoryDom::insert`] assigns its identity
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            id: ElementId(0),
            tag: tag.into(),
            attributes: HashMap::default(),
        }
    }

    /// Sets an attribute, replacing any previous value
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Appends a class to the `class` attribute
    pub fn with_class(mut self, class: &str) -> Self {
        let classes = match self.attributes.get("class") {
            Some(existing) => format!("{} {}", existing, class),
            None => class.to_string(),
        };
        self.attributes.insert("class".to_string(), classes);
        self
    }

    /// Sets the `id` attribute
    pub fn with_dom_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Matches a single simple selector: `.class`, `#id`, a tag name, or `*`
    pub fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            self.attributes
                .get("class")
                .map(|classes| classes.split_whitespace().any(|c| c == class))
                .unwrap_or(false)
        } else if let Some(id) = selector.strip_prefix('#') {
            self.attributes.get("id").map(String::as_str) == Some(id)
        } else {
            selector == "*" || self.tag == selector
        }
    }
}

impl ElementRef for MemoryElement {
    fn attr(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn id(&self) -> ElementId {
        self.id
    }
}

/// In-memory document: a flat list of elements in insertion order.
///
/// Insertion order doubles as document order, so selector results keep the
/// order elements were added in.
#[derive(Debug, Default)]
pub struct MemoryDom {
    elements: Vec<MemoryElement>,
    next_id: u64,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an element and returns its assigned identity
    pub fn insert(&mut self, mut element: MemoryElement) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        element.id = id;
        self.elements.push(element);
        id
    }

    /// Looks an element up by identity
    pub fn get(&self, id: ElementId) -> Option<&MemoryElement> {
        self.elements.iter().find(|element| element.id == id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Dom for MemoryDom {
    type Element = MemoryElement;

    fn select(&self, selector: &str) -> Vec<MemoryElement> {
        self.elements
            .iter()
            .filter(|element| element.matches(selector))
            .cloned()
            .collect()
    }
}
