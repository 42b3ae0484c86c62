//! Page surfaces: the elements a controller rewrites.
//!
//! A surface exposes every element annotated with a translation key (the
//! `data-translate` attribute on a web page), a setter for each element's
//! rendered content, the document-level language attribute, and an optional
//! toggle control whose label names the language a toggle would switch to.

/// Opaque handle for an element within one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub usize);

/// An element carrying a translation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableElement {
    pub id: ElementId,
    /// Dotted key path, e.g. `"greeting.hello"`
    pub key: String,
}

/// Page content the controller is allowed to change.
pub trait DomSurface {
    /// Every element exposing a translation key, in document order.
    fn translatable_elements(&self) -> Vec<TranslatableElement>;

    /// Replace an element's rendered content. The content may contain markup.
    fn set_content(&mut self, id: ElementId, content: &str);

    /// Set the document-level language attribute.
    fn set_document_language(&mut self, code: &str);

    /// Set the toggle control's label. Surfaces without a toggle ignore this.
    fn set_toggle_label(&mut self, label: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoryElement {
    key: Option<String>,
    content: String,
}

/// In-memory page model.
///
/// Elements keep insertion order. Elements without a key are rendered but
/// never offered for translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    elements: Vec<MemoryElement>,
    document_language: Option<String>,
    toggle_label: Option<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toggle control with an initial label.
    pub fn with_toggle(mut self, label: impl Into<String>) -> Self {
        self.toggle_label = Some(label.into());
        self
    }

    /// Add an element carrying a translation key and its initial content.
    pub fn add_element(&mut self, key: impl Into<String>, content: impl Into<String>) -> ElementId {
        self.push(Some(key.into()), content.into())
    }

    /// Add an element without a translation key.
    pub fn add_static(&mut self, content: impl Into<String>) -> ElementId {
        self.push(None, content.into())
    }

    fn push(&mut self, key: Option<String>, content: String) -> ElementId {
        self.elements.push(MemoryElement { key, content });
        ElementId(self.elements.len() - 1)
    }

    pub fn content(&self, id: ElementId) -> Option<&str> {
        self.elements.get(id.0).map(|element| element.content.as_str())
    }

    /// Content of the first element carrying `key`.
    pub fn content_for_key(&self, key: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|element| element.key.as_deref() == Some(key))
            .map(|element| element.content.as_str())
    }

    pub fn document_language(&self) -> Option<&str> {
        self.document_language.as_deref()
    }

    /// Current toggle label, or `None` when the page has no toggle.
    pub fn toggle_label(&self) -> Option<&str> {
        self.toggle_label.as_deref()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// `(key, content)` pairs in document order; keyless elements have an empty key.
    pub fn rendered(&self) -> Vec<(&str, &str)> {
        self.elements
            .iter()
            .map(|element| (element.key.as_deref().unwrap_or(""), element.content.as_str()))
            .collect()
    }
}

impl DomSurface for MemorySurface {
    fn translatable_elements(&self) -> Vec<TranslatableElement> {
        self.elements
            .iter()
            .enumerate()
            .filter_map(|(index, element)| {
                element.key.as_ref().map(|key| TranslatableElement {
                    id: ElementId(index),
                    key: key.clone(),
                })
            })
            .collect()
    }

    fn set_content(&mut self, id: ElementId, content: &str) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.content = content.to_string();
        }
    }

    fn set_document_language(&mut self, code: &str) {
        self.document_language = Some(code.to_string());
    }

    fn set_toggle_label(&mut self, label: &str) {
        if let Some(current) = self.toggle_label.as_mut() {
            *current = label.to_string();
        }
    }
}
