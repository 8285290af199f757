// Prototype: documents cloned from templates, plus a keyed template registry.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;
use uuid::Uuid;

use crate::error::PatternError;

// ============================================================================
// Prototype trait
// ============================================================================

pub trait Prototype {
    /// Produce an independent copy. Implementors document which fields are
    /// copied and which are regenerated.
    fn duplicate(&self) -> Self;
}

// ============================================================================
// Document
// ============================================================================

/// Intentionally not `Clone`: copies must go through [`Prototype::duplicate`]
/// so the identity fields are handled.
#[derive(Debug, PartialEq)]
pub struct Document {
    id: Uuid,
    cloned_from: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub metadata: BTreeMap<String, String>,
}

impl Document {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            cloned_from: None,
            title: title.into(),
            content: content.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn cloned_from(&self) -> Option<Uuid> {
        self.cloned_from
    }

    /// `title` and `content` set those fields; any other field name is
    /// treated as a metadata key.
    pub fn apply_edit(&mut self, field: &str, value: &str) {
        match field {
            "title" => self.title = value.to_string(),
            "content" => self.content = value.to_string(),
            key => {
                self.metadata.insert(key.to_string(), value.to_string());
            }
        }
    }

    pub fn trace(&self) -> Vec<String> {
        let metadata = self
            .metadata
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ");

        vec![
            format!("Title: {}", self.title),
            format!("Content: {}", self.content),
            format!("Metadata: {{{metadata}}}"),
        ]
    }
}

impl Prototype for Document {
    /// - `title`, `content`, `metadata`: deep-copied
    /// - `id`: regenerated
    /// - `cloned_from`: set to this document's id
    fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            cloned_from: Some(self.id),
            title: self.title.clone(),
            content: self.content.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrototypeTrace {
    pub original: Vec<String>,
    pub clone: Vec<String>,
}

pub fn clone_and_edit(
    template: &Document,
    edits: &BTreeMap<String, String>,
) -> (Document, PrototypeTrace) {
    let mut copy = template.duplicate();
    for (field, value) in edits {
        copy.apply_edit(field, value);
    }
    debug!(
        template = %template.id(),
        clone = %copy.id(),
        edits = edits.len(),
        "document cloned"
    );

    let trace = PrototypeTrace {
        original: template.trace(),
        clone: copy.trace(),
    };
    (copy, trace)
}

// ============================================================================
// Registry
// ============================================================================

#[derive(Default)]
pub struct PrototypeRegistry {
    templates: HashMap<String, Document>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the "report" and "invoice" templates.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(
            "report",
            Document::new("Monthly Report", "Summary of the month")
                .with_metadata("author", "analytics")
                .with_metadata("format", "pdf"),
        );
        registry.register(
            "invoice",
            Document::new("Invoice", "Amount due: $0.00").with_metadata("currency", "USD"),
        );
        registry
    }

    pub fn register(&mut self, key: impl Into<String>, template: Document) {
        self.templates.insert(key.into(), template);
    }

    pub fn create(&self, key: &str) -> Result<Document, PatternError> {
        self.templates
            .get(key)
            .map(Document::duplicate)
            .ok_or_else(|| PatternError::not_found("prototype", key))
    }

    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_duplicate_regenerates_identity() {
        let template = Document::new("T", "C");
        let copy = template.duplicate();

        assert_ne!(copy.id(), template.id());
        assert_eq!(copy.cloned_from(), Some(template.id()));
        assert_eq!(template.cloned_from(), None);
        assert_eq!(copy.title, "T");
        assert_eq!(copy.content, "C");
    }

    #[test]
    fn test_edit_clone_leaves_original() {
        let template = Document::new("T", "C");
        let mut edits = BTreeMap::new();
        edits.insert("title".to_string(), "T2".to_string());

        let (_, trace) = clone_and_edit(&template, &edits);
        assert_eq!(trace.original[0], "Title: T");
        assert_eq!(trace.clone[0], "Title: T2");
        assert_eq!(template.title, "T");
    }

    #[test]
    fn test_unknown_fields_become_metadata() {
        let mut doc = Document::new("T", "C").with_metadata("b", "2");
        doc.apply_edit("a", "1");
        assert_eq!(doc.trace()[2], "Metadata: {a=1, b=2}");
    }

    #[test]
    fn test_registry_create_and_miss() {
        let registry = PrototypeRegistry::with_defaults();
        assert_eq!(registry.keys(), vec!["invoice", "report"]);

        let mut report = registry.create("report").unwrap();
        report.title.push_str(" (draft)");
        assert_eq!(registry.create("report").unwrap().title, "Monthly Report");

        assert_eq!(
            registry.create("memo").unwrap_err(),
            PatternError::not_found("prototype", "memo")
        );
    }

    #[test]
    fn test_register_replaces_template() {
        let mut registry = PrototypeRegistry::new();
        registry.register("memo", Document::new("Old", ""));
        registry.register("memo", Document::new("New", ""));
        assert_eq!(registry.create("memo").unwrap().title, "New");
    }

    proptest! {
        #[test]
        fn test_clone_never_aliases_original(
            title in ".{0,16}",
            content in ".{0,16}",
            metadata in prop::collection::btree_map("[a-z]{1,6}", ".{0,8}", 0..5),
            new_value in ".{0,8}",
        ) {
            let mut template = Document::new(title.clone(), content.clone());
            template.metadata = metadata.clone();
            let before = template.trace();

            let mut copy = template.duplicate();
            copy.apply_edit("title", &new_value);
            copy.apply_edit("content", &new_value);
            copy.apply_edit("extra", &new_value);
            copy.metadata.clear();

            prop_assert_eq!(template.trace(), before);
            prop_assert_eq!(&template.title, &title);
            prop_assert_eq!(&template.metadata, &metadata);

            // and the other direction
            let mut fresh = template.duplicate();
            fresh.apply_edit("title", &new_value);
            template.apply_edit("title", "changed");
            prop_assert_eq!(&fresh.title, &new_value);
        }
    }
}
