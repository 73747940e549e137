use mongodb::bson::{Bson, Document};

/// Equality filter for single-document lookups.
///
/// Each condition is a `field == literal` pair. Conditions are kept in
/// insertion order so the generated filter document is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Bson)>,
}

impl Filter {
    /// Creates an empty filter, which matches every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter with a single equality condition.
    pub fn eq(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::new().and_eq(field, value)
    }

    /// Adds another equality condition. A repeated field replaces the earlier value.
    pub fn and_eq(mut self, field: impl Into<String>, value: impl Into<Bson>) -> Self {
        let field = field.into();
        let value = value.into();
        match self.conditions.iter_mut().find(|(f, _)| *f == field) {
            Some((_, existing)) => *existing = value,
            None => self.conditions.push((field, value)),
        }
        self
    }

    /// Returns true if the filter has no conditions.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Builds the BSON filter document sent to the server.
    pub fn to_document(&self) -> Document {
        self.conditions
            .iter()
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect()
    }

    /// Returns true if every condition holds for `document`.
    ///
    /// Only top-level fields are compared; dotted paths are not traversed.
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, value)| document.get(field) == Some(value))
    }
}

impl From<Filter> for Document {
    fn from(filter: Filter) -> Self {
        filter.to_document()
    }
}
