use mongodb::bson::{doc, Bson, Document};

/// Comparison applied to a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Exact match
    Eq,
    /// Strictly greater than
    Gt,
    /// Greater than or equal
    Gte,
}

impl Predicate {
    fn operator(self) -> &'static str {
        match self {
            Predicate::Eq => "$eq",
            Predicate::Gt => "$gt",
            Predicate::Gte => "$gte",
        }
    }
}

/// Typed query filter: an ordered set of (field, predicate, value) clauses
/// combined with logical AND
///
/// Replaces ad-hoc query dictionaries with one construction point translated
/// to a BSON query document. Optional request parameters are added through
/// [`FilterBuilder::maybe`], so omitted filters impose no constraint.
#[derive(Debug, Default)]
pub struct FilterBuilder {
    clauses: Vec<(&'static str, Predicate, Bson)>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clause unconditionally
    pub fn clause(
        mut self,
        field: &'static str,
        predicate: Predicate,
        value: impl Into<Bson>,
    ) -> Self {
        self.clauses.push((field, predicate, value.into()));
        self
    }

    /// Add a clause only when the value is present
    pub fn maybe<V: Into<Bson>>(
        self,
        field: &'static str,
        predicate: Predicate,
        value: Option<V>,
    ) -> Self {
        match value {
            Some(value) => self.clause(field, predicate, value),
            None => self,
        }
    }

    /// Render the clauses into a BSON query document
    ///
    /// Equality clauses use plain field matching; range clauses wrap the
    /// value in the corresponding comparison operator.
    pub fn build(self) -> Document {
        let mut query = Document::new();
        for (field, predicate, value) in self.clauses {
            match predicate {
                Predicate::Eq => {
                    query.insert(field, value);
                }
                range => {
                    query.insert(field, doc! { range.operator(): value });
                }
            }
        }
        query
    }
}
