//! Lookup
//!
//! Aggregates one query and one compiled sort, the unit a storage
//! translator consumes per request.

use super::ast::Query;
use super::errors::QueryResult;
use super::sort::{SortCompiler, SortSpec};
use crate::schema::Schema;

/// Filter and sort aggregate for one storage request
#[derive(Debug, Clone, Default)]
pub struct Lookup {
    query: Query,
    sort: Vec<SortSpec>,
}

impl Lookup {
    /// Creates an empty lookup (match everything, no sort)
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a query's predicates. Repeated calls conjoin.
    pub fn add_query(&mut self, query: Query) {
        self.query.predicates.extend(query.predicates);
    }

    /// Compiles and stores a sort spec
    pub fn set_sort(&mut self, spec: &str, schema: &Schema) -> QueryResult<()> {
        self.sort = SortCompiler::compile(spec, schema)?;
        Ok(())
    }

    /// The accumulated filter query
    pub fn filter(&self) -> &Query {
        &self.query
    }

    /// The compiled sort entries
    pub fn sort(&self) -> &[SortSpec] {
        &self.sort
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ast::Expression;
    use crate::query::errors::QueryError;
    use crate::schema::Field;
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new()
            .with_field("id", Field::id())
            .with_field("f", Field::new().sortable())
    }

    #[test]
    fn test_add_query_conjoins() {
        let mut lookup = Lookup::new();
        lookup.add_query(Query::new().with_predicate(Expression::equal("f", json!("a"))));
        lookup.add_query(Query::new().with_predicate(Expression::equal("f", json!("b"))));
        assert_eq!(lookup.filter().predicates.len(), 2);
    }

    #[test]
    fn test_set_sort_stores_compiled_entries() {
        let mut lookup = Lookup::new();
        lookup.set_sort("f,-id", &schema()).unwrap();
        assert_eq!(lookup.sort(), &[SortSpec::asc("f"), SortSpec::desc("_id")]);
    }

    #[test]
    fn test_set_sort_surfaces_compiler_errors() {
        let mut lookup = Lookup::new();
        assert_eq!(
            lookup.set_sort("missing", &schema()),
            Err(QueryError::UnknownSortField("missing".into()))
        );
        assert!(lookup.sort().is_empty());
    }
}
