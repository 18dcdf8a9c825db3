//! Query parameter bundle
//!
//! Carries what a caller wants from an external query executor. Nothing in
//! this crate executes queries.

/// Sort direction for an ordering clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

/// One ordering clause
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderBy {
    /// Property to order by
    pub property: String,

    /// Direction
    pub direction: SortDirection,
}

/// Parameters for querying entities
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParameters {
    /// Opaque filter expression understood by the executor
    pub filter: Option<String>,

    /// Ordering clauses, applied in order
    pub order_by: Vec<OrderBy>,

    /// Number of entities to skip
    pub skip: Option<usize>,

    /// Maximum entities to return
    pub take: Option<usize>,

    /// Related property paths to load alongside each entity
    pub includes: Vec<String>,
}

impl QueryParameters {
    /// Create empty query parameters (everything, unordered)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter expression
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Append an ordering clause
    pub fn with_order_by(mut self, property: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by.push(OrderBy {
            property: property.into(),
            direction,
        });
        self
    }

    /// Set paging: skip `skip` entities and return at most `take`
    pub fn with_page(mut self, skip: usize, take: usize) -> Self {
        self.skip = Some(skip);
        self.take = Some(take);
        self
    }

    /// Add a related path to load
    pub fn with_include(mut self, path: impl Into<String>) -> Self {
        self.includes.push(path.into());
        self
    }

    /// Whether any paging is requested
    pub fn is_paged(&self) -> bool {
        self.skip.is_some() || self.take.is_some()
    }
}
