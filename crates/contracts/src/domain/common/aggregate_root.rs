/// Aggregate root of the console.
///
/// Provides the record id plus the static names the UI uses for titles,
/// menu entries and the `?active=` page key.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    /// Record id; `None` for records not yet stored by the backend
    fn id(&self) -> Option<Self::Id>;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Aggregate index, e.g. "a001"
    fn aggregate_index() -> &'static str;

    /// Collection name, e.g. "customer_address"
    fn collection_name() -> &'static str;

    /// Singular UI name
    fn element_name() -> &'static str;

    /// Plural UI name
    fn list_name() -> &'static str;

    /// Full aggregate name, e.g. "a001_customer_address"
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
