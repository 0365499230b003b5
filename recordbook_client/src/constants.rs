pub(crate) static RECORDBOOK_API_KEY_HEADER: &str = "x-recordbook-api-key";

/// Page size for cursor reads. The Recordbook caps responses well below this
/// internally; asking for more only wastes a round trip.
pub(crate) static RECORDBOOK_PAGE_SIZE: usize = 100;

/// How many OR'ed location clauses a single query may carry before the
/// filter expression is rejected upstream.
pub(crate) static RECORDBOOK_MAX_FILTER_CLAUSES: usize = 25;
