/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Number of entries shown in dashboard "recent"/"top" lists
pub const DASHBOARD_LIST_LIMIT: i64 = 5;
