// DB constants
pub const DB_TABLE: &str = "table";
pub const DB_SEARCH_TERM: &str = "search_term";
