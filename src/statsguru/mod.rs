//! ESPN Cricinfo Statsguru access: page fetching, table extraction, and
//! the heuristic name search.

pub mod http;
pub mod search;
pub mod table;
