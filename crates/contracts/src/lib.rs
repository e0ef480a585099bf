//! Domain contracts for the production work queue: facet enums, the analytic
//! catalog, filter selection state and the row-filter predicate, plus the
//! generated demo dataset the table renders.

pub mod catalog;
pub mod enums;
pub mod facet;
pub mod filter;
pub mod mock_data;
pub mod row;
pub mod selection;
