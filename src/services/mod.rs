pub mod aggregations;
pub mod csv_service;
pub mod filter_service;
pub mod report_service;
pub mod session;
