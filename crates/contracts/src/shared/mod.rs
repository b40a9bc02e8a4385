pub mod chart_data;
pub mod indicators;
pub mod record_filter;
pub mod summary;
