pub mod assessment;
pub mod metric;
pub mod patient;
pub mod site;
pub mod study;
pub mod summary;
