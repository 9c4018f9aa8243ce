pub mod report;
pub mod sentinel;
