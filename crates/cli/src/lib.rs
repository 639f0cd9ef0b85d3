pub mod managers;
pub mod report;
