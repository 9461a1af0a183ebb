pub mod charset;
pub mod generator;
pub mod report;
pub mod timer;
