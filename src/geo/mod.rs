pub mod project;
pub mod rings;
pub mod srs;
pub mod units;
