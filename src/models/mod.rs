pub mod payload;
pub mod person;
pub mod schedule;
pub mod trip;
