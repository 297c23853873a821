pub mod database;
pub mod log;
pub mod string;
