pub mod integer;
pub mod log_level;
