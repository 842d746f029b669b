pub mod group;
pub mod join_code;
