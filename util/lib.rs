pub mod error;
pub mod serve;
pub mod table;
