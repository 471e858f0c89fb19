pub mod entities;
pub mod records;
