pub mod field;
pub mod ring;
