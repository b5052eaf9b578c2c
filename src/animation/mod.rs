pub mod ease;
pub mod ops;
pub mod track;
pub mod value;
