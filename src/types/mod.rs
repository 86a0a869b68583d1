pub mod place;
pub mod track;
