pub mod applescript;
pub mod track;
