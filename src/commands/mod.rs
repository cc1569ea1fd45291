pub mod opts;
pub mod update;
