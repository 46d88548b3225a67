pub mod help;
pub mod list;
pub mod show;
pub mod update;
