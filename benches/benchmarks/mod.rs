pub mod hierarchy;
pub mod list;
