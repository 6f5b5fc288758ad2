pub mod list;
pub mod serve;
pub mod years;
