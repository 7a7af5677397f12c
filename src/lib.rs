pub mod data;
pub mod menu;
pub mod report;

pub use data::loader::LoadError;
pub use data::model::{Catalog, CourseRecord};
