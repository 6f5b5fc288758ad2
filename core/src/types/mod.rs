pub mod criteria;
pub mod project;

pub use criteria::{CriteriaParams, FilterCriteria, SortKey, YearFilter};
pub use project::{Kpi, Project, Sector, Service};
