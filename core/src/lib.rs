pub mod catalog;
pub mod error;
pub mod filter;
pub mod session;
pub mod site;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, CriteriaError};
pub use filter::{derive_visible_projects, toggle_membership};
pub use session::BrowsingSession;
pub use site::SiteProfile;

pub type CatalogResult<T> = Result<T, CatalogError>;
