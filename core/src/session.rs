use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::filter::{derive_visible_projects, toggle_membership};
use crate::types::{FilterCriteria, Project, Sector, Service, SortKey, YearFilter};
use serde::{Deserialize, Serialize};

/// One visitor's state on the portfolio page.
///
/// Every mutation recomputes `visible` eagerly, so readers never observe
/// ids that are stale with respect to `criteria`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowsingSession {
    criteria: FilterCriteria,
    active: Option<String>,
    visible: Vec<String>,
}

impl BrowsingSession {
    pub fn new(catalog: &Catalog) -> Self {
        Self::with_criteria(catalog, FilterCriteria::default())
    }

    pub fn with_criteria(catalog: &Catalog, criteria: FilterCriteria) -> Self {
        let mut session = Self {
            criteria,
            active: None,
            visible: Vec::new(),
        };
        session.recompute(catalog);
        session
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn visible_ids(&self) -> &[String] {
        &self.visible
    }

    /// Resolves the visible ids against the catalog, in display order.
    pub fn visible_projects<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Project> {
        self.visible
            .iter()
            .filter_map(|id| catalog.get(id))
            .collect()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_project<'a>(&self, catalog: &'a Catalog) -> Option<&'a Project> {
        self.active.as_deref().and_then(|id| catalog.get(id))
    }

    pub fn set_query(&mut self, catalog: &Catalog, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.recompute(catalog);
    }

    pub fn toggle_sector(&mut self, catalog: &Catalog, sector: Sector) {
        self.criteria.sectors = toggle_membership(&self.criteria.sectors, sector);
        self.recompute(catalog);
    }

    pub fn toggle_service(&mut self, catalog: &Catalog, service: Service) {
        self.criteria.services = toggle_membership(&self.criteria.services, service);
        self.recompute(catalog);
    }

    pub fn set_year(&mut self, catalog: &Catalog, year: YearFilter) {
        self.criteria.year = year;
        self.recompute(catalog);
    }

    pub fn set_sort(&mut self, catalog: &Catalog, sort: SortKey) {
        self.criteria.sort = sort;
        self.recompute(catalog);
    }

    /// Drops every filter and returns to the default ordering. The open
    /// detail view, if any, stays open.
    pub fn reset(&mut self, catalog: &Catalog) {
        self.criteria = FilterCriteria::default();
        self.recompute(catalog);
    }

    pub fn open_detail<'a>(
        &mut self,
        catalog: &'a Catalog,
        id: &str,
    ) -> Result<&'a Project, CatalogError> {
        let project = catalog.require(id)?;
        self.active = Some(project.id.clone());
        Ok(project)
    }

    pub fn close_detail(&mut self) {
        self.active = None;
    }

    fn recompute(&mut self, catalog: &Catalog) {
        self.visible = derive_visible_projects(catalog.projects(), &self.criteria)
            .into_iter()
            .map(|project| project.id.clone())
            .collect();
    }
}
