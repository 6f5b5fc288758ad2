use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use showcase_core::types::{CriteriaParams, FilterCriteria, Project, Sector, Service, SortKey};
use showcase_core::{derive_visible_projects, Catalog};

#[derive(Serialize)]
pub struct ListProjectsResponse<'a> {
    pub criteria: FilterCriteria,
    pub total: usize,
    pub projects: Vec<&'a Project>,
}

#[derive(Serialize)]
pub struct GetProjectResponse<'a> {
    pub project: &'a Project,
}

#[derive(Serialize)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct FiltersResponse {
    pub sectors: Vec<Sector>,
    pub services: Vec<Service>,
    pub years: Vec<i32>,
    pub sort: Vec<SortOption>,
}

/// GET /projects - Visible projects for the given criteria
///
/// Query parameters:
/// - q (optional): Search text, matched case-insensitively against title, brand, summary and tags
/// - sectors (optional): Comma-separated sector labels or slugs
/// - services (optional): Comma-separated services; a project matches if it has any of them
/// - year (optional): "all" (default) or an exact year
/// - sort (optional): newest (default), oldest, brand-az, brand-za
///
/// Unknown facet values are rejected with 400 rather than silently matching nothing.
pub async fn list_projects(
    query: web::Query<CriteriaParams>,
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse, ApiError> {
    let criteria = query.into_inner().into_criteria()?;
    let projects = derive_visible_projects(catalog.projects(), &criteria);

    Ok(HttpResponse::Ok().json(ListProjectsResponse {
        criteria,
        total: catalog.len(),
        projects,
    }))
}

pub async fn get_project(
    path: web::Path<String>,
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse, ApiError> {
    ok_json!(catalog
        .require(&path)
        .map(|project| GetProjectResponse { project }))
}

/// GET /filters - Options for the sector chips, service chips, year and sort dropdowns
pub async fn list_filters(catalog: web::Data<Catalog>) -> HttpResponse {
    HttpResponse::Ok().json(FiltersResponse {
        sectors: Sector::ALL.to_vec(),
        services: Service::ALL.to_vec(),
        years: catalog.years(),
        sort: SortKey::ALL
            .into_iter()
            .map(|key| SortOption {
                value: key.as_str(),
                label: key.label(),
            })
            .collect(),
    })
}
