use crate::error::ApiError;
use crate::handlers::json_config;
use crate::store::SessionStore;
use actix_web::{web, HttpResponse, Scope};
use serde::{Deserialize, Serialize};
use showcase_core::types::{FilterCriteria, Project, Sector, Service, SortKey, YearFilter};
use showcase_core::{BrowsingSession, Catalog};
use uuid::Uuid;

#[derive(Serialize)]
pub struct SessionResponse<'a> {
    pub session_id: Uuid,
    pub criteria: &'a FilterCriteria,
    pub active: Option<&'a Project>,
    pub projects: Vec<&'a Project>,
}

impl<'a> SessionResponse<'a> {
    fn new(session_id: Uuid, session: &'a BrowsingSession, catalog: &'a Catalog) -> Self {
        Self {
            session_id,
            criteria: session.criteria(),
            active: session.active_project(catalog),
            projects: session.visible_projects(catalog),
        }
    }
}

#[derive(Deserialize)]
pub struct SetQueryRequest {
    pub query: String,
}

#[derive(Deserialize)]
pub struct ToggleSectorRequest {
    pub sector: Sector,
}

#[derive(Deserialize)]
pub struct ToggleServiceRequest {
    pub service: Service,
}

#[derive(Deserialize)]
pub struct SetYearRequest {
    pub year: YearFilter,
}

#[derive(Deserialize)]
pub struct SetSortRequest {
    pub sort: SortKey,
}

#[derive(Deserialize)]
pub struct OpenDetailRequest {
    pub id: String,
}

fn parse_session_id(path: &str) -> Result<Uuid, ApiError> {
    path.parse::<Uuid>()
        .map_err(|_| ApiError::InvalidSessionId(path.to_string()))
}

fn respond(id: Uuid, session: &BrowsingSession, catalog: &Catalog) -> HttpResponse {
    HttpResponse::Ok().json(SessionResponse::new(id, session, catalog))
}

/// Applies a mutation to the session named in the path and renders the result.
fn mutate<F>(
    path: &str,
    store: &SessionStore,
    catalog: &Catalog,
    f: F,
) -> Result<HttpResponse, ApiError>
where
    F: FnOnce(&mut BrowsingSession) -> Result<(), ApiError>,
{
    let id = parse_session_id(path)?;
    let ((), session) = store.update(id, f)?;
    Ok(respond(id, &session, catalog))
}

pub fn attach_routes(scope: Scope) -> Scope {
    scope
        .app_data(json_config())
        .route("", web::post().to(create_session))
        .route("/{id}", web::get().to(get_session))
        .route("/{id}", web::delete().to(delete_session))
        .route("/{id}/query", web::put().to(set_query))
        .route("/{id}/sectors/toggle", web::post().to(toggle_sector))
        .route("/{id}/services/toggle", web::post().to(toggle_service))
        .route("/{id}/year", web::put().to(set_year))
        .route("/{id}/sort", web::put().to(set_sort))
        .route("/{id}/reset", web::post().to(reset_session))
        .route("/{id}/active", web::put().to(open_detail))
        .route("/{id}/active", web::delete().to(close_detail))
}

pub async fn create_session(
    store: web::Data<SessionStore>,
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse, ApiError> {
    let (id, session) = store.create(&catalog);
    tracing::info!("Started browsing session {}", id);
    Ok(HttpResponse::Created().json(SessionResponse::new(id, &session, &catalog)))
}

pub async fn get_session(
    path: web::Path<String>,
    store: web::Data<SessionStore>,
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_session_id(&path)?;
    let session = store.get(id)?;
    Ok(respond(id, &session, &catalog))
}

pub async fn delete_session(
    path: web::Path<String>,
    store: web::Data<SessionStore>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_session_id(&path)?;
    store.remove(id)?;
    tracing::info!("Closed browsing session {}", id);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Session deleted successfully"
    })))
}

pub async fn set_query(
    path: web::Path<String>,
    req: web::Json<SetQueryRequest>,
    store: web::Data<SessionStore>,
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse, ApiError> {
    let query = req.into_inner().query;
    mutate(&path, &store, &catalog, |session| {
        session.set_query(&catalog, query);
        Ok(())
    })
}

pub async fn toggle_sector(
    path: web::Path<String>,
    req: web::Json<ToggleSectorRequest>,
    store: web::Data<SessionStore>,
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse, ApiError> {
    mutate(&path, &store, &catalog, |session| {
        session.toggle_sector(&catalog, req.sector);
        Ok(())
    })
}

pub async fn toggle_service(
    path: web::Path<String>,
    req: web::Json<ToggleServiceRequest>,
    store: web::Data<SessionStore>,
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse, ApiError> {
    mutate(&path, &store, &catalog, |session| {
        session.toggle_service(&catalog, req.service);
        Ok(())
    })
}

pub async fn set_year(
    path: web::Path<String>,
    req: web::Json<SetYearRequest>,
    store: web::Data<SessionStore>,
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse, ApiError> {
    mutate(&path, &store, &catalog, |session| {
        session.set_year(&catalog, req.year);
        Ok(())
    })
}

pub async fn set_sort(
    path: web::Path<String>,
    req: web::Json<SetSortRequest>,
    store: web::Data<SessionStore>,
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse, ApiError> {
    mutate(&path, &store, &catalog, |session| {
        session.set_sort(&catalog, req.sort);
        Ok(())
    })
}

pub async fn reset_session(
    path: web::Path<String>,
    store: web::Data<SessionStore>,
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse, ApiError> {
    mutate(&path, &store, &catalog, |session| {
        session.reset(&catalog);
        Ok(())
    })
}

pub async fn open_detail(
    path: web::Path<String>,
    req: web::Json<OpenDetailRequest>,
    store: web::Data<SessionStore>,
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse, ApiError> {
    mutate(&path, &store, &catalog, |session| {
        session.open_detail(&catalog, &req.id)?;
        Ok(())
    })
}

pub async fn close_detail(
    path: web::Path<String>,
    store: web::Data<SessionStore>,
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse, ApiError> {
    mutate(&path, &store, &catalog, |session| {
        session.close_detail();
        Ok(())
    })
}
