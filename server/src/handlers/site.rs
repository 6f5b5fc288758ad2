use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use showcase_core::site::{ContactDetails, NavItem, NavLink, SocialLink};
use showcase_core::SiteProfile;

#[derive(Deserialize)]
pub struct NavigationQuery {
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Serialize)]
pub struct NavigationResponse<'a> {
    pub name: &'a str,
    pub items: Vec<NavItem<'a>>,
    pub active: Option<&'a NavLink>,
}

#[derive(Serialize)]
pub struct FooterResponse<'a> {
    pub name: &'a str,
    pub links: &'a [NavLink],
    pub socials: &'a [SocialLink],
    pub highlights: &'a [String],
    pub contact: &'a ContactDetails,
}

/// GET /site/navigation?path=/our-work - Header links with the current page highlighted
pub async fn navigation(
    query: web::Query<NavigationQuery>,
    site: web::Data<SiteProfile>,
) -> HttpResponse {
    let path = query.path.as_deref().unwrap_or("/");

    HttpResponse::Ok().json(NavigationResponse {
        name: &site.name,
        items: site.navigation_for(path),
        active: site.active_link(path),
    })
}

pub async fn footer(site: web::Data<SiteProfile>) -> HttpResponse {
    HttpResponse::Ok().json(FooterResponse {
        name: &site.name,
        links: &site.footer_links,
        socials: &site.socials,
        highlights: &site.highlights,
        contact: &site.contact,
    })
}
