use crate::config::Config;
use crate::handlers::{self, projects, sessions, site};
use crate::store::SessionStore;
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web::{self, Data},
    App, HttpServer,
};
use futures::{Future, TryFutureExt};
use serde::{Deserialize, Serialize};
use showcase_core::{Catalog, SiteProfile};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
#[serde(crate = "serde")]
pub enum CorsOptions {
    Permissive,
    Custom(Vec<String>, usize),
}

impl CorsOptions {
    pub fn from_origins(origins: &[String]) -> Self {
        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            CorsOptions::Permissive
        } else {
            CorsOptions::Custom(origins.to_vec(), 3600)
        }
    }
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Actix(#[from] std::io::Error),
}

#[derive(Clone, Debug)]
pub struct ApiServer {
    config: Config,
    catalog: Catalog,
    site: SiteProfile,
}

impl ApiServer {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let site = config.site_profile();
        Self {
            config,
            catalog,
            site,
        }
    }

    pub fn print_useful_info(&self) {
        println!("\n🌐 Portfolio API starting up:");
        println!(
            "   🚀 HTTP server ready at: \x1b[36mhttp://{}:{}\x1b[0m",
            self.config.http.host, self.config.http.port
        );
        println!(
            "   📁 Serving {} projects across {} years",
            self.catalog.len(),
            self.catalog.years().len()
        );

        println!("\n⚡Quick Start ⚡");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        println!(
            "\x1b[33mcurl \x1b[36m'http://{}:{}/projects?q=seo&sort=newest'\x1b[0m",
            self.config.http.host, self.config.http.port
        );
        println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!();
    }

    pub fn start(self) -> Result<impl Future<Output = Result<(), ServerError>>, ServerError> {
        let catalog = Data::new(self.catalog.clone());
        let site = Data::new(self.site.clone());
        let store = Data::new(SessionStore::with_idle_timeout(
            self.config.sessions.idle_timeout(),
        ));
        let cors_options = CorsOptions::from_origins(&self.config.http.cors_allowed_origins);

        let server = HttpServer::new(move || {
            let cors = Self::get_cors(cors_options.clone());
            Self::create_app_entry(cors, catalog.clone(), site.clone(), store.clone())
        })
        .bind((self.config.http.host.as_str(), self.config.http.port))?
        .run()
        .map_err(ServerError::Actix);

        tracing::info!(
            "Listening on {}:{}",
            self.config.http.host,
            self.config.http.port
        );
        self.print_useful_info();

        Ok(server)
    }

    pub(crate) fn create_app_entry(
        cors: Cors,
        catalog: Data<Catalog>,
        site: Data<SiteProfile>,
        store: Data<SessionStore>,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Response = ServiceResponse<impl MessageBody>,
            Config = (),
            InitError = (),
            Error = actix_web::Error,
        >,
    > {
        App::new()
            .app_data(catalog)
            .app_data(site)
            .app_data(store)
            .app_data(handlers::query_config())
            .app_data(handlers::json_config())
            .route("/health", web::get().to(handlers::health))
            .service(
                web::scope("/projects")
                    .route("", web::get().to(projects::list_projects))
                    .route("/{id}", web::get().to(projects::get_project)),
            )
            .route("/filters", web::get().to(projects::list_filters))
            .service(sessions::attach_routes(web::scope("/sessions")))
            .service(
                web::scope("/site")
                    .route("/navigation", web::get().to(site::navigation))
                    .route("/footer", web::get().to(site::footer)),
            )
            .wrap(Logger::default())
            .wrap(cors)
    }

    fn get_cors(cors: CorsOptions) -> Cors {
        match cors {
            CorsOptions::Permissive => Cors::permissive(),
            CorsOptions::Custom(origins, max_age) => origins
                .into_iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(&origin))
                .allow_any_method()
                .allow_any_header()
                .max_age(max_age),
        }
    }
}
