//! Route table and axum router wiring.
//!
//! Every endpoint is registered in one explicit method+path table. Adding the
//! same method+path twice fails at startup. Each path gets a method fallback
//! that answers 405 with an `Allow` header, and unknown paths get a JSON 404.

use std::collections::BTreeMap;

use axum::{
    extract::{DefaultBodyLimit, Request},
    handler::Handler,
    http::{header, Method},
    middleware,
    response::{IntoResponse, Response},
    routing::{MethodFilter, MethodRouter},
    Router,
};

use tally_core::error::{Result, TallyError};
use tally_core::{Counter, Pet};

use crate::api::{collection, pets, ApiError, Collection};
use crate::app_state::AppState;
use crate::obs::track::track;
use crate::ops;

struct PathRoutes {
    methods: Vec<Method>,
    router: MethodRouter<AppState>,
}

#[derive(Default)]
pub struct RouteTable {
    paths: BTreeMap<String, PathRoutes>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `method` on `path`.
    pub fn add<H, T>(&mut self, method: Method, path: impl Into<String>, handler: H) -> Result<&mut Self>
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        let path = path.into();
        let filter = MethodFilter::try_from(method.clone())
            .map_err(|_| TallyError::Internal(format!("unsupported route method: {method}")))?;

        let entry = self.paths.entry(path.clone()).or_insert_with(|| PathRoutes {
            methods: Vec::new(),
            router: MethodRouter::new(),
        });
        if entry.methods.contains(&method) {
            return Err(TallyError::Internal(format!("duplicate route: {method} {path}")));
        }
        entry.methods.push(method);
        let router = std::mem::replace(&mut entry.router, MethodRouter::new());
        entry.router = router.on(filter, handler);
        Ok(self)
    }

    /// Register the CRUD routes of a collection.
    pub fn add_collection<R: Collection>(&mut self) -> Result<&mut Self> {
        let item = R::item_route();
        self.add(Method::GET, R::PATH, collection::list::<R>)?
            .add(Method::POST, item.clone(), collection::create::<R>)?
            .add(Method::GET, item.clone(), collection::read::<R>)?
            .add(Method::PUT, item.clone(), collection::update::<R>)?
            .add(Method::DELETE, item, collection::delete::<R>)
    }

    /// Wired methods for a path template, if the path is registered.
    pub fn allowed(&self, path: &str) -> Option<&[Method]> {
        self.paths.get(path).map(|p| p.methods.as_slice())
    }

    /// Every `(method, path)` pair, ordered by path.
    pub fn routes(&self) -> Vec<(Method, &str)> {
        self.paths
            .iter()
            .flat_map(|(path, p)| p.methods.iter().map(move |m| (m.clone(), path.as_str())))
            .collect()
    }

    pub fn into_router(self) -> Router<AppState> {
        let mut router = Router::new();
        for (path, p) in self.paths {
            let allow = allow_header(&p.methods);
            let template = path.clone();
            let method_router = p.router.fallback(move |method: Method| {
                let allow = allow.clone();
                let template = template.clone();
                async move { method_not_allowed(method, &template, allow) }
            });
            router = router.route(&path, method_router);
        }
        router.fallback(not_found)
    }
}

/// axum answers HEAD with any GET handler, so HEAD is advertised with it.
fn allow_header(methods: &[Method]) -> String {
    let mut allow: Vec<&str> = methods.iter().map(Method::as_str).collect();
    if methods.contains(&Method::GET) && !methods.contains(&Method::HEAD) {
        allow.push("HEAD");
    }
    allow.join(", ")
}

fn method_not_allowed(method: Method, path: &str, allow: String) -> Response {
    let err = ApiError(TallyError::MethodNotAllowed(format!(
        "method {method} is not allowed on {path}"
    )));
    ([(header::ALLOW, allow)], err).into_response()
}

async fn not_found(req: Request) -> ApiError {
    ApiError(TallyError::NotFound(format!(
        "no route for {} {}",
        req.method(),
        req.uri().path()
    )))
}

/// The service's full route table.
pub fn route_table() -> Result<RouteTable> {
    let mut table = RouteTable::new();
    table
        .add(Method::GET, "/", ops::index)?
        .add(Method::GET, "/health", ops::health)?
        .add(Method::GET, "/readyz", ops::readyz)?
        .add(Method::GET, "/metrics", ops::metrics)?
        .add_collection::<Counter>()?
        .add_collection::<Pet>()?
        .add(Method::PUT, format!("{}/:name/purchase", Pet::PATH), pets::purchase)?;
    Ok(table)
}

pub fn build_router(state: AppState) -> Result<Router> {
    let table = route_table()?;
    for (method, path) in table.routes() {
        tracing::debug!(%method, path, "route");
    }

    let max_body = state.cfg().server.max_body_bytes;
    Ok(table
        .into_router()
        .route_layer(middleware::from_fn_with_state(state.clone(), track))
        .layer(DefaultBodyLimit::max(max_body))
        .with_state(state))
}
