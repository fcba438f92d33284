use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use lookbook_core::{
    paginate, select_model_photos, BrowseFilter, Catalog, CatalogItem, CatalogView, FilterOptions,
    ItemId, DEFAULT_PAGE_SIZE,
};
use lookbook_similarity::{RankingError, SimilarResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::state::{AppState, CacheKey};

const ALLOWED_ORIGINS: &[&str] = &["http://localhost", "http://localhost:3000"];

#[derive(Deserialize)]
struct ProductsQuery {
    brand: Option<String>,
    category: Option<String>,
    subcategory: Option<String>,
    gender: Option<String>,
    page: Option<usize>,
    page_size: Option<usize>,
}

impl ProductsQuery {
    fn filter(&self) -> BrowseFilter {
        BrowseFilter {
            brand: self.brand.clone(),
            category: self.category.clone(),
            subcategory: self.subcategory.clone(),
            gender: self.gender.clone(),
        }
    }
}

#[derive(Deserialize)]
struct SimilarQuery {
    k: Option<usize>,
    #[serde(default)]
    explain: bool,
}

#[derive(Serialize)]
struct StatusResponse {
    items: usize,
    embedded: usize,
    version: u64,
    loaded_at: chrono::DateTime<chrono::Utc>,
    ttl_secs: u64,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(state: Arc<AppState>, port: u16) -> std::io::Result<()> {
        info!(port, "starting HTTP server");
        HttpServer::new(move || {
            let cors = ALLOWED_ORIGINS
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::from(state.clone()))
                .configure(configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

/// Register all routes. `filters` must precede `{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/products", web::get().to(list_products))
        .route("/api/products/filters", web::get().to(filter_options))
        .route("/api/products/{id}", web::get().to(get_product))
        .route("/api/products/{id}/similar", web::get().to(similar_products))
        .route("/api/products/{id}/models", web::get().to(model_photos))
        .route("/api/status", web::get().to(status))
        .route("/api/reload", web::post().to(reload));
}

/// Resolve a path id against the catalog. Integer ids are tried as a fallback.
fn lookup<'a>(catalog: &'a Catalog, raw: &str) -> Option<&'a CatalogItem> {
    catalog.get(&ItemId::from(raw)).or_else(|| {
        raw.parse::<u64>()
            .ok()
            .and_then(|n| catalog.get(&ItemId::Integer(n)))
    })
}

fn not_found(id: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": format!("Product {} not found", id),
        "kind": "not_found"
    }))
}

async fn list_products(
    state: web::Data<AppState>,
    query: web::Query<ProductsQuery>,
) -> ActixResult<HttpResponse> {
    let snapshot = state.store.snapshot();
    let matched = query.filter().apply(snapshot.catalog.iter());

    let page = query.page.unwrap_or(0);
    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    match paginate(&matched, page, page_size) {
        Ok(page) => Ok(HttpResponse::Ok().json(page.map(CatalogItem::to_listing))),
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

async fn filter_options(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let snapshot = state.store.snapshot();
    Ok(HttpResponse::Ok().json(FilterOptions::from_items(snapshot.catalog.iter())))
}

async fn get_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let snapshot = state.store.snapshot();
    match lookup(&snapshot.catalog, &id) {
        Some(item) => Ok(HttpResponse::Ok().json(item.to_listing())),
        None => Ok(not_found(&id)),
    }
}

async fn similar_products(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<SimilarQuery>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let snapshot = state.store.snapshot();
    let Some(anchor) = lookup(&snapshot.catalog, &id) else {
        return Ok(not_found(&id));
    };

    let key = CacheKey {
        anchor: anchor.id.clone(),
        version: snapshot.version,
        k: query.k.unwrap_or(state.default_k),
        explain: query.explain,
    };
    if let Some(cached) = state.cache.get(&key) {
        return Ok(HttpResponse::Ok().json(cached.as_ref()));
    }

    match state.engine.rank_by_id(&key.anchor, snapshot.catalog.as_ref(), key.k) {
        Ok(ranking) => {
            let response = Arc::new(SimilarResponse::from_ranking(
                key.anchor.clone(),
                &ranking,
                key.explain,
            ));
            state.cache.put(key, Arc::clone(&response));
            Ok(HttpResponse::Ok().json(response.as_ref()))
        }
        Err(e) => {
            let body = serde_json::json!({
                "error": e.to_string(),
                "kind": e.kind()
            });
            Ok(match e {
                RankingError::AnchorNotFound(_) => HttpResponse::NotFound().json(body),
                RankingError::MissingEmbedding { .. } | RankingError::MalformedEmbedding { .. } => {
                    HttpResponse::UnprocessableEntity().json(body)
                }
                RankingError::InvalidWeights(_) => HttpResponse::InternalServerError().json(body),
            })
        }
    }
}

async fn model_photos(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let snapshot = state.store.snapshot();
    match lookup(&snapshot.catalog, &id) {
        Some(item) => Ok(HttpResponse::Ok().json(select_model_photos(item))),
        None => Ok(not_found(&id)),
    }
}

async fn status(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let snapshot = state.store.snapshot();
    Ok(HttpResponse::Ok().json(StatusResponse {
        items: snapshot.catalog.len(),
        embedded: snapshot.catalog.embedded_count(),
        version: snapshot.version,
        loaded_at: snapshot.loaded_at,
        ttl_secs: state.store.ttl().as_secs(),
    }))
}

async fn reload(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let store = Arc::clone(&state.store);
    let result = web::block(move || store.reload()).await?;
    match result {
        Ok(snapshot) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": true,
            "version": snapshot.version,
            "items": snapshot.catalog.len()
        }))),
        Err(e) => {
            warn!(error = %e, "manual reload failed");
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
    }
}
