//! RPC method handler for the NexNav JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches method calls to the engine and services via the
//! `App` struct; `dispatch` wraps the outcome in the wire envelope
//! (`{"success":true,...}` or `{"success":false,"message","status"}`).

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::engine::category_engine::CategoryEngineTrait;
use crate::engine::site_manager::SiteManagerTrait;
use crate::engine::snippet_manager::SnippetManagerTrait;
use crate::services::auth_service::AuthServiceTrait;
use crate::services::export_service::ExportServiceTrait;
use crate::services::metadata_scraper::MetadataScraperTrait;
use crate::types::errors::{
    AuthError, CategoryError, ExportError, ScrapeError, SiteError, SnippetError,
};
use crate::types::site::{SiteDraft, SiteFilter, SitePatch};

/// Failed method call, carrying the HTTP status hint for the wire envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: 400, message: message.into() }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self { status: 401, message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self { status: 500, message: message.into() }
    }
}

impl From<SiteError> for ApiError {
    fn from(err: SiteError) -> Self {
        let status = match err {
            SiteError::NotFound(_) => 404,
            SiteError::DuplicateUrl(_) => 409,
            SiteError::Store(_) => 500,
        };
        Self { status, message: err.to_string() }
    }
}

impl From<CategoryError> for ApiError {
    fn from(err: CategoryError) -> Self {
        let status = match err {
            CategoryError::Duplicate(_) => 409,
            CategoryError::Store(_) => 500,
        };
        Self { status, message: err.to_string() }
    }
}

impl From<SnippetError> for ApiError {
    fn from(err: SnippetError) -> Self {
        let status = match err {
            SnippetError::NotFound(_) => 404,
            SnippetError::Store(_) => 500,
        };
        Self { status, message: err.to_string() }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let status = match err {
            AuthError::InvalidPassword | AuthError::InvalidToken => 401,
            AuthError::TokenGeneration(_) => 500,
        };
        Self { status, message: err.to_string() }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        let status = match err {
            ExportError::MalformedInput(_) => 400,
            ExportError::Store(_) => 500,
        };
        Self { status, message: err.to_string() }
    }
}

impl From<ScrapeError> for ApiError {
    fn from(err: ScrapeError) -> Self {
        let status = match err {
            ScrapeError::InvalidUrl(_) => 400,
            ScrapeError::Network(_) => 500,
        };
        Self { status, message: err.to_string() }
    }
}

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, ApiError> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ApiError::bad_request(format!("missing {}", name)))
}

/// Verifies the session token carried in `params`. Every privileged method
/// goes through here; the token is an explicit capability, not ambient state.
fn require_session(app: &App, params: &Value) -> Result<(), ApiError> {
    let token = params
        .get("token")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ApiError::unauthorized("missing session token"))?;
    if !app.auth.validate(token) {
        return Err(ApiError::unauthorized("invalid session token"));
    }
    Ok(())
}

/// Dispatches a method call to the appropriate handler.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, ApiError> {
    let a = app.lock().map_err(|e| ApiError::internal(e.to_string()))?;

    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Auth ───
        "auth.login" => {
            let password = str_param(params, "password")?;
            let token = a.auth.login(password)?;
            Ok(json!({"token": token}))
        }
        "auth.logout" => {
            let token = str_param(params, "token")?;
            a.auth.logout(token);
            Ok(json!({"ok": true}))
        }

        // ─── Sites ───
        "site.list" => {
            let sites = a.site_manager().list_sites();
            Ok(json!({"sites": sites}))
        }
        "site.filter" => {
            let category = params.get("category").and_then(|v| v.as_str()).unwrap_or("all");
            let query = params.get("query").and_then(|v| v.as_str()).unwrap_or("");
            let filter = SiteFilter::parse(category);
            let sites = a.site_manager().filter_sites(&filter, query);
            Ok(json!({"sites": sites}))
        }
        "site.create" => {
            require_session(&a, params)?;
            let draft: SiteDraft = serde_json::from_value(params.clone())
                .map_err(|e| ApiError::bad_request(format!("invalid site payload: {}", e)))?;
            let site = a.site_manager().create_site(draft)?;
            Ok(json!({"site": site}))
        }
        "site.update" => {
            require_session(&a, params)?;
            let id = str_param(params, "id")?;
            let patch: SitePatch = serde_json::from_value(params.clone())
                .map_err(|e| ApiError::bad_request(format!("invalid site payload: {}", e)))?;
            let site = a.site_manager().update_site(id, patch)?;
            Ok(json!({"site": site}))
        }
        "site.delete" => {
            require_session(&a, params)?;
            let id = str_param(params, "id")?;
            a.site_manager().delete_site(id)?;
            Ok(json!({"ok": true}))
        }

        // ─── Categories ───
        "category.list" => {
            let engine = a.category_engine();
            Ok(json!({
                "categories": engine.effective_order(),
                "stored": engine.stored_categories(),
            }))
        }
        "category.add" => {
            require_session(&a, params)?;
            let name = str_param(params, "name")?.trim();
            if name.is_empty() {
                return Err(ApiError::bad_request("category name is empty"));
            }
            a.category_engine().add_category(name)?;
            Ok(json!({"ok": true}))
        }
        "category.rename" => {
            require_session(&a, params)?;
            let from = str_param(params, "from")?;
            let to = str_param(params, "to")?;
            let report = a.category_engine().rename_category(from, to)?;
            serde_json::to_value(&report).map_err(|e| ApiError::internal(e.to_string()))
        }
        "category.delete" => {
            require_session(&a, params)?;
            let name = str_param(params, "name")?;
            let report = a.category_engine().delete_category(name)?;
            serde_json::to_value(&report).map_err(|e| ApiError::internal(e.to_string()))
        }
        "category.move" => {
            require_session(&a, params)?;
            let index = params
                .get("index")
                .and_then(|v| v.as_u64())
                .ok_or_else(|| ApiError::bad_request("missing index"))? as usize;
            let delta = params
                .get("delta")
                .and_then(|v| v.as_i64())
                .ok_or_else(|| ApiError::bad_request("missing delta"))?;
            let categories = a.category_engine().reorder_category(index, delta)?;
            Ok(json!({"categories": categories}))
        }

        // ─── Snippets ───
        "snippet.list" => {
            let snippets = a.snippet_manager().list_snippets();
            Ok(json!({"snippets": snippets}))
        }
        "snippet.get" => {
            let id = str_param(params, "id")?;
            let content = a.snippet_manager().get_snippet(id)?;
            Ok(json!({"content": content}))
        }
        "snippet.create" => {
            require_session(&a, params)?;
            let title = str_param(params, "title")?;
            let description = params.get("description").and_then(|v| v.as_str()).unwrap_or("");
            let code = params.get("code").and_then(|v| v.as_str()).unwrap_or("");
            let meta = a.snippet_manager().create_snippet(title, description, code)?;
            Ok(json!({"snippet": meta}))
        }
        "snippet.update" => {
            require_session(&a, params)?;
            let id = str_param(params, "id")?;
            let title = params.get("title").and_then(|v| v.as_str());
            let description = params.get("description").and_then(|v| v.as_str());
            let code = params.get("code").and_then(|v| v.as_str());
            let meta = a.snippet_manager().update_snippet(id, title, description, code)?;
            Ok(json!({"snippet": meta}))
        }
        "snippet.delete" => {
            require_session(&a, params)?;
            let id = str_param(params, "id")?;
            a.snippet_manager().delete_snippet(id)?;
            Ok(json!({"ok": true}))
        }

        // ─── Metadata scrape ───
        "meta.fetch" => {
            require_session(&a, params)?;
            let url = str_param(params, "url")?;
            let metadata = a.scraper.fetch_metadata(url)?;
            Ok(json!({
                "title": metadata.title,
                "description": metadata.description,
                "icon": metadata.icon,
            }))
        }

        // ─── Data management ───
        "data.export" => {
            require_session(&a, params)?;
            let data = a.export_service().export();
            let data = serde_json::to_value(&data).map_err(|e| ApiError::internal(e.to_string()))?;
            Ok(json!({"data": data}))
        }
        "data.import" => {
            require_session(&a, params)?;
            let payload = params
                .get("data")
                .ok_or_else(|| ApiError::bad_request("missing data"))?;
            let imported = a.export_service().import(payload)?;
            Ok(json!({"imported": imported}))
        }
        "data.reset" => {
            require_session(&a, params)?;
            // Destructive, so the password is re-checked on top of the session.
            let password = str_param(params, "password")?;
            if !a.auth.verify_password(password) {
                return Err(AuthError::InvalidPassword.into());
            }
            a.export_service().reset()?;
            Ok(json!({"ok": true}))
        }

        _ => Err(ApiError::bad_request(format!("unknown method: {}", method))),
    }
}

/// Wraps `handle_method` in the result-with-error wire shape.
pub fn dispatch(app: &Mutex<App>, method: &str, params: &Value) -> Value {
    match handle_method(app, method, params) {
        Ok(Value::Object(mut payload)) => {
            payload.insert("success".to_string(), Value::Bool(true));
            Value::Object(payload)
        }
        Ok(other) => json!({"success": true, "result": other}),
        Err(err) => json!({
            "success": false,
            "message": err.message,
            "status": err.status,
        }),
    }
}
