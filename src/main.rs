//! NexNav — a self-hosted bookmark/navigation dashboard.
//!
//! Entry point: runs an interactive console demo against an in-memory store.
//! The real entrypoint for deployments is the `nexnav-rpc` binary.

use nexnav::app::{App, DEFAULT_ADMIN_PASSWORD};
use nexnav::engine::category_engine::CategoryEngineTrait;
use nexnav::engine::site_manager::SiteManagerTrait;
use nexnav::engine::snippet_manager::SnippetManagerTrait;
use nexnav::services::auth_service::AuthServiceTrait;
use nexnav::services::export_service::ExportServiceTrait;
use nexnav::types::site::{SiteDraft, SiteFilter};

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn main() {
    println!();
    println!("  NexNav v{} — console demo (in-memory store)", env!("CARGO_PKG_VERSION"));
    println!();

    let app = App::in_memory(DEFAULT_ADMIN_PASSWORD).expect("app init");

    section("Auth");
    let token = app.auth.login(DEFAULT_ADMIN_PASSWORD).expect("login");
    println!("  session token issued: {}...", &token[..8]);
    println!("  valid: {}", app.auth.validate(&token));

    section("Sites");
    let mut sites = app.site_manager();
    for (url, name, category, starred) in [
        ("https://docs.rs", "docs.rs", "development", true),
        ("https://crates.io", "crates.io", "development", false),
        ("https://news.ycombinator.com", "Hacker News", "news", false),
    ] {
        let site = sites
            .create_site(SiteDraft {
                url: url.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                starred,
                ..SiteDraft::default()
            })
            .expect("create site");
        println!("  created {} [{}]", site.name, site.category);
    }
    let featured = sites.filter_sites(&SiteFilter::Featured, "");
    println!("  featured: {}", featured.len());
    let hits = sites.filter_sites(&SiteFilter::All, "crates");
    println!("  search 'crates': {}", hits.len());

    section("Categories");
    let mut categories = app.category_engine();
    categories.add_category("tools").expect("add category");
    println!("  effective order: {:?}", categories.effective_order());
    let report = categories
        .rename_category("news", "reading")
        .expect("rename category");
    println!("  renamed news -> reading ({} sites touched)", report.sites_updated);
    let order = categories.reorder_category(0, 1).expect("reorder");
    println!("  after move: {:?}", order);
    let report = categories.delete_category("development").expect("delete");
    println!("  deleted development ({} sites rehomed)", report.sites_updated);
    println!("  effective order: {:?}", categories.effective_order());

    section("Snippets");
    let mut snippets = app.snippet_manager();
    let meta = snippets
        .create_snippet("hello", "greeting block", "<h1>hello</h1>")
        .expect("create snippet");
    println!("  created snippet '{}'", meta.title);
    println!("  body: {}", snippets.get_snippet(&meta.id).expect("get snippet"));

    section("Backup");
    let mut exporter = app.export_service();
    let backup = exporter.export();
    println!(
        "  exported v{}: {} sites, {} categories",
        backup.version,
        backup.sites.len(),
        backup.categories.len()
    );
    let payload = serde_json::to_value(&backup).expect("serialize backup");
    let imported = exporter.import(&payload).expect("import backup");
    println!("  re-imported {} sites", imported);

    app.auth.logout(&token);
    println!();
    println!("  done.");
}
