// User Intake - Web Server
// Form entry, stored-record listing, one-click seeding, CSV export endpoint.

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Router,
};
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;
use user_intake::{
    export_csv, generate_batch, parse_submission, Config, RawSubmission, RecordStore, UserRecord,
    EXPENSE_CATEGORIES, GENDER_OPTIONS, SEED_BATCH_SIZE,
};

/// Shared application state
#[derive(Clone)]
struct AppState {
    store: Arc<Mutex<RecordStore>>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET / - Form plus stored-record listing
async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.lock().unwrap();

    match store.find_all() {
        Ok(records) => Html(render_page(&records, None)).into_response(),
        Err(e) => {
            eprintln!("Error loading records: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_page(&[], Some(&format!("Storage failure: {}", e)))),
            )
                .into_response()
        }
    }
}

/// POST / - Ingest one form submission, then re-render the listing
async fn submit(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> impl IntoResponse {
    let raw = submission_from_fields(&fields);

    let record = match parse_submission(&raw) {
        Ok(record) => record,
        Err(e) => {
            // Validation failure: nothing is written, prompt re-entry.
            let store = state.store.lock().unwrap();
            let records = store.find_all().unwrap_or_default();
            return (
                StatusCode::BAD_REQUEST,
                Html(render_page(&records, Some(&e.to_string()))),
            )
                .into_response();
        }
    };

    let store = state.store.lock().unwrap();
    if let Err(e) = store.insert_one(&record) {
        eprintln!("Error saving record: {}", e);
        let records = store.find_all().unwrap_or_default();
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(render_page(&records, Some(&format!("Storage failure: {}", e)))),
        )
            .into_response();
    }

    match store.find_all() {
        Ok(records) => Html(render_page(&records, Some("Data saved successfully!"))).into_response(),
        Err(e) => {
            eprintln!("Error loading records: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_page(&[], Some(&format!("Storage failure: {}", e)))),
            )
                .into_response()
        }
    }
}

/// POST /seed - Insert 100 synthetic records, then back to the listing
async fn seed(State(state): State<AppState>) -> impl IntoResponse {
    let batch = generate_batch(SEED_BATCH_SIZE);

    let mut store = state.store.lock().unwrap();
    match store.insert_many(&batch) {
        Ok(()) => Redirect::to("/").into_response(),
        Err(e) => {
            eprintln!("Error seeding records: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_page(&[], Some(&format!("Storage failure: {}", e)))),
            )
                .into_response()
        }
    }
}

/// GET /export - Write the CSV file and report where it landed
async fn export(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.lock().unwrap();

    let records = match store.find_all() {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error loading records for export: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Storage failure: {}", e),
            )
                .into_response();
        }
    };

    match export_csv(&records, None) {
        Ok(path) => format!("Exported {} records to {}", records.len(), path.display())
            .into_response(),
        Err(e) => {
            eprintln!("Error writing CSV: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Export failed: {}", e),
            )
                .into_response()
        }
    }
}

/// Map raw urlencoded pairs onto the structured submission the ingestion
/// layer expects: single-valued demographics plus an explicit
/// category -> amount mapping for every selected category.
fn submission_from_fields(fields: &[(String, String)]) -> RawSubmission {
    let first = |name: &str| -> String {
        fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    };

    let mut raw = RawSubmission {
        age: first("age"),
        gender: first("gender"),
        income: first("income"),
        ..Default::default()
    };

    for (key, value) in fields {
        if key == "expense_categories" {
            let amount = first(&format!("{}_amount", value));
            raw.expenses.insert(value.clone(), amount);
        }
    }

    raw
}

// ============================================================================
// Page rendering
// ============================================================================

fn render_page(records: &[UserRecord], message: Option<&str>) -> String {
    let mut category_inputs = String::new();
    for cat in EXPENSE_CATEGORIES {
        let label = cat.replace('_', " ");
        category_inputs.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"expense_categories\" value=\"{cat}\"> {label}</label>\n\
             <input type=\"number\" name=\"{cat}_amount\" step=\"0.01\" placeholder=\"Amount\"><br>\n"
        ));
    }

    let mut gender_options = String::from("<option value=\"\">Select</option>");
    for g in GENDER_OPTIONS {
        gender_options.push_str(&format!("<option value=\"{g}\">{g}</option>"));
    }

    let message_html = message
        .map(|m| format!("<p class=\"message\">{}</p>", escape_html(m)))
        .unwrap_or_default();

    let mut rows = String::new();
    for record in records {
        let expenses_json =
            serde_json::to_string(&record.expenses).unwrap_or_else(|_| "{}".to_string());
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            record.age,
            escape_html(&record.gender),
            record.income,
            escape_html(&expenses_json),
        ));
    }

    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n  <title>User Data Form</title>\n</head>\n<body>\n  <h1>Enter User Details</h1>\n  <form method=\"post\" action=\"/\">\n    <label>Age: <input type=\"number\" name=\"age\" required></label>\n    <label>Gender: <select name=\"gender\" required>{gender_options}</select></label>\n    <label>Total Income: <input type=\"number\" name=\"income\" step=\"0.01\" required></label>\n    <fieldset>\n      <legend>Expenses</legend>\n      {category_inputs}\n    </fieldset>\n    <button type=\"submit\">Submit</button>\n  </form>\n  <form action=\"/seed\" method=\"post\">\n    <button type=\"submit\">Seed {SEED_BATCH_SIZE} Random Entries</button>\n  </form>\n  {message_html}\n  <h2>Stored Entries</h2>\n  <table border=\"1\">\n    <thead><tr><th>Age</th><th>Gender</th><th>Income</th><th>Expenses</th></tr></thead>\n    <tbody>\n{rows}    </tbody>\n  </table>\n</body>\n</html>\n"
    )
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 User Intake - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let store = match RecordStore::open(&config.db_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ Failed to open store at {:?}: {}", config.db_path, e);
            std::process::exit(1);
        }
    };
    println!("✓ Store opened: {:?}", config.db_path);

    let state = AppState {
        store: Arc::new(Mutex::new(store)),
    };

    let app = Router::new()
        .route("/", get(index).post(submit))
        .route("/seed", post(seed))
        .route("/export", get(export))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://{}", config.bind_addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
