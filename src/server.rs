//! HTTP layer over the generator and analyzer.
//!
//! Thin JSON API mirroring the CLI surface: analyze a password, generate a
//! wordlist into the server's output directory and return its path, download
//! a previously generated file. Downloads are confined to the output
//! directory; traversal attempts are rejected.

use std::path::{Component, Path, PathBuf};

use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, ResponseError, web};
use serde::{Deserialize, Serialize};

use crate::analyzer::analyze;
use crate::engine::{DEFAULT_MAX_LENGTH, Generator, GeneratorOptions};
use crate::export::save_wordlist_txt;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("missing or empty seeds")]
    MissingSeeds,
    #[error("invalid path")]
    InvalidPath,
    #[error("file not found")]
    NotFound,
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingSeeds => StatusCode::BAD_REQUEST,
            ApiError::InvalidPath => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            ok: false,
            error: self.to_string(),
        })
    }
}

struct AppState {
    output_dir: PathBuf,
}

/// Seeds arrive either as a list or as a comma-separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeedsParam {
    List(Vec<String>),
    Csv(String),
}

impl SeedsParam {
    fn into_seeds(self) -> Vec<String> {
        match self {
            SeedsParam::List(v) => v
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            SeedsParam::Csv(s) => crate::io::split_csv_arg(&s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    seeds: SeedsParam,
    length: Option<usize>,
    rules: Option<String>,
    out: Option<String>,
}

#[derive(Serialize)]
struct GenerateResponse {
    ok: bool,
    path: String,
    file: String,
    count: usize,
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    password: String,
    user_inputs: Option<Vec<String>>,
}

#[derive(Serialize)]
struct AnalyzeResponse {
    ok: bool,
    result: crate::analyzer::Analysis,
}

#[derive(Debug, Deserialize)]
struct DownloadQuery {
    path: String,
}

async fn api_analyze(req: web::Json<AnalyzeRequest>) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let user_inputs = req.user_inputs.unwrap_or_default();
    let refs: Vec<&str> = user_inputs.iter().map(|s| s.as_str()).collect();
    let result = analyze(&req.password, &refs);
    Ok(HttpResponse::Ok().json(AnalyzeResponse { ok: true, result }))
}

async fn api_generate(
    state: web::Data<AppState>,
    req: web::Json<GenerateRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let seeds = req.seeds.into_seeds();
    if seeds.is_empty() {
        return Err(ApiError::MissingSeeds);
    }

    let max_length = match req.length {
        Some(n) if n > 0 => n,
        _ => DEFAULT_MAX_LENGTH,
    };
    let options = GeneratorOptions {
        max_length,
        rules: req.rules,
        ..GeneratorOptions::default()
    };
    let words = Generator::new(options).generate(&seeds);

    // Only the file name component of the requested output is honored.
    let file = req
        .out
        .as_deref()
        .and_then(|o| Path::new(o).file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "wordlist.txt".to_string());
    let path = state.output_dir.join(&file);
    save_wordlist_txt(&words, &path).map_err(|e| ApiError::Internal(e.to_string()))?;
    log::info!("wrote {} candidate(s) to {}", words.len(), path.display());

    Ok(HttpResponse::Ok().json(GenerateResponse {
        ok: true,
        path: path.display().to_string(),
        file,
        count: words.len(),
    }))
}

async fn download(
    state: web::Data<AppState>,
    query: web::Query<DownloadQuery>,
) -> Result<HttpResponse, ApiError> {
    let rel = Path::new(&query.path);
    let confined = !rel.as_os_str().is_empty()
        && !rel.is_absolute()
        && rel.components().all(|c| matches!(c, Component::Normal(_)));
    if !confined {
        return Err(ApiError::InvalidPath);
    }
    let full = state.output_dir.join(rel);
    if !full.is_file() {
        return Err(ApiError::NotFound);
    }
    let body = std::fs::read(&full).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", query.path),
        ))
        .body(body))
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/analyze", web::post().to(api_analyze))
        .route("/api/generate", web::post().to(api_generate))
        .route("/download", web::get().to(download));
}

/// Start the blocking HTTP server. Creates the output directory if needed.
pub fn run(host: &str, port: u16, output_dir: PathBuf) -> anyhow::Result<()> {
    std::fs::create_dir_all(&output_dir)?;
    let state = web::Data::new(AppState {
        output_dir: output_dir.clone(),
    });
    log::info!(
        "serving on http://{host}:{port}, output dir {}",
        output_dir.display()
    );
    let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind((host, port))?
        .run();
    actix_web::rt::System::new().block_on(server)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    fn test_state(dir: &tempfile::TempDir) -> web::Data<AppState> {
        web::Data::new(AppState {
            output_dir: dir.path().to_path_buf(),
        })
    }

    #[actix_web::test]
    async fn analyze_returns_score() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new().app_data(test_state(&dir)).configure(configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/analyze")
            .set_json(serde_json::json!({ "password": "password" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["ok"], true);
        assert!(body["result"]["score"].as_u64().unwrap() <= 1);
    }

    #[actix_web::test]
    async fn generate_then_download_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new().app_data(test_state(&dir)).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(serde_json::json!({
                "seeds": "alice,1997",
                "length": 12,
                "out": "mylist.txt"
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["ok"], true);
        assert_eq!(body["file"], "mylist.txt");
        assert!(body["count"].as_u64().unwrap() > 0);

        let req = test::TestRequest::get()
            .uri("/download?path=mylist.txt")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let bytes = test::read_body(resp).await;
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.lines().any(|l| l == "alice1997"));
    }

    #[actix_web::test]
    async fn seeds_accepted_as_list() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new().app_data(test_state(&dir)).configure(configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(serde_json::json!({ "seeds": ["bob", "2024"] }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["ok"], true);
    }

    #[actix_web::test]
    async fn empty_seeds_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new().app_data(test_state(&dir)).configure(configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(serde_json::json!({ "seeds": " , " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn download_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new().app_data(test_state(&dir)).configure(configure),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/download?path=../../etc/passwd")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
