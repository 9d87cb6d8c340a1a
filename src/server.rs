//! HTTP server exposing the educator endpoints
//!
//! Each request is independent: read parameters, render the prompt, call
//! the Gemini API once, post-process, return JSON. No shared mutable state
//! beyond the read-only Config and the pooled HTTP client.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use http_body_util::{BodyExt, Full, Limited};
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use reqwest::Client;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{
    AnswerResponse, AssignmentResponse, LessonPlanResponse, LmsIntegrationResponse,
    QuestionAnsweringRequest, QuizResponse, SummarizeRequest, SummaryResponse,
};
use crate::prompts;
use crate::quiz::parse_quiz;
use crate::service::call_gemini_endpoint;

/// Maximum request body size (1MB)
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Generation call timeout
const CLIENT_TIMEOUT_SECS: u64 = 60;

/// Educator backend HTTP server
pub struct ApiServer {
    config: Arc<Config>,
    client: Client,
}

impl ApiServer {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(CLIENT_TIMEOUT_SECS))
            .build()?;

        Ok(Self { config, client })
    }

    /// Bind and start serving. Returns the bound address (port 0 picks a
    /// free one); the accept loop runs on a background task.
    pub async fn start(&self, host: IpAddr, port: u16) -> Result<SocketAddr> {
        let listener = TcpListener::bind(SocketAddr::new(host, port))
            .await
            .map_err(|e| anyhow!("Failed to bind to {}:{}: {}", host, port, e))?;
        let addr = listener.local_addr()?;

        info!("Educator backend listening on http://{}", addr);

        let config = self.config.clone();
        let client = self.client.clone();

        tokio::spawn(async move {
            loop {
                let (stream, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(e) => {
                        error!("Failed to accept connection: {}", e);
                        continue;
                    }
                };

                let io = TokioIo::new(stream);
                let config = config.clone();
                let client = client.clone();

                tokio::spawn(async move {
                    let service = service_fn(|req| {
                        let config = config.clone();
                        let client = client.clone();
                        async move { handle_request(req, config, client).await }
                    });

                    if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                        if !e.to_string().contains("connection closed") {
                            error!("Error serving connection: {}", e);
                        }
                    }
                });
            }
        });

        Ok(addr)
    }
}

/// Route one HTTP request
async fn handle_request(
    req: Request<Incoming>,
    config: Arc<Config>,
    client: Client,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(|s| s.to_string());

    // Handle CORS preflight
    if method == Method::OPTIONS {
        return Ok(cors_response(
            Response::builder()
                .status(StatusCode::OK)
                .body(Full::new(Bytes::new()))
                .unwrap(),
            &config.allowed_origin,
        ));
    }

    let response = match (method, path.as_str()) {
        (Method::GET, "/lesson-plan") => handle_lesson_plan(query, &config, &client).await,
        (Method::GET, "/quiz") => handle_quiz(query, &config, &client).await,
        (Method::GET, "/assignment") => handle_assignment(query, &config, &client).await,
        (Method::POST, "/summarize") => handle_summarize(req, &config, &client).await,
        (Method::POST, "/integrate-lms") => handle_integrate_lms(req).await,
        (Method::POST, "/question-answering") => {
            handle_question_answering(req, &config, &client).await
        }
        _ => match allowed_method(path.as_str()) {
            Some(allow) => {
                let mut response =
                    json_error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
                response.headers_mut().insert("Allow", allow.parse().unwrap());
                response
            }
            None => Response::builder()
                .status(StatusCode::NOT_FOUND)
                .header("Content-Type", "text/plain")
                .body(Full::new(Bytes::from("Not Found")))
                .unwrap(),
        },
    };

    Ok(cors_response(response, &config.allowed_origin))
}

/// Render the prompt, call Gemini once, trim the generated text
async fn generate(client: &Client, config: &Config, prompt: &str) -> Result<String, ApiError> {
    let text = call_gemini_endpoint(client, config, prompt)
        .await
        .map_err(ApiError::Generation)?;
    Ok(text.trim().to_string())
}

async fn handle_lesson_plan(
    query: Option<String>,
    config: &Config,
    client: &Client,
) -> Response<Full<Bytes>> {
    let topic = get_query_param(query.as_deref(), "topic").unwrap_or_default();

    let prompt = match prompts::lesson_plan_prompt(&topic) {
        Ok(p) => p,
        Err(e) => return api_error_response(&e),
    };

    match generate(client, config, &prompt).await {
        Ok(lesson_plan) => json_body_response(&LessonPlanResponse { lesson_plan }),
        Err(e) => api_error_response(&e),
    }
}

async fn handle_quiz(
    query: Option<String>,
    config: &Config,
    client: &Client,
) -> Response<Full<Bytes>> {
    let topic = get_query_param(query.as_deref(), "topic").unwrap_or_default();

    let prompt = match prompts::quiz_prompt(&topic) {
        Ok(p) => p,
        Err(e) => return api_error_response(&e),
    };

    match generate(client, config, &prompt).await {
        // Parse failures degrade to a placeholder question, not an error
        Ok(text) => json_body_response(&QuizResponse {
            quiz: parse_quiz(&text, topic.trim()),
        }),
        Err(e) => api_error_response(&e),
    }
}

async fn handle_assignment(
    query: Option<String>,
    config: &Config,
    client: &Client,
) -> Response<Full<Bytes>> {
    let topic = get_query_param(query.as_deref(), "topic").unwrap_or_default();

    let prompt = match prompts::assignment_prompt(&topic) {
        Ok(p) => p,
        Err(e) => return api_error_response(&e),
    };

    match generate(client, config, &prompt).await {
        Ok(assignment) => json_body_response(&AssignmentResponse { assignment }),
        Err(e) => api_error_response(&e),
    }
}

async fn handle_summarize(
    req: Request<Incoming>,
    config: &Config,
    client: &Client,
) -> Response<Full<Bytes>> {
    let body = match read_body_with_limit(req, MAX_BODY_SIZE).await {
        Ok(b) => b,
        Err(e) => return json_error_response(StatusCode::BAD_REQUEST, &e),
    };

    let request: SummarizeRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(_) => return json_error_response(StatusCode::BAD_REQUEST, "Invalid request body"),
    };

    let prompt = prompts::summary_prompt(request.topic.as_deref());

    match generate(client, config, &prompt).await {
        Ok(summary) => json_body_response(&SummaryResponse { summary }),
        Err(e) => api_error_response(&e),
    }
}

/// Mock LMS integration: echo the payload with a fixed status, no network call
async fn handle_integrate_lms(req: Request<Incoming>) -> Response<Full<Bytes>> {
    let body = match read_body_with_limit(req, MAX_BODY_SIZE).await {
        Ok(b) => b,
        Err(e) => return json_error_response(StatusCode::BAD_REQUEST, &e),
    };

    let data: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(_) => return json_error_response(StatusCode::BAD_REQUEST, "Invalid request body"),
    };

    json_body_response(&LmsIntegrationResponse {
        status: "Integrated successfully".to_string(),
        data,
    })
}

async fn handle_question_answering(
    req: Request<Incoming>,
    config: &Config,
    client: &Client,
) -> Response<Full<Bytes>> {
    let body = match read_body_with_limit(req, MAX_BODY_SIZE).await {
        Ok(b) => b,
        Err(e) => return json_error_response(StatusCode::BAD_REQUEST, &e),
    };

    let request: QuestionAnsweringRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(_) => return json_error_response(StatusCode::BAD_REQUEST, "Invalid request body"),
    };

    // Empty context and question are accepted; the call is issued regardless
    let prompt = prompts::question_answering_prompt(&request.context, &request.question);

    match generate(client, config, &prompt).await {
        Ok(answer) => json_body_response(&AnswerResponse { answer }),
        Err(e) => api_error_response(&e),
    }
}

/// The single method a known path accepts, for 405 vs 404 on a route miss
fn allowed_method(path: &str) -> Option<&'static str> {
    match path {
        "/lesson-plan" | "/quiz" | "/assignment" => Some("GET"),
        "/summarize" | "/integrate-lms" | "/question-answering" => Some("POST"),
        _ => None,
    }
}

/// Extract and percent-decode a query parameter
fn get_query_param(query: Option<&str>, name: &str) -> Option<String> {
    query.and_then(|q| {
        q.split('&').find_map(|param| {
            let mut parts = param.splitn(2, '=');
            if parts.next()? == name {
                let raw = parts.next()?.replace('+', " ");
                Some(
                    urlencoding::decode(&raw)
                        .map(|c| c.into_owned())
                        .unwrap_or(raw),
                )
            } else {
                None
            }
        })
    })
}

/// Add CORS headers (restricted to the single configured origin)
fn cors_response(mut response: Response<Full<Bytes>>, allowed_origin: &str) -> Response<Full<Bytes>> {
    let headers = response.headers_mut();
    if let Ok(origin) = allowed_origin.parse() {
        headers.insert("Access-Control-Allow-Origin", origin);
    }
    headers.insert(
        "Access-Control-Allow-Methods",
        "GET, POST, OPTIONS".parse().unwrap(),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        "Content-Type".parse().unwrap(),
    );
    headers.insert("Access-Control-Allow-Credentials", "true".parse().unwrap());
    response
}

/// Read request body with size limit (streaming enforcement to prevent memory exhaustion)
async fn read_body_with_limit(req: Request<Incoming>, max_size: usize) -> Result<Bytes, String> {
    let limited = Limited::new(req.into_body(), max_size);
    match limited.collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(e) => {
            let err_str = e.to_string();
            if err_str.contains("length limit exceeded") {
                Err(format!("Request body too large (max {} bytes)", max_size))
            } else {
                Err("Failed to read body".to_string())
            }
        }
    }
}

/// Serialize a response body as JSON
fn json_body_response<T: serde::Serialize>(body: &T) -> Response<Full<Bytes>> {
    match serde_json::to_string(body) {
        Ok(json) => json_response(StatusCode::OK, &json),
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            json_error_response(StatusCode::INTERNAL_SERVER_ERROR, "Serialization failed")
        }
    }
}

/// Map an ApiError to its JSON error response
fn api_error_response(err: &ApiError) -> Response<Full<Bytes>> {
    json_error_response(err.status_code(), &err.to_string())
}

/// Create JSON error response with safe serialization
fn json_error_response(status: StatusCode, error: &str) -> Response<Full<Bytes>> {
    let body = serde_json::to_string(&json!({"error": error})).unwrap();
    json_response(status, &body)
}

/// Create JSON response
fn json_response(status: StatusCode, body: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_query_param_basic() {
        assert_eq!(
            get_query_param(Some("topic=Photosynthesis"), "topic"),
            Some("Photosynthesis".to_string())
        );
    }

    #[test]
    fn test_get_query_param_percent_decoded() {
        assert_eq!(
            get_query_param(Some("topic=World%20War%20II"), "topic"),
            Some("World War II".to_string())
        );
        assert_eq!(
            get_query_param(Some("topic=cell+biology"), "topic"),
            Some("cell biology".to_string())
        );
    }

    #[test]
    fn test_get_query_param_among_others() {
        assert_eq!(
            get_query_param(Some("a=1&topic=Gravity&b=2"), "topic"),
            Some("Gravity".to_string())
        );
    }

    #[test]
    fn test_get_query_param_missing() {
        assert_eq!(get_query_param(Some("other=x"), "topic"), None);
        assert_eq!(get_query_param(None, "topic"), None);
    }

    #[test]
    fn test_cors_response_adds_headers() {
        let response = Response::builder()
            .status(StatusCode::OK)
            .body(Full::new(Bytes::new()))
            .unwrap();

        let cors_resp = cors_response(response, "http://localhost:3000");

        assert_eq!(
            cors_resp
                .headers()
                .get("Access-Control-Allow-Origin")
                .unwrap(),
            "http://localhost:3000"
        );
        assert!(cors_resp
            .headers()
            .contains_key("Access-Control-Allow-Methods"));
        assert_eq!(
            cors_resp
                .headers()
                .get("Access-Control-Allow-Credentials")
                .unwrap(),
            "true"
        );
    }

    #[test]
    fn test_cors_response_preserves_status() {
        let response = Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Full::new(Bytes::new()))
            .unwrap();

        let cors_resp = cors_response(response, "http://localhost:3000");
        assert_eq!(cors_resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_json_response_content_type() {
        let response = json_response(StatusCode::OK, "{}");
        let content_type = response.headers().get("Content-Type").unwrap();
        assert_eq!(content_type, "application/json");
    }

    #[test]
    fn test_json_error_response_shape() {
        let response = json_error_response(StatusCode::BAD_REQUEST, "topic is required");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_allowed_method_per_route() {
        assert_eq!(allowed_method("/lesson-plan"), Some("GET"));
        assert_eq!(allowed_method("/quiz"), Some("GET"));
        assert_eq!(allowed_method("/assignment"), Some("GET"));
        assert_eq!(allowed_method("/summarize"), Some("POST"));
        assert_eq!(allowed_method("/integrate-lms"), Some("POST"));
        assert_eq!(allowed_method("/question-answering"), Some("POST"));
        assert_eq!(allowed_method("/nope"), None);
    }
}
