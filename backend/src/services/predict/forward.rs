use super::gateway::{GatewayError, PredictionGateway};
use actix_web::{web, HttpResponse};
use common::model::FeatureVector;
use log::{info, warn};
use uuid::Uuid;

/// Handler for `POST /api/predict`.
///
/// The body is checked against the wire layout (one-hot geography, 0/1
/// category codes) and then sent upstream byte for byte, so number forms and
/// any extra fields reach the inference service untouched.
pub(crate) async fn process(
    gateway: web::Data<PredictionGateway>,
    body: web::Bytes,
) -> Result<HttpResponse, GatewayError> {
    let request_id = Uuid::new_v4();
    if let Err(err) = serde_json::from_slice::<FeatureVector>(&body) {
        warn!("[{}] rejected prediction payload: {}", request_id, err);
        return Err(GatewayError::InvalidPayload(err.to_string()));
    }
    info!(
        "[{}] forwarding prediction request to {}",
        request_id,
        gateway.endpoint()
    );

    match gateway.forward(body).await {
        Ok(body) => {
            info!("[{}] prediction received", request_id);
            Ok(HttpResponse::Ok().json(body))
        }
        Err(err) => {
            warn!("[{}] prediction failed: {}", request_id, err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GatewayConfig;
    use crate::services::{payload_config, predict};
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpRequest, HttpResponse, HttpServer};
    use common::requests::ApiError;
    use serde_json::{json, Value};

    fn jane_doe() -> Value {
        json!({
            "CreditScore": 650,
            "Gender": 0,
            "Age": 35,
            "Tenure": 5,
            "Balance": 0,
            "NumOfProducts": 1,
            "HasCrCard": 0,
            "IsActiveMember": 1,
            "EstimatedSalary": 50000,
            "Geography_France": 1,
            "Geography_Germany": 0,
            "Geography_Spain": 0,
        })
    }

    /// Starts a throwaway upstream on an ephemeral port and returns its URL.
    fn spawn_upstream(status: u16, body: &'static str) -> String {
        let server = HttpServer::new(move || {
            App::new().default_service(web::to(move || async move {
                HttpResponse::build(StatusCode::from_u16(status).unwrap())
                    .content_type("text/plain")
                    .body(body)
            }))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}/predict", addr)
    }

    /// Upstream that answers `{"data": 1, "received": "<raw request body>"}`
    /// along with the content type it was sent.
    fn spawn_echo_upstream() -> String {
        let server = HttpServer::new(|| {
            App::new().route(
                "/predict",
                web::post().to(|req: HttpRequest, body: web::Bytes| async move {
                    let content_type = req
                        .headers()
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    HttpResponse::Ok().json(json!({
                        "data": 1,
                        "received": String::from_utf8_lossy(&body),
                        "content_type": content_type,
                    }))
                }),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}/predict", addr)
    }

    fn gateway_for(url: String) -> web::Data<predict::PredictionGateway> {
        let config = GatewayConfig { inference_url: url };
        web::Data::new(predict::PredictionGateway::new(&config).unwrap())
    }

    macro_rules! app_for {
        ($url:expr) => {
            test::init_service(
                App::new()
                    .app_data(payload_config(64 * 1024))
                    .app_data(gateway_for($url))
                    .service(predict::configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn relays_payload_bytes_and_upstream_json_verbatim() {
        let app = app_for!(spawn_echo_upstream());
        let mut payload = jane_doe();
        payload["Note"] = json!("kept");
        let raw = payload.to_string();
        let req = test::TestRequest::post()
            .uri("/api/predict")
            .insert_header(("content-type", "application/json"))
            .set_payload(raw.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], json!(1));
        assert_eq!(body["received"], json!(raw));
        assert_eq!(body["content_type"], json!("application/json"));
        assert!(raw.contains("\"EstimatedSalary\":50000,"));
    }

    #[actix_web::test]
    async fn non_json_body_is_a_bad_request() {
        let app = app_for!("http://127.0.0.1:1/predict".to_string());
        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_payload("CreditScore=650")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ApiError = test::read_body_json(resp).await;
        assert_eq!(body.error, "Invalid prediction payload");
    }

    #[actix_web::test]
    async fn upstream_failure_carries_its_text_in_details() {
        let app = app_for!(spawn_upstream(503, "model overloaded"));
        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(jane_doe())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: ApiError = test::read_body_json(resp).await;
        assert_eq!(body.error, "Failed to get prediction from API");
        assert_eq!(body.details, "model overloaded");
    }

    #[actix_web::test]
    async fn non_json_success_is_an_internal_error() {
        let app = app_for!(spawn_upstream(200, "<html>maintenance</html>"));
        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(jane_doe())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ApiError = test::read_body_json(resp).await;
        assert_eq!(body.error, "Internal server error");
        assert!(!body.details.is_empty());
    }

    #[actix_web::test]
    async fn unreachable_upstream_is_a_500() {
        let app = app_for!("http://127.0.0.1:1/predict".to_string());
        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(jane_doe())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ApiError = test::read_body_json(resp).await;
        assert_eq!(body.error, "Internal server error");
    }

    #[actix_web::test]
    async fn malformed_vector_never_reaches_upstream() {
        // Port 1 would fail with a 500; a 400 proves the request stopped early.
        let app = app_for!("http://127.0.0.1:1/predict".to_string());
        let mut payload = jane_doe();
        payload["Geography_Spain"] = json!(1);
        let req = test::TestRequest::post()
            .uri("/api/predict")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ApiError = test::read_body_json(resp).await;
        assert_eq!(body.error, "Invalid prediction payload");
        assert!(body.details.contains("geography"));
    }
}
