use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use problems_backend::middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
use problems_backend::{app, AppState};

const TEST_MAX_JSON_PAYLOAD: usize = 1024;

/// Builder for creating test Actix service instances wired like `main`.
pub struct TestAppBuilder {
    state: AppState,
    max_json_payload_size: usize,
    extra_routes: Option<Box<dyn Fn(&mut web::ServiceConfig)>>,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            max_json_payload_size: TEST_MAX_JSON_PAYLOAD,
            extra_routes: None,
        }
    }

    /// Register additional test-only routes ahead of the production ones
    pub fn with_routes<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + 'static,
    {
        self.extra_routes = Some(Box::new(config_fn));
        self
    }

    /// CORS wraps bodies in `EitherBody`, so the body type stays opaque.
    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
        let data = web::Data::new(self.state);
        let max_json_payload_size = self.max_json_payload_size;
        let extra_routes = self.extra_routes;

        test::init_service(
            App::new()
                .wrap(cors_middleware())
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(data)
                .configure(move |cfg| {
                    if let Some(config_fn) = &extra_routes {
                        config_fn(cfg);
                    }
                    app::configure(cfg, max_json_payload_size);
                }),
        )
        .await
    }
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
