use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use tracing::trace;

use crate::gateway::GatewayHandle;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> i64 {
        (chrono::Utc::now() - self.start_datetime)
            .num_seconds()
            .max(0)
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub redirect_enabled: bool,
    pub reserved_prefixes: Vec<String>,
    pub uptime_seconds: i64,
}

/// Health Service
///
/// 网关无外部依赖，readiness 只报告当前配置快照。
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        gateway: web::Data<GatewayHandle>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        trace!("Received health check request");
        let snapshot = gateway.load();

        HttpResponse::Ok().json(HealthResponse {
            status: "ok",
            redirect_enabled: snapshot.redirect_enabled(),
            reserved_prefixes: snapshot.reserved().iter().map(String::from).collect(),
            uptime_seconds: app_start_time.uptime_seconds(),
        })
    }

    pub async fn liveness_check() -> impl Responder {
        HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
    }
}

/// Health 路由配置，挂载在 `prefix` 下
pub fn health_routes(prefix: &str) -> actix_web::Scope {
    web::scope(prefix)
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/ready", web::get().to(HealthService::health_check))
        .route("/ready", web::head().to(HealthService::health_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
