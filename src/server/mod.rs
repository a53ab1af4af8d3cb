//! HTTP 服务
//!
//! 路由结构与上游 DeepLX 对齐：
//! - `GET  /`             项目信息（不鉴权）
//! - `POST /translate`    免费端点
//! - `POST /v1/translate` Pro 端点（需要 dl_session）
//! - `POST /v2/translate` 官方 API 兼容端点
//! 其余路径一律 404。

pub mod handlers;


use std::any::Any;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::client::{DeepLTransport, HttpTransport};
use crate::config::Config;
use crate::error::TranslateError;
use crate::translate::Translator;

/// 进程级共享状态，初始化后只读
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<Translator>,
}

impl AppState {
    /// 用真实传输构建状态
    pub fn new(config: Config) -> Result<Self, TranslateError> {
        let transport = Arc::new(HttpTransport::new(&config.proxy)?);
        Ok(Self::with_transport(config, transport))
    }

    /// 用指定传输构建状态，测试注入 mock 用
    pub fn with_transport(config: Config, transport: Arc<dyn DeepLTransport>) -> Self {
        Self {
            config: Arc::new(config),
            translator: Arc::new(Translator::new(transport)),
        }
    }
}

/// 组装路由
pub fn build_router(state: AppState) -> Router {
    let translate_routes = Router::new()
        .route("/translate", post(handlers::free_translate))
        .route("/v1/translate", post(handlers::pro_translate))
        .route("/v2/translate", post(handlers::official_translate))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::require_token,
        ));

    Router::new()
        .route("/", get(handlers::index))
        .merge(translate_routes)
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// 绑定监听地址并运行
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.config.ip, state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server is running on http://{}", addr);
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

/// 处理器 panic 兜底为 500，避免连接被直接掐断
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };
    tracing::error!("handler panicked: {}", detail);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "code": 500, "message": detail })),
    )
        .into_response()
}
