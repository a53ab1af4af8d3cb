//! 访问令牌校验
//!
//! 配置了 TOKEN 时，翻译端点要求请求携带一致的令牌，来源按优先级：
//! 查询参数 `?token=`、`Authorization: Bearer <t>`、
//! `Authorization: DeepL-Auth-Key <t>`，或整个 Authorization 头原文
//! （非两段式时）。未配置 TOKEN 时放行所有请求。

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::server::AppState;

/// 令牌校验中间件
pub async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let expected = &state.config.token;
    if expected.is_empty() {
        return next.run(request).await;
    }

    let query_token = request
        .uri()
        .query()
        .and_then(|query| {
            query
                .split('&')
                .find_map(|pair| pair.strip_prefix("token="))
        })
        .unwrap_or("");

    let header_token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(extract_header_token)
        .unwrap_or_default();

    if query_token == expected.as_str() || header_token == *expected {
        return next.run(request).await;
    }

    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "code": 401, "message": "Invalid access token" })),
    )
        .into_response()
}

/// 从 Authorization 头取令牌
///
/// 两段式只认 `Bearer` 与 `DeepL-Auth-Key` 两种 scheme，
/// 其他段数的头原样当作令牌。
fn extract_header_token(header: &str) -> String {
    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() == 2 {
        if parts[0] == "Bearer" || parts[0] == "DeepL-Auth-Key" {
            parts[1].to_string()
        } else {
            String::new()
        }
    } else {
        header.to_string()
    }
}
