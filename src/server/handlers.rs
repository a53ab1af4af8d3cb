//! 端点处理器
//!
//! 三个翻译端点共享一套出参形态：成功时
//! `{code, id, data, alternatives, source_lang, target_lang, method}`，
//! 失败时 `{code, message}`，message 原样透出，不改写。

use axum::{
    extract::{Query, State},
    http::{header::COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use regex::Regex;
use serde::Deserialize;
use serde_json::json;
use std::sync::OnceLock;

use crate::error::TranslateError;
use crate::models::api::{OfficialPayload, TranslatePayload, TranslationOutcome};
use crate::server::AppState;

const INVALID_TAG_HANDLING: &str =
    "Invalid tag_handling value. Allowed values are 'html' and 'xml'.";
const NO_DL_SESSION: &str = "No dl_session Found";
const NOT_PRO_ACCOUNT: &str =
    "Your account is not a Pro account. Please upgrade your account or switch to a different account.";
const INVALID_PAYLOAD: &str = "Invalid request payload";

/// GET / 项目信息
pub async fn index() -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "code": 200,
            "message": "DeepL Free API, Developed by sjlleo and missuo. Go to /translate with POST. http://github.com/OwO-Network/DeepLX"
        })),
    )
        .into_response()
}

/// POST /translate 免费端点，不携带会话凭证
pub async fn free_translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslatePayload>,
) -> Response {
    if !valid_tag_handling(&payload.tag_handling) {
        return error_response(&TranslateError::InvalidConstraint(
            INVALID_TAG_HANDLING.to_string(),
        ));
    }

    let outcome = state
        .translator
        .translate(
            &payload.source_lang,
            &payload.target_lang,
            &payload.text,
            &payload.tag_handling,
            "",
        )
        .await;

    outcome_response(&outcome)
}

/// POST /v1/translate Pro 端点
///
/// 会话凭证优先取请求 Cookie 中的 dl_session，否则用配置值。
/// 凭证含 `.` 视为非 Pro 账号，直接拒绝，不发起网络请求。
pub async fn pro_translate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<TranslatePayload>,
) -> Response {
    if !valid_tag_handling(&payload.tag_handling) {
        return error_response(&TranslateError::InvalidConstraint(
            INVALID_TAG_HANDLING.to_string(),
        ));
    }

    let mut dl_session = state.config.dl_session.clone();
    if let Some(cookie) = headers.get(COOKIE).and_then(|v| v.to_str().ok()) {
        if let Some(session) = extract_dl_session(cookie) {
            dl_session = session;
        }
    }

    if dl_session.is_empty() {
        return error_response(&TranslateError::InvalidCredential(NO_DL_SESSION.to_string()));
    }
    if dl_session.contains('.') {
        return error_response(&TranslateError::InvalidCredential(
            NOT_PRO_ACCOUNT.to_string(),
        ));
    }

    let outcome = state
        .translator
        .translate(
            &payload.source_lang,
            &payload.target_lang,
            &payload.text,
            &payload.tag_handling,
            &dl_session,
        )
        .await;

    outcome_response(&outcome)
}

/// /v2/translate 的查询参数
#[derive(Debug, Default, Deserialize)]
pub struct OfficialQuery {
    #[serde(default)]
    pub target_lang: Option<String>,
}

/// POST /v2/translate 官方 API 兼容端点
///
/// `text` 接受字符串或字符串列表（以换行拼接）；`target_lang`
/// 取请求体，缺失时回落到查询参数。
pub async fn official_translate(
    State(state): State<AppState>,
    Query(query): Query<OfficialQuery>,
    Json(payload): Json<OfficialPayload>,
) -> Response {
    let text = match &payload.text {
        Some(input) if input.is_present() => input.joined(),
        _ => {
            return error_response(&TranslateError::InvalidConstraint(
                INVALID_PAYLOAD.to_string(),
            ))
        }
    };

    let target_lang = match payload
        .target_lang
        .filter(|lang| !lang.is_empty())
        .or_else(|| query.target_lang.filter(|lang| !lang.is_empty()))
    {
        Some(lang) => lang,
        None => {
            return error_response(&TranslateError::InvalidConstraint(
                INVALID_PAYLOAD.to_string(),
            ))
        }
    };

    let outcome = state
        .translator
        .translate("", &target_lang, &text, "", "")
        .await;

    if outcome.is_ok() {
        (
            StatusCode::OK,
            Json(json!({
                "translations": [{
                    "detected_source_language": outcome.source_lang,
                    "text": outcome.data
                }]
            })),
        )
            .into_response()
    } else {
        outcome_response(&outcome)
    }
}

/// 兜底 404
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "code": 404, "message": "Path not found" })),
    )
        .into_response()
}

/// tag_handling 只允许空、"html"、"xml"
fn valid_tag_handling(tag_handling: &str) -> bool {
    matches!(tag_handling, "" | "html" | "xml")
}

/// 从 Cookie 头提取 dl_session 值
fn extract_dl_session(cookie: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"dl_session=([^;]+)").expect("valid regex"));
    re.captures(cookie)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// 归一化结果 → HTTP 响应
fn outcome_response(outcome: &TranslationOutcome) -> Response {
    let status =
        StatusCode::from_u16(outcome.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if outcome.is_ok() {
        (
            status,
            Json(json!({
                "code": outcome.code,
                "id": outcome.id,
                "data": outcome.data,
                "alternatives": outcome.alternatives,
                "source_lang": outcome.source_lang,
                "target_lang": outcome.target_lang,
                "method": outcome.method,
            })),
        )
            .into_response()
    } else {
        (
            status,
            Json(json!({
                "code": outcome.code,
                "message": outcome.message.clone().unwrap_or_default(),
            })),
        )
            .into_response()
    }
}

/// 端点层错误 → HTTP 响应
fn error_response(err: &TranslateError) -> Response {
    let code = err.status_code();
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({ "code": code, "message": err.to_string() })),
    )
        .into_response()
}
