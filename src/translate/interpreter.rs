//! 响应解释器
//!
//! 把上游的原始回复（或传输失败）归一化为 [`TranslationOutcome`]。
//! 所有失败在这里落为带状态码的结果，不向上抛异常。

use crate::error::TranslateError;
use crate::models::api::TranslationOutcome;
use crate::models::wire::JsonRpcReply;

/// 解析上游回复
///
/// - 无结果或首条译文为空 → 503 Translation failed
/// - 上游检测出的源语言非空时覆盖调用方解析值
/// - 候选译文按上游顺序收取，跳过空文本项
pub fn interpret_reply(
    reply: &JsonRpcReply,
    id: i64,
    source_lang: &str,
    target_lang: &str,
    method: &str,
) -> TranslationOutcome {
    let result = match &reply.result {
        Some(result) if !result.texts.is_empty() => result,
        _ => {
            return TranslationOutcome::failure(
                TranslateError::BackendFailure.status_code(),
                id,
                TranslateError::BackendFailure.to_string(),
                source_lang,
                target_lang,
                method,
            )
        }
    };

    let first = &result.texts[0];
    if first.text.is_empty() {
        return TranslationOutcome::failure(
            TranslateError::BackendFailure.status_code(),
            id,
            TranslateError::BackendFailure.to_string(),
            source_lang,
            target_lang,
            method,
        );
    }

    let alternatives: Vec<String> = first
        .alternatives
        .iter()
        .filter(|alt| !alt.text.is_empty())
        .map(|alt| alt.text.clone())
        .collect();

    let detected_lang = if result.lang.is_empty() {
        source_lang
    } else {
        result.lang.as_str()
    };

    TranslationOutcome::success(
        id,
        first.text.clone(),
        alternatives,
        detected_lang,
        target_lang,
        method,
    )
}

/// 把传输/上游错误转为失败结果
pub fn interpret_failure(
    err: &TranslateError,
    id: i64,
    source_lang: &str,
    target_lang: &str,
    method: &str,
) -> TranslationOutcome {
    TranslationOutcome::failure(
        err.status_code(),
        id,
        err.to_string(),
        source_lang,
        target_lang,
        method,
    )
}
