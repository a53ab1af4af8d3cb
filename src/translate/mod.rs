//! 翻译编排
//!
//! 每次调用独立走一遍 构造 → 发送 → 解释，调用间不保留任何状态，
//! 也不做重试（重复请求会加速上游封禁）。

pub mod fingerprint;
pub mod interpreter;


use std::sync::Arc;

use crate::client::DeepLTransport;
use crate::error::TranslateError;
use crate::models::api::{method_label, TranslationOutcome};

use self::fingerprint::{Clock, IdSource, SystemClock, ThreadRngIds};

/// 翻译编排器
///
/// 随机 ID 来源与时钟通过构造注入，测试可固定取值。
pub struct Translator {
    transport: Arc<dyn DeepLTransport>,
    ids: Arc<dyn IdSource>,
    clock: Arc<dyn Clock>,
}

impl Translator {
    pub fn new(transport: Arc<dyn DeepLTransport>) -> Self {
        Self::with_sources(transport, Arc::new(ThreadRngIds), Arc::new(SystemClock))
    }

    pub fn with_sources(
        transport: Arc<dyn DeepLTransport>,
        ids: Arc<dyn IdSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            transport,
            ids,
            clock,
        }
    }

    /// 执行一次翻译
    ///
    /// `tag_handling` 在端点层校验取值，但当前协议版本不进入出站请求体，
    /// 这里保留入参以维持调用面。空文本直接短路为 404，不发起网络请求。
    pub async fn translate(
        &self,
        source_lang: &str,
        target_lang: &str,
        text: &str,
        _tag_handling: &str,
        dl_session: &str,
    ) -> TranslationOutcome {
        let method = method_label(dl_session);

        if text.is_empty() {
            return interpreter::interpret_failure(
                &TranslateError::EmptyInput,
                0,
                "",
                target_lang,
                method,
            );
        }

        let source_lang = fingerprint::resolve_source_lang(source_lang);

        let fp = match fingerprint::build_fingerprint(
            &source_lang,
            target_lang,
            text,
            self.ids.as_ref(),
            self.clock.as_ref(),
        ) {
            Ok(fp) => fp,
            Err(e) => {
                return interpreter::interpret_failure(
                    &TranslateError::Internal(e.to_string()),
                    0,
                    &source_lang,
                    target_lang,
                    method,
                )
            }
        };

        tracing::debug!(id = fp.id, timestamp = fp.timestamp, "sending translation request");

        match self.transport.send(&fp.payload, dl_session).await {
            Ok(reply) => {
                interpreter::interpret_reply(&reply, fp.id, &source_lang, target_lang, method)
            }
            Err(err) => {
                tracing::warn!(id = fp.id, error = %err, "translation request failed");
                interpreter::interpret_failure(&err, fp.id, &source_lang, target_lang, method)
            }
        }
    }
}
