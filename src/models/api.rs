//! 服务端点的请求/响应结构

use serde::Deserialize;

/// /translate 与 /v1/translate 的请求体
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslatePayload {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub source_lang: String,
    #[serde(default)]
    pub target_lang: String,
    #[serde(default)]
    pub tag_handling: String,
}

/// /v2/translate 的 text 字段：单条字符串或字符串列表
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    Single(String),
    Multiple(Vec<String>),
}

impl TextInput {
    /// 列表形式以换行符拼接为一段文本
    pub fn joined(&self) -> String {
        match self {
            TextInput::Single(text) => text.clone(),
            TextInput::Multiple(texts) => texts.join("\n"),
        }
    }

    /// 空字符串视为未提供；空列表保留（拼接后走空文本分支）
    pub fn is_present(&self) -> bool {
        match self {
            TextInput::Single(text) => !text.is_empty(),
            TextInput::Multiple(_) => true,
        }
    }
}

/// /v2/translate 的请求体（官方 API 兼容格式）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfficialPayload {
    #[serde(default)]
    pub text: Option<TextInput>,
    #[serde(default)]
    pub target_lang: Option<String>,
}

/// 归一化后的翻译结果
///
/// 成功与失败共用一个结构：`code == 200` 时 `data`/`alternatives` 有效，
/// 否则 `message` 携带失败原因。每次调用新建，调用间不共享。
#[derive(Debug, Clone)]
pub struct TranslationOutcome {
    pub code: u16,
    pub id: i64,
    pub message: Option<String>,
    pub data: String,
    pub alternatives: Vec<String>,
    pub source_lang: String,
    pub target_lang: String,
    pub method: String,
}

impl TranslationOutcome {
    /// 成功结果
    pub fn success(
        id: i64,
        data: String,
        alternatives: Vec<String>,
        source_lang: &str,
        target_lang: &str,
        method: &str,
    ) -> Self {
        Self {
            code: 200,
            id,
            message: None,
            data,
            alternatives,
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
            method: method.to_string(),
        }
    }

    /// 失败结果
    pub fn failure(
        code: u16,
        id: i64,
        message: String,
        source_lang: &str,
        target_lang: &str,
        method: &str,
    ) -> Self {
        Self {
            code,
            id,
            message: Some(message),
            data: String::new(),
            alternatives: Vec::new(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
            method: method.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == 200
    }
}

/// 会话凭证对应的计费标签
pub fn method_label(dl_session: &str) -> &'static str {
    if dl_session.is_empty() {
        "Free"
    } else {
        "Pro"
    }
}
