//! DeepL JSON-RPC 线上结构
//!
//! 出站请求对应 `LMT_handle_texts` 方法。字段声明顺序即序列化顺序
//! （jsonrpc → method → id → params），上游会校验请求体的字节形态，
//! 不要调整字段次序。

use serde::{Deserialize, Serialize};

/// 语言设置
#[derive(Debug, Clone, Serialize)]
pub struct Lang {
    /// 用户选择的源语言（"auto" 已在上层解析为占位值）
    pub source_lang_user_selected: String,
    /// 目标语言
    pub target_lang: String,
}

/// 单条待翻译文本
#[derive(Debug, Clone, Serialize)]
pub struct TextItem {
    pub text: String,
    #[serde(rename = "requestAlternatives")]
    pub request_alternatives: u32,
}

/// 请求参数
#[derive(Debug, Clone, Serialize)]
pub struct Params {
    pub splitting: String,
    pub lang: Lang,
    pub texts: Vec<TextItem>,
    pub timestamp: i64,
}

/// 完整的 JSON-RPC 请求体
#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub jsonrpc: String,
    pub method: String,
    pub id: i64,
    pub params: Params,
}

/// 上游响应外层
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonRpcReply {
    #[serde(default)]
    pub result: Option<ReplyResult>,
}

/// 上游翻译结果
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplyResult {
    /// 按输入文本逐条返回的结果
    #[serde(default)]
    pub texts: Vec<TextResult>,
    /// 上游检测到的源语言
    #[serde(default)]
    pub lang: String,
}

/// 单条翻译结果
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextResult {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

/// 候选译文
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Alternative {
    #[serde(default)]
    pub text: String,
}
