//! 请求指纹构造
//!
//! DeepL 的 JSON-RPC 端点会校验请求体的若干隐蔽特征：timestamp 按文本中
//! `i` 的数量对齐、`"method"` 字段的空格形态随请求 ID 的奇偶规则变化。
//! 这些规则没有官方文档，正确性完全由上游是否接受请求定义，
//! 因此这里逐字复刻参考实现的算法，不做任何化简。

use crate::models::wire::{Lang, Params, PostData, TextItem};
use rand::Rng;

/// JSON-RPC 方法名
pub const METHOD_HANDLE_TEXTS: &str = "LMT_handle_texts";

/// 源语言为 "auto" 或空时使用的占位值。
/// 参考实现不做真实语言检测，固定返回 EN。
pub const AUTO_LANG_PLACEHOLDER: &str = "EN";

const ID_MIN: i64 = 100_000;
const ID_MAX: i64 = 999_999;
const REQUEST_ALTERNATIVES: u32 = 3;

/// 请求 ID 来源，注入以便测试固定取值
pub trait IdSource: Send + Sync {
    /// 返回 [100000, 999999] 内的均匀随机整数
    fn next_id(&self) -> i64;
}

/// 毫秒时钟，注入以便测试固定取值
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// 默认 ID 来源：thread_rng
#[derive(Debug, Default)]
pub struct ThreadRngIds;

impl IdSource for ThreadRngIds {
    fn next_id(&self) -> i64 {
        rand::thread_rng().gen_range(ID_MIN..=ID_MAX)
    }
}

/// 默认时钟：系统墙钟
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// 每次请求独立生成的指纹三元组
#[derive(Debug, Clone)]
pub struct RequestFingerprint {
    /// JSON-RPC 关联 ID
    pub id: i64,
    /// 对齐后的时间戳
    pub timestamp: i64,
    /// 最终序列化的请求体，构造完成后不再改动
    pub payload: String,
}

/// 解析源语言："auto" 或空串替换为占位值
pub fn resolve_source_lang(source_lang: &str) -> String {
    if source_lang.is_empty() || source_lang == "auto" {
        AUTO_LANG_PLACEHOLDER.to_string()
    } else {
        source_lang.to_string()
    }
}

/// 统计文本中小写字母 `i` 的出现次数
pub fn i_count(text: &str) -> usize {
    text.chars().filter(|&c| c == 'i').count()
}

/// 按 i 数量对齐时间戳
///
/// iCount 为 0 时原样返回；否则 `ts - (ts % (iCount+1)) + (iCount+1)`。
/// 上游校验的就是这个量，保持算式原样。
pub fn aligned_timestamp(now_millis: i64, i_count: usize) -> i64 {
    if i_count == 0 {
        return now_millis;
    }
    let remainder = i_count as i64 + 1;
    now_millis - (now_millis % remainder) + remainder
}

/// 按 ID 奇偶规则改写 `"method"` 字段的空格形态
///
/// `(id+5) % 29 == 0 || (id+3) % 13 == 0` 时冒号两侧各留一个空格，
/// 否则只在冒号后留一个空格。上游检查的是原始字节间距，必须做
/// 字符串级替换而不是重新序列化。
pub fn spaced_method_body(id: i64, body: &str) -> String {
    let padded = (id + 5) % 29 == 0 || (id + 3) % 13 == 0;
    if padded {
        body.replacen("\"method\":\"", "\"method\" : \"", 1)
    } else {
        body.replacen("\"method\":\"", "\"method\": \"", 1)
    }
}

/// 构造完整请求指纹
///
/// 入参中的 `source_lang` 已经过 [`resolve_source_lang`]，`text` 非空
/// （空文本在编排层短路，不会走到这里）。
pub fn build_fingerprint(
    source_lang: &str,
    target_lang: &str,
    text: &str,
    ids: &dyn IdSource,
    clock: &dyn Clock,
) -> Result<RequestFingerprint, serde_json::Error> {
    let id = ids.next_id();
    let timestamp = aligned_timestamp(clock.now_millis(), i_count(text));

    let post_data = PostData {
        jsonrpc: "2.0".to_string(),
        method: METHOD_HANDLE_TEXTS.to_string(),
        id,
        params: Params {
            splitting: "newlines".to_string(),
            lang: Lang {
                source_lang_user_selected: source_lang.to_string(),
                target_lang: target_lang.to_string(),
            },
            texts: vec![TextItem {
                text: text.to_string(),
                request_alternatives: REQUEST_ALTERNATIVES,
            }],
            timestamp,
        },
    };

    let body = serde_json::to_string(&post_data)?;
    let payload = spaced_method_body(id, &body);

    Ok(RequestFingerprint {
        id,
        timestamp,
        payload,
    })
}
