//! 错误类型定义
//!
//! 翻译链路上的所有失败在产生处收敛为 `TranslateError`，
//! 再统一映射为对外的状态码与 message，绝不作为未处理异常外泄。

use thiserror::Error;

/// 翻译中继的错误分类
#[derive(Debug, Error)]
pub enum TranslateError {
    /// 请求没有携带任何待翻译文本
    #[error("No text to translate")]
    EmptyInput,

    /// 入参不满足约束（tag_handling 非法、v2 载荷不完整等）
    #[error("{0}")]
    InvalidConstraint(String),

    /// 会话凭证缺失或不可用
    #[error("{0}")]
    InvalidCredential(String),

    /// 上游返回 429，IP 被临时限流
    #[error("Too many requests, your IP has been blocked by DeepL temporarily, please don't request it frequently in a short time")]
    RateLimited,

    /// 上游响应无法解析或不含翻译结果
    #[error("Translation failed")]
    BackendFailure,

    /// 网络层失败（连接、超时、响应体解析）
    #[error("{0}")]
    TransportFailure(String),

    /// 服务自身的意外故障
    #[error("{0}")]
    Internal(String),
}

impl TranslateError {
    /// 错误对应的对外状态码
    pub fn status_code(&self) -> u16 {
        match self {
            TranslateError::EmptyInput => 404,
            TranslateError::InvalidConstraint(_) => 400,
            TranslateError::InvalidCredential(_) => 401,
            TranslateError::RateLimited => 429,
            TranslateError::BackendFailure => 503,
            TranslateError::TransportFailure(_) => 503,
            TranslateError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(TranslateError::EmptyInput.status_code(), 404);
        assert_eq!(
            TranslateError::InvalidConstraint("x".into()).status_code(),
            400
        );
        assert_eq!(
            TranslateError::InvalidCredential("x".into()).status_code(),
            401
        );
        assert_eq!(TranslateError::RateLimited.status_code(), 429);
        assert_eq!(TranslateError::BackendFailure.status_code(), 503);
        assert_eq!(
            TranslateError::TransportFailure("x".into()).status_code(),
            503
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(TranslateError::EmptyInput.to_string(), "No text to translate");
        assert_eq!(TranslateError::BackendFailure.to_string(), "Translation failed");
        assert!(TranslateError::RateLimited
            .to_string()
            .starts_with("Too many requests"));
    }
}
