//! 出站传输
//!
//! 负责把已序列化的请求体原样送达 DeepL 的 JSON-RPC 端点。
//! 请求体在指纹构造阶段已经定形，这里绝不再碰它的字节。
//! 支持 socks5 / http / https 出站代理。

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Client, Proxy, StatusCode};
use std::time::Duration;

use crate::error::TranslateError;
use crate::models::wire::JsonRpcReply;

const DEEPL_ENDPOINT: &str = "https://www2.deepl.com/jsonrpc";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// 出站代理协议
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyProtocol {
    Socks5,
    Http,
    Https,
}

impl ProxyProtocol {
    /// 从代理 URL 识别协议，不认识的 scheme 返回 None
    pub fn from_url(url: &str) -> Option<Self> {
        let url_lower = url.to_lowercase();
        if url_lower.starts_with("socks5://") {
            Some(ProxyProtocol::Socks5)
        } else if url_lower.starts_with("http://") {
            Some(ProxyProtocol::Http)
        } else if url_lower.starts_with("https://") {
            Some(ProxyProtocol::Https)
        } else {
            None
        }
    }
}

/// 上游调用接口
///
/// 以 trait 出现是为了让路由层和编排层可以在测试里替换为 mock，
/// 不触网验证整条链路。
#[async_trait]
pub trait DeepLTransport: Send + Sync {
    /// 发送已序列化的请求体
    ///
    /// `dl_session` 非空时以 `Cookie: dl_session=...` 携带。
    /// 上游 429 必须区分于其他失败（单独的限流分类）。
    async fn send(&self, payload: &str, dl_session: &str)
        -> Result<JsonRpcReply, TranslateError>;
}

/// 基于 reqwest 的真实传输
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// 创建传输客户端，`proxy_url` 为空时直连
    pub fn new(proxy_url: &str) -> Result<Self, TranslateError> {
        let mut builder = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT);

        if !proxy_url.is_empty() {
            if ProxyProtocol::from_url(proxy_url).is_none() {
                return Err(TranslateError::Internal(format!(
                    "unsupported proxy protocol: {}",
                    proxy_url
                )));
            }
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| TranslateError::Internal(format!("invalid proxy url: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| TranslateError::Internal(format!("failed to build http client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl DeepLTransport for HttpTransport {
    async fn send(
        &self,
        payload: &str,
        dl_session: &str,
    ) -> Result<JsonRpcReply, TranslateError> {
        let mut request = self
            .client
            .post(DEEPL_ENDPOINT)
            .header(CONTENT_TYPE, "application/json")
            .body(payload.to_string());

        if !dl_session.is_empty() {
            request = request.header(COOKIE, format!("dl_session={}", dl_session));
        }

        let response = request
            .send()
            .await
            .map_err(|e| TranslateError::TransportFailure(e.to_string()))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslateError::RateLimited);
        }

        response
            .json::<JsonRpcReply>()
            .await
            .map_err(|e| TranslateError::TransportFailure(e.to_string()))
    }
}
