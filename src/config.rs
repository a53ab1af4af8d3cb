//! 进程配置
//!
//! 启动时从环境变量读取一次，之后作为只读状态共享。
//! 与上游 DeepLX 保持一致的变量名：IP / PORT / TOKEN / DL_SESSION / PROXY。

use std::env;

/// 服务配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub ip: String,
    /// 监听端口
    pub port: u16,
    /// 访问令牌（为空时不做鉴权）
    pub token: String,
    /// 全局 dl_session 凭证（Pro 账号会话，可被请求 Cookie 覆盖）
    pub dl_session: String,
    /// 出站代理 URL（socks5/http/https，为空时直连）
    pub proxy: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip: "0.0.0.0".to_string(),
            port: 1188,
            token: String::new(),
            dl_session: String::new(),
            proxy: String::new(),
        }
    }
}

impl Config {
    /// 从环境变量构建配置
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意查找函数构建配置，便于测试注入
    ///
    /// PORT 解析失败时回退到默认端口。
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            ip: lookup("IP").filter(|v| !v.is_empty()).unwrap_or(defaults.ip),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            token: lookup("TOKEN").unwrap_or_default(),
            dl_session: lookup("DL_SESSION").unwrap_or_default(),
            proxy: lookup("PROXY").unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_lookup(|_| None);
        assert_eq!(cfg.ip, "0.0.0.0");
        assert_eq!(cfg.port, 1188);
        assert!(cfg.token.is_empty());
        assert!(cfg.dl_session.is_empty());
        assert!(cfg.proxy.is_empty());
    }

    #[test]
    fn test_from_lookup() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("IP", "127.0.0.1"),
            ("PORT", "8080"),
            ("TOKEN", "secret"),
            ("DL_SESSION", "abc"),
            ("PROXY", "socks5://127.0.0.1:1080"),
        ]));
        assert_eq!(cfg.ip, "127.0.0.1");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.token, "secret");
        assert_eq!(cfg.dl_session, "abc");
        assert_eq!(cfg.proxy, "socks5://127.0.0.1:1080");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let cfg = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")]));
        assert_eq!(cfg.port, 1188);
    }
}
