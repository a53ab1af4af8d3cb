//! DeepL Free API 中继
//!
//! 接收 HTTP 翻译请求，改写为 DeepL 未公开的 JSON-RPC 格式后转发，
//! 并把上游回复归一化为稳定的对外结构。

pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod server;
pub mod translate;
