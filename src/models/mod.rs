//! 数据模型
//!
//! - `wire`: DeepL JSON-RPC 端点的出入站线上结构
//! - `api`: 本服务自身各端点的请求/响应结构

pub mod api;
pub mod wire;
