//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标生成链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配
//! （解码失败、编码失败、颜色格式非法各自独立成分支）。

/// 图标生成统一错误类型。
///
/// 每次生成调用中产生的错误都会以该类型返回给调用方，
/// 并在调用边界处被消费为一条诊断日志。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("颜色格式错误：{0}")]
    InvalidColor(String),

    #[error("参数错误：{0}")]
    InvalidConfig(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}
