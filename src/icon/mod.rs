//! # 图标生成模块（icon）
//!
//! ## 设计思路
//!
//! 该模块将“任务装配 → 解码缩放 → 画布构建 → 合成编码”按职责拆分为多个子模块，
//! 避免单文件膨胀与耦合。
//!
//! - `config`：任务描述（`IconJob`）与流水线策略（`IconConfig`）
//! - `color`：`#RRGGBB` 颜色解析
//! - `generator`：编排整条处理流水线
//! - `pipeline`：负责解码、像素限制、高质量缩放
//! - `canvas`：负责透明 / 纯色 / 圆角三种背景画布
//! - `error`：统一错误模型
//!
//! ## 新同事快速上手
//!
//! 可以按下面顺序理解调用链：
//!
//! ```text
//! main.rs（装配固定任务）
//!    ↓
//! generator.rs（参数校验 + 统一编排 + 阶段耗时日志）
//!    ├─ pipeline.rs（解码 + 像素限制 + 缩放）
//!    └─ canvas.rs（背景画布构建）
//!    ↓
//! Result<GeneratedIcon, IconError> 在调用边界被消费
//! ```
//!
//! ## 分层职责建议
//!
//! - 出厂任务参数变更优先改 `main.rs`
//! - 策略与默认值变更优先改 `config.rs`
//! - 流程顺序变更优先改 `generator.rs`
//! - 单阶段行为优化分别改 `pipeline/canvas`

pub mod color;
pub mod config;
pub mod error;

mod canvas;
mod generator;
mod pipeline;

pub use color::HexColor;
pub use config::{IconConfig, IconJob};
pub use error::IconError;
pub use generator::{GeneratedIcon, IconGenerator};
