//! # 图标资源生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              main.rs（二进制入口）             │
//! │                                              │
//! │  日志初始化 ── 固定任务装配 ── 逐个执行与报告    │
//! └──────────────┬───────────────────────────────┘
//!                ↓ Result<GeneratedIcon, IconError>
//! ┌──────────────┼───────────────────────────────┐
//! │              ↓        icon 模块               │
//! │                                              │
//! │  ┌─ config ──── IconJob / IconConfig         │
//! │  ├─ color ───── #RRGGBB 颜色解析              │
//! │  ├─ generator ─ 校验·编排·阶段耗时             │
//! │  ├─ pipeline ── 解码·像素限制·高质量缩放        │
//! │  ├─ canvas ──── 透明 / 纯色 / 圆角画布         │
//! │  └─ error ───── IconError（统一错误类型）      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`icon::config`] | 任务描述与流水线策略，替代入口处的硬编码参数 |
//! | [`icon::color`] | 十六进制背景色解析为强类型颜色 |
//! | [`icon::generator`] | 单次生成的完整编排，输出尺寸恒等于源图尺寸 |
//! | [`icon::error`] | 解码 / 编码 / 颜色格式等错误的分支化表达 |

pub mod icon;
