//! # 任务与策略配置模块
//!
//! ## 设计思路
//!
//! 把原先散落在入口处的硬编码参数收拢为两个结构：
//! - `IconJob` 描述一次生成任务（输入、输出与视觉参数），由调用方逐个装配；
//! - `IconConfig` 承载流水线策略（缩放滤镜、解码像素上限），保证行为可测试、可调整。
//!
//! 生成器本身不持有任何路径，保持独立可测。

use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use super::HexColor;

/// 单次图标生成任务的完整描述。
///
/// 默认值与出厂任务一致：内容占画布 45%，透明背景，不做圆角。
#[derive(Debug, Clone)]
pub struct IconJob {
    /// 源 Logo 文件路径。
    pub input_path: PathBuf,
    /// 输出文件路径（输出格式由扩展名决定，父目录需已存在）。
    pub output_path: PathBuf,
    /// 内容占画布线性尺寸的比例。
    pub scale_ratio: f32,
    /// 背景填充色；为 `None` 时背景全透明。
    pub background: Option<HexColor>,
    /// 圆角半径占画布宽度的比例，仅在设置了背景色且大于 0 时生效。
    pub radius_ratio: f32,
}

impl IconJob {
    pub fn new(input_path: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Self {
        Self {
            input_path: input_path.as_ref().to_path_buf(),
            output_path: output_path.as_ref().to_path_buf(),
            scale_ratio: 0.45,
            background: None,
            radius_ratio: 0.0,
        }
    }

    pub fn with_scale_ratio(mut self, ratio: f32) -> Self {
        self.scale_ratio = ratio;
        self
    }

    pub fn with_background(mut self, color: HexColor) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_radius_ratio(mut self, ratio: f32) -> Self {
        self.radius_ratio = ratio;
        self
    }
}

/// 流水线策略配置。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 缩放滤镜（fast_image_resize 失败回退 `image::imageops::resize` 时同样使用）。
    pub resize_filter: FilterType,
    /// 解码前按图片头尺寸校验的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            resize_filter: FilterType::Lanczos3,
            max_decoded_pixels: 40_000_000,
        }
    }
}
