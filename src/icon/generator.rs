//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排与策略持有，不包含任何硬编码路径。
//! 处理链路固定为：
//! 1. 校验任务参数
//! 2. 解码源图并记录画布尺寸
//! 3. 缩放内容到目标尺寸
//! 4. 构建画布（透明 / 纯色 / 圆角）
//! 5. 以内容自身 Alpha 居中合成
//! 6. 按扩展名编码写盘
//!
//! ## 实现思路
//!
//! - 输出尺寸恒等于源图尺寸，内容缩放后居中放入画布。
//! - 记录 `decode/resize/compose/encode/total` 阶段耗时，便于性能诊断。
//! - 任何阶段失败都以 `IconError` 返回，调用边界决定如何消费。

use std::path::PathBuf;
use std::time::Instant;

use image::imageops;

use super::{canvas, pipeline, IconConfig, IconError, IconJob};

/// 图标生成器。
///
/// 持有流水线策略并编排各子模块实现完整流程。
pub struct IconGenerator {
    config: IconConfig,
}

/// 单次生成结果，供调用方输出成功消息。
#[derive(Debug)]
pub struct GeneratedIcon {
    /// 实际写出的文件路径。
    pub output_path: PathBuf,
    /// 输出画布宽度（等于源图宽度）。
    pub width: u32,
    /// 输出画布高度（等于源图高度）。
    pub height: u32,
}

impl IconGenerator {
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    /// 处理主入口：按任务描述生成一个图标文件。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use app_icon_gen::icon::{IconConfig, IconGenerator, IconJob};
    ///
    /// let generator = IconGenerator::new(IconConfig::default());
    /// let icon = generator.generate(&IconJob::new("logo.png", "icon.png"))?;
    /// # Ok::<(), app_icon_gen::icon::IconError>(())
    /// ```
    pub fn generate(&self, job: &IconJob) -> Result<GeneratedIcon, IconError> {
        Self::validate_job(job)?;
        let total_start = Instant::now();

        let decode_start = Instant::now();
        let source = pipeline::decode_source(&job.input_path, &self.config)?;
        let (width, height) = source.dimensions();
        let decode_elapsed = decode_start.elapsed();

        // 目标尺寸向下取整，至少保留 1 像素
        let target_width = ((width as f32 * job.scale_ratio).floor() as u32).max(1);
        let target_height = ((height as f32 * job.scale_ratio).floor() as u32).max(1);

        let resize_start = Instant::now();
        let content = pipeline::resize_content(&source, target_width, target_height, &self.config)?;
        let resize_elapsed = resize_start.elapsed();

        let compose_start = Instant::now();
        let mut output = match job.background {
            None => canvas::transparent(width, height),
            Some(color) if job.radius_ratio > 0.0 => {
                canvas::rounded(width, height, color, job.radius_ratio)
            }
            Some(color) => canvas::solid(width, height, color),
        };

        // 居中偏移；scale_ratio > 1 时为负，内容被画布边界裁剪
        let paste_x = (width as i64 - target_width as i64) / 2;
        let paste_y = (height as i64 - target_height as i64) / 2;
        imageops::overlay(&mut output, &content, paste_x, paste_y);
        let compose_elapsed = compose_start.elapsed();

        let encode_start = Instant::now();
        output.save(&job.output_path).map_err(|e| {
            IconError::Encode(format!(
                "无法写入输出文件 {}：{}",
                job.output_path.display(),
                e
            ))
        })?;
        let encode_elapsed = encode_start.elapsed();

        log::info!(
            "🧩 图标生成完成 - 输出: {} 画布: {}x{} 内容: {}x{} decode={}ms resize={}ms compose={}ms encode={}ms total={}ms",
            job.output_path.display(),
            width,
            height,
            target_width,
            target_height,
            decode_elapsed.as_millis(),
            resize_elapsed.as_millis(),
            compose_elapsed.as_millis(),
            encode_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(GeneratedIcon {
            output_path: job.output_path.clone(),
            width,
            height,
        })
    }

    /// 校验任务参数。
    ///
    /// 比例超过 1 仍被接受（内容被裁剪），但非有限值与非正缩放直接拒绝。
    fn validate_job(job: &IconJob) -> Result<(), IconError> {
        if !job.scale_ratio.is_finite() || job.scale_ratio <= 0.0 {
            return Err(IconError::InvalidConfig(format!(
                "scale_ratio 必须为正的有限值：{}",
                job.scale_ratio
            )));
        }
        if !job.radius_ratio.is_finite() || job.radius_ratio < 0.0 {
            return Err(IconError::InvalidConfig(format!(
                "radius_ratio 不能为负值：{}",
                job.radius_ratio
            )));
        }
        if job.scale_ratio > 1.0 {
            log::warn!(
                "⚠️ scale_ratio 超过 1（{}），内容将被画布边界裁剪",
                job.scale_ratio
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_zero_scale() {
        let job = IconJob::new("in.png", "out.png").with_scale_ratio(0.0);
        let result = IconGenerator::validate_job(&job);
        assert!(matches!(result, Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_nan_scale() {
        let job = IconJob::new("in.png", "out.png").with_scale_ratio(f32::NAN);
        let result = IconGenerator::validate_job(&job);
        assert!(matches!(result, Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_negative_radius() {
        let job = IconJob::new("in.png", "out.png").with_radius_ratio(-0.1);
        let result = IconGenerator::validate_job(&job);
        assert!(matches!(result, Err(IconError::InvalidConfig(_))));
    }

    #[test]
    fn validate_accepts_oversized_scale() {
        let job = IconJob::new("in.png", "out.png").with_scale_ratio(1.5);
        IconGenerator::validate_job(&job).expect("oversized scale should be accepted");
    }
}
