//! # 解码与缩放流水线模块
//!
//! ## 设计思路
//!
//! 将“文件 → 图像 → RGBA → 缩放内容”的过程集中管理，并在关键节点增加资源上限控制。
//! 优先读取图片头尺寸做像素上限检查，再进行完整解码，降低异常输入触发高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. 读取 header 尺寸并按像素上限快速拒绝
//! 2. 完整解码并转换 RGBA
//! 3. 高质量缩放：优先 fast_image_resize 卷积，失败时回退 `image::imageops::resize`

use std::path::Path;

use fast_image_resize as fr;
use image::{ImageBuffer, ImageReader, Rgba, RgbaImage};

use super::{IconConfig, IconError};

/// 解码源图并转换为 RGBA。
pub(crate) fn decode_source(path: &Path, config: &IconConfig) -> Result<RgbaImage, IconError> {
    if !path.exists() {
        return Err(IconError::FileSystem(format!(
            "输入文件不存在：{}",
            path.display()
        )));
    }

    let (header_width, header_height) = inspect_dimensions(path)?;
    validate_pixel_limits(config, header_width, header_height)?;

    let decoded = open_reader(path)?
        .decode()
        .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;

    Ok(decoded.to_rgba8())
}

/// 将 RGBA 内容缩放到目标尺寸。
pub(crate) fn resize_content(
    source: &RgbaImage,
    target_width: u32,
    target_height: u32,
    config: &IconConfig,
) -> Result<RgbaImage, IconError> {
    let (width, height) = source.dimensions();
    if (width, height) == (target_width, target_height) {
        return Ok(source.clone());
    }

    match resize_with_fast_image_resize(source, target_width, target_height, config) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!(
                "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                err
            );
            Ok(image::imageops::resize(
                source,
                target_width,
                target_height,
                config.resize_filter,
            ))
        }
    }
}

/// 仅通过图片头信息读取宽高。
///
/// 用于在完整解码前做像素限制检查。
fn inspect_dimensions(path: &Path) -> Result<(u32, u32), IconError> {
    open_reader(path)?
        .into_dimensions()
        .map_err(|e| IconError::Decode(format!("无法读取图片尺寸：{}", e)))
}

fn open_reader(path: &Path) -> Result<ImageReader<std::io::BufReader<std::fs::File>>, IconError> {
    ImageReader::open(path)
        .map_err(|e| IconError::FileSystem(format!("无法打开输入文件：{}", e)))?
        .with_guessed_format()
        .map_err(|e| IconError::FileSystem(format!("无法识别图片格式：{}", e)))
}

/// 校验像素数量是否超过配置上限。
fn validate_pixel_limits(config: &IconConfig, width: u32, height: u32) -> Result<(), IconError> {
    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

    if pixels > config.max_decoded_pixels {
        return Err(IconError::ResourceLimit(format!(
            "图片像素过大：{} 像素（限制：{} 像素）",
            pixels, config.max_decoded_pixels
        )));
    }

    Ok(())
}

fn resize_with_fast_image_resize(
    source: &RgbaImage,
    target_width: u32,
    target_height: u32,
    config: &IconConfig,
) -> Result<RgbaImage, IconError> {
    let (src_width, src_height) = source.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        source.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| IconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(to_fast_filter(
        config.resize_filter,
    )));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_fast_filter(filter: image::imageops::FilterType) -> fr::FilterType {
    match filter {
        image::imageops::FilterType::Nearest => fr::FilterType::Box,
        image::imageops::FilterType::Triangle => fr::FilterType::Bilinear,
        image::imageops::FilterType::CatmullRom => fr::FilterType::CatmullRom,
        image::imageops::FilterType::Gaussian => fr::FilterType::Mitchell,
        image::imageops::FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_source(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]))
    }

    #[test]
    fn resize_produces_exact_target_dimensions() {
        let source = uniform_source(512, 512);
        let resized = resize_content(&source, 230, 230, &IconConfig::default())
            .expect("resize should succeed");
        assert_eq!(resized.dimensions(), (230, 230));
    }

    #[test]
    fn resize_of_uniform_image_preserves_color() {
        let source = uniform_source(128, 128);
        let resized = resize_content(&source, 57, 57, &IconConfig::default())
            .expect("resize should succeed");
        // 卷积核权重归一化，均匀输入的输出仍为同一颜色
        assert!(resized.pixels().all(|p| p.0 == [200, 40, 40, 255]));
    }

    #[test]
    fn resize_with_equal_dimensions_is_identity() {
        let source = uniform_source(64, 64);
        let resized = resize_content(&source, 64, 64, &IconConfig::default())
            .expect("resize should succeed");
        assert_eq!(resized, source);
    }

    #[test]
    fn upscale_is_supported() {
        let source = uniform_source(32, 32);
        let resized = resize_content(&source, 100, 100, &IconConfig::default())
            .expect("upscale should succeed");
        assert_eq!(resized.dimensions(), (100, 100));
    }

    #[test]
    fn decode_rejects_missing_file() {
        let result = decode_source(
            Path::new("definitely/does/not/exist.png"),
            &IconConfig::default(),
        );
        assert!(matches!(result, Err(IconError::FileSystem(_))));
    }

    #[test]
    fn pixel_limit_rejects_oversized_header() {
        let config = IconConfig {
            max_decoded_pixels: 1_000_000,
            ..IconConfig::default()
        };
        let result = validate_pixel_limits(&config, 2000, 2000);
        assert!(matches!(result, Err(IconError::ResourceLimit(_))));
    }
}
