//! # 画布构建模块
//!
//! ## 设计思路
//!
//! 画布尺寸恒等于源图尺寸，按任务参数分为三种形态：
//! 全透明、纯色不透明、圆角矩形填充（角外保持透明）。
//!
//! ## 实现思路
//!
//! 圆角矩形逐像素判定：只有四角 `r × r` 区域需要做圆弧距离判断，
//! 其余像素直接落在矩形内。像素以中心点（+0.5）参与几何计算。

use image::RgbaImage;

use super::HexColor;

/// 创建全透明画布。
pub(crate) fn transparent(width: u32, height: u32) -> RgbaImage {
    RgbaImage::new(width, height)
}

/// 创建纯色不透明画布。
pub(crate) fn solid(width: u32, height: u32, color: HexColor) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color.rgba())
}

/// 创建圆角矩形背景画布。
///
/// 圆角半径按画布宽度比例计算，并收敛到短边一半以内，
/// 避免过大比例产生自相交的形状。
pub(crate) fn rounded(width: u32, height: u32, color: HexColor, radius_ratio: f32) -> RgbaImage {
    let max_radius = width.min(height) / 2;
    let radius = ((width as f32 * radius_ratio).floor() as u32).min(max_radius);

    let fill = color.rgba();
    let mut canvas = RgbaImage::new(width, height);
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        if in_rounded_rect(x, y, width, height, radius) {
            *pixel = fill;
        }
    }
    canvas
}

/// 判断像素是否落在覆盖整幅画布的圆角矩形内部。
fn in_rounded_rect(x: u32, y: u32, width: u32, height: u32, radius: u32) -> bool {
    if radius == 0 {
        return true;
    }

    let r = radius as f32;
    let fx = x as f32 + 0.5;
    let fy = y as f32 + 0.5;
    let w = width as f32;
    let h = height as f32;

    // 水平/垂直任一方向处于直边区间时无需圆弧判断。
    let cx = if fx < r {
        r
    } else if fx > w - r {
        w - r
    } else {
        return true;
    };
    let cy = if fy < r {
        r
    } else if fy > h - r {
        h - r
    } else {
        return true;
    };

    let dx = fx - cx;
    let dy = fy - cy;
    dx * dx + dy * dy <= r * r
}
