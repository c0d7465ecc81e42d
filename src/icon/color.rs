//! # 颜色解析模块
//!
//! ## 设计思路
//!
//! 背景色以 `#RRGGBB` 字符串的形式进入系统，在装配任务时立即解析为强类型颜色，
//! 让格式错误在进入像素流水线之前就暴露出来。
//!
//! ## 实现思路
//!
//! - 先整体校验长度与字符集，再按通道切片解析，避免多字节字符导致的切片恐慌。
//! - 作为填充色使用时固定追加不透明 Alpha（255）。

use image::Rgba;

use super::IconError;

/// 不透明 RGB 颜色（来自 `#RRGGBB` 字符串）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// 解析 `#RRGGBB` 或 `RRGGBB` 形式的颜色字符串。
    pub fn parse(input: &str) -> Result<Self, IconError> {
        let digits = input.strip_prefix('#').unwrap_or(input);

        if digits.len() != 6 {
            return Err(IconError::InvalidColor(format!(
                "颜色长度不合法：{}（期望 #RRGGBB）",
                input
            )));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(IconError::InvalidColor(format!(
                "颜色包含非十六进制字符：{}",
                input
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| {
                IconError::InvalidColor(format!("颜色通道解析失败：{}（{}）", input, e))
            })
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// 作为填充色使用的 RGBA 值（固定不透明）。
    pub fn rgba(&self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}
