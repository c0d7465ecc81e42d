//! # 图标资源生成工具 — 应用入口
//!
//! 本文件仅负责日志初始化与出厂任务装配。
//! 生成逻辑位于 `icon` 模块，详见 `lib.rs` 架构文档。
//!
//! 每个任务的结果都在本层被消费：成功打印输出路径，失败打印诊断信息，
//! 任何一个任务失败都不会中断后续任务。

use app_icon_gen::icon::{HexColor, IconConfig, IconGenerator, IconJob};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let input = "assets/images/logo_test.png";
    let generator = IconGenerator::new(IconConfig::default());

    // 深空蓝（主题色），内置字面量必定合法
    let deep_space_blue = HexColor::parse("#0F172A").expect("内置颜色字面量应当合法");

    let jobs = [
        // 1. 透明留白版本（Android 前景图层）
        IconJob::new(input, "assets/images/logo_test_padded.png").with_scale_ratio(0.45),
        // 2. 深空蓝底色版本（iOS / Android 传统图标 / 兜底）。
        //    刻意输出方形图标，圆角交给平台遮罩处理；
        //    如需在文件内预渲染圆角，可在任务上追加 with_radius_ratio。
        IconJob::new(input, "assets/images/logo_blue.png")
            .with_scale_ratio(0.45)
            .with_background(deep_space_blue),
    ];

    for job in jobs {
        match generator.generate(&job) {
            Ok(icon) => log::info!(
                "✅ 图标生成成功 - 输出: {}（{}x{}）",
                icon.output_path.display(),
                icon.width,
                icon.height
            ),
            Err(err) => log::error!(
                "❌ 图标生成失败 - 输入: {}：{}",
                job.input_path.display(),
                err
            ),
        }
    }
}
