//! # 动画输出
//!
//! - GIF: 逐帧绘制到 plotters 的 GIF 后端
//! - 单帧预览: PNG 或 SVG（按扩展名选择）
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 调用
//! - 使用 `animation/render.rs` 绘制，`utils/progress.rs` 显示进度

use crate::animation::render::draw_frame;
use crate::animation::Animation;
use crate::error::{Result, ThreeDofError};
use crate::utils::progress;

use plotters::prelude::*;
use std::path::Path;

/// 保存 GIF 动画
///
/// `fps` 为空时使用 `Animation::fps()`；每隔 `frame_step` 帧取一帧。
/// 返回写入的帧数。
pub fn save_gif(
    animation: &Animation,
    output_path: &Path,
    fps: Option<u32>,
    frame_step: usize,
) -> Result<usize> {
    let fps = fps.unwrap_or_else(|| animation.fps()).max(1);
    let step = frame_step.max(1);
    let delay_ms = 1000 / fps;

    let cfg = animation.config();
    let root = BitMapBackend::gif(output_path, (cfg.width, cfg.height), delay_ms)
        .map_err(|e| ThreeDofError::RenderError(format!("{:?}", e)))?
        .into_drawing_area();

    let indices: Vec<usize> = (0..animation.frame_count()).step_by(step).collect();
    let pb = progress::create_progress_bar(indices.len() as u64, "Rendering frames");

    for &i in &indices {
        let frame = animation.frame(i)?;
        draw_frame(&root, animation, &frame)?;
        root.present()
            .map_err(|e| ThreeDofError::RenderError(e.to_string()))?;
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(indices.len())
}

/// 保存单帧图片（PNG 或 SVG）
pub fn save_frame(animation: &Animation, output_path: &Path, index: usize) -> Result<()> {
    let frame = animation.frame(index)?;
    let cfg = animation.config();
    let size = (cfg.width, cfg.height);

    if is_svg(output_path) {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_frame(&root, animation, &frame)?;
        root.present()
            .map_err(|e| ThreeDofError::RenderError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_frame(&root, animation, &frame)?;
        root.present()
            .map_err(|e| ThreeDofError::RenderError(e.to_string()))?;
    }
    Ok(())
}

/// 按扩展名判断是否输出 SVG
pub fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationConfig;
    use crate::utils::grid::linspace;

    use nalgebra::DMatrix;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("threedof_{}_{}", std::process::id(), name))
    }

    fn small_animation(n: usize) -> Animation {
        let t = linspace(0.0, 1.0, n);
        let x_t = DMatrix::from_fn(n, 3, |i, j| 0.05 * (j as f64 + 1.0) * (i as f64).sin());
        let config = AnimationConfig {
            width: 600,
            height: 300,
            ..AnimationConfig::default()
        };
        Animation::new(&t, &x_t, config).unwrap()
    }

    #[test]
    fn test_save_gif_with_frame_step() {
        let ani = small_animation(11);
        let path = temp_path("demo.gif");

        let written = save_gif(&ani, &path, None, 2).unwrap();
        assert_eq!(written, 6);
        assert!(fs::metadata(&path).unwrap().len() > 0);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_frame_svg_and_png() {
        let ani = small_animation(5);

        let svg = temp_path("preview.svg");
        save_frame(&ani, &svg, 4).unwrap();
        let content = fs::read_to_string(&svg).unwrap();
        assert!(content.contains("<svg"));
        // 图例按质量编号排列
        let first = content.find("Mass 1").unwrap();
        let last = content.find("Mass 3").unwrap();
        assert!(first < last);
        fs::remove_file(&svg).ok();

        let png = temp_path("preview.png");
        save_frame(&ani, &png, 0).unwrap();
        assert!(fs::metadata(&png).unwrap().len() > 0);
        fs::remove_file(&png).ok();
    }

    #[test]
    fn test_save_frame_out_of_range() {
        let ani = small_animation(5);
        let path = temp_path("missing.svg");
        assert!(matches!(
            save_frame(&ani, &path, 5),
            Err(ThreeDofError::InvalidArgument(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_is_svg() {
        assert!(is_svg(Path::new("preview.svg")));
        assert!(is_svg(Path::new("out/Preview.SVG")));
        assert!(!is_svg(Path::new("preview.png")));
        assert!(!is_svg(Path::new("preview")));
    }
}
