//! # 幅频图生成
//!
//! 使用 `plotters` 绘制扫频结果：每个质量块一条峰值位移曲线，
//! 固有频率处画浅色竖线。
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 调用
//! - 使用 `batch/sweep.rs` 的 SweepPoint

use crate::animation::writer::is_svg;
use crate::batch::SweepPoint;
use crate::error::{Result, ThreeDofError};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const COLORS: [RGBColor; 3] = [
    RGBColor(0, 0, 255),
    RGBColor(255, 165, 0),
    RGBColor(0, 128, 0),
];

/// 生成幅频图（PNG 或 SVG，按扩展名选择）
pub fn generate_sweep_plot(
    points: &[SweepPoint],
    natural_frequencies: &[f64],
    output_path: &Path,
    width: u32,
    height: u32,
) -> Result<()> {
    if points.is_empty() {
        return Err(ThreeDofError::InvalidArgument(
            "no sweep points to plot".into(),
        ));
    }

    if is_svg(output_path) {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_sweep_chart(&root, points, natural_frequencies)?;
        root.present()
            .map_err(|e| ThreeDofError::RenderError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_sweep_chart(&root, points, natural_frequencies)?;
        root.present()
            .map_err(|e| ThreeDofError::RenderError(e.to_string()))?;
    }
    Ok(())
}

/// 绘制幅频图的核心逻辑
fn draw_sweep_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    points: &[SweepPoint],
    natural_frequencies: &[f64],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| ThreeDofError::RenderError(format!("{:?}", e)))?;

    let f_min = points.first().map(|p| p.frequency).unwrap_or(0.0);
    let mut f_max = points.last().map(|p| p.frequency).unwrap_or(1.0);
    if f_max <= f_min {
        f_max = f_min + 1.0;
    }
    let a_max = points
        .iter()
        .flat_map(|p| p.amplitudes.iter().copied())
        .fold(0.0_f64, f64::max);
    let y_max = if a_max > 0.0 { a_max * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(root)
        .caption("Steady-state peak displacement", ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(f_min..f_max, 0.0..y_max)
        .map_err(|e| ThreeDofError::RenderError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Forcing frequency (Hz)")
        .y_desc("Peak displacement (m)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| ThreeDofError::RenderError(format!("{:?}", e)))?;

    // 固有频率
    for &f in natural_frequencies.iter().filter(|f| **f >= f_min && **f <= f_max) {
        chart
            .draw_series(LineSeries::new(
                vec![(f, 0.0), (f, y_max)],
                BLACK.mix(0.3).stroke_width(1),
            ))
            .map_err(|e| ThreeDofError::RenderError(format!("{:?}", e)))?;
    }

    for (j, color) in COLORS.iter().enumerate() {
        let color = *color;
        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.frequency, p.amplitudes[j])),
                color.stroke_width(2),
            ))
            .map_err(|e| ThreeDofError::RenderError(format!("{:?}", e)))?
            .label(format!("Mass {}", j + 1))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 16))
        .draw()
        .map_err(|e| ThreeDofError::RenderError(format!("{:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("threedof_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_empty_points_rejected() {
        let path = temp_path("empty_sweep.png");
        assert!(matches!(
            generate_sweep_plot(&[], &[0.3], &path, 800, 600),
            Err(ThreeDofError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_sweep_plot_svg() {
        let points: Vec<SweepPoint> = (1..=5)
            .map(|i| SweepPoint {
                frequency: 0.1 * i as f64,
                amplitudes: [0.01 * i as f64, 0.02, 0.03 / i as f64],
            })
            .collect();
        let path = temp_path("sweep.svg");

        generate_sweep_plot(&points, &[0.28, 0.79, 1.14], &path, 800, 600).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Mass 3"));
        fs::remove_file(&path).ok();
    }
}
