//! # 单帧绘制
//!
//! 将 `Frame` 绘制到任意 `plotters` 后端（BitMap / GIF / SVG）。
//!
//! ## 依赖关系
//! - 被 `animation/writer.rs` 调用
//! - 使用 `animation/scene.rs` 的 Animation, Frame

use crate::animation::geometry::Rect;
use crate::animation::scene::{
    Animation, Frame, CEILING_HALF_WIDTH, CEILING_Y, SCHEMATIC_X, SCHEMATIC_Y,
};
use crate::error::{Result, ThreeDofError};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const SPRING_COLOR: RGBColor = RGBColor(128, 128, 128);

/// 绘图错误转换
fn render_err<E: std::fmt::Debug>(e: E) -> ThreeDofError {
    ThreeDofError::RenderError(format!("{:?}", e))
}

/// 绘制完整的一帧：左侧示意图，右侧位移曲线
pub fn draw_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    animation: &Animation,
    frame: &Frame,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(render_err)?;

    let (width, _) = root.dim_in_pixel();
    let (left, right) = root.split_horizontally((width / 2) as i32);

    draw_schematic(&left, animation, frame)?;
    draw_traces(&right, animation, frame)?;

    Ok(())
}

/// 左图：顶棚、质量块、弹簧、阻尼器（不显示坐标轴）
fn draw_schematic<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    animation: &Animation,
    frame: &Frame,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let cfg = animation.config();

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .build_cartesian_2d(SCHEMATIC_X.0..SCHEMATIC_X.1, SCHEMATIC_Y.0..SCHEMATIC_Y.1)
        .map_err(render_err)?;

    // 顶棚
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![
                (-CEILING_HALF_WIDTH, CEILING_Y),
                (CEILING_HALF_WIDTH, CEILING_Y),
            ],
            BLACK.stroke_width(4),
        )))
        .map_err(render_err)?;

    // 质量块
    chart
        .draw_series(
            frame
                .masses
                .iter()
                .zip(cfg.colors.iter())
                .map(|(rect, color)| rectangle(rect, color.filled())),
        )
        .map_err(render_err)?;

    // 弹簧
    chart
        .draw_series(
            frame
                .springs
                .iter()
                .map(|pts| PathElement::new(pts.clone(), SPRING_COLOR.stroke_width(2))),
        )
        .map_err(render_err)?;

    // 阻尼器
    for damper in &frame.dampers {
        chart
            .draw_series([
                PathElement::new(damper.lower_rod.to_vec(), BLACK.stroke_width(2)),
                PathElement::new(damper.upper_rod.to_vec(), BLACK.stroke_width(2)),
            ])
            .map_err(render_err)?;
        chart
            .draw_series(std::iter::once(rectangle(&damper.body, BLACK.filled())))
            .map_err(render_err)?;
    }

    Ok(())
}

/// 右图：三条位移曲线、移动圆点、图例与时间标签
fn draw_traces<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    animation: &Animation,
    frame: &Frame,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let cfg = animation.config();
    let (t_min, t_max) = animation.t_range();
    let (y_min, y_max) = animation.y_range();

    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(t_min..t_max, y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Displacement (m)")
        .bold_line_style(BLACK.mix(0.2))
        .light_line_style(BLACK.mix(0.05))
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(render_err)?;

    // 图例按 Mass 1..3 顺序登记
    for (j, &color) in cfg.colors.iter().enumerate() {
        chart
            .draw_series(std::iter::empty::<PathElement<(f64, f64)>>())
            .map_err(render_err)?
            .label(format!("Mass {}", j + 1))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    // 倒序绘制，使质量 1 的曲线位于最上层
    for j in (0..cfg.colors.len()).rev() {
        let color = cfg.colors[j];
        chart
            .draw_series(LineSeries::new(animation.trace(j), color.stroke_width(2)))
            .map_err(render_err)?;
    }

    chart
        .draw_series(
            frame
                .dots
                .iter()
                .zip(cfg.colors.iter())
                .map(|(&(t, x), color)| Circle::new((t, x), 5, color.filled())),
        )
        .map_err(render_err)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(render_err)?;

    // 时间标签位于右上角
    let (w, h) = area.dim_in_pixel();
    let style = ("sans-serif", 16)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Top));
    area.draw(&Text::new(
        frame.label.clone(),
        ((w as f64 * 0.95) as i32, (h as f64 * 0.05) as i32),
        style,
    ))
    .map_err(render_err)?;

    Ok(())
}

/// 几何矩形转 plotters 图元
fn rectangle(rect: &Rect, style: ShapeStyle) -> Rectangle<(f64, f64)> {
    let [a, b] = rect.corners();
    Rectangle::new([a, b], style)
}
