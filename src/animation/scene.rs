//! # 动画场景
//!
//! `Animation` 保存时间向量、位移轨迹和版面布局；`frame(i)` 相当于
//! 动画的更新回调，返回第 i 帧所有图元的位置。
//!
//! ## 版面
//! - 左图: x ∈ [-1, 1], y ∈ [0, 3.2]，隐藏坐标轴；顶棚位于 y = 3.0
//! - 右图: 三条完整位移曲线 + 随时间移动的圆点 + 右上角时间标签
//!
//! ## 依赖关系
//! - 被 `animation/render.rs`, `animation/writer.rs` 使用
//! - 使用 `animation/geometry.rs` 计算弹簧与阻尼器

use crate::animation::geometry::{damper_geometry, spring_points, Damper, Point, Rect};
use crate::error::{Result, ThreeDofError};
use crate::system::NDOF;

use nalgebra::DMatrix;
use plotters::style::RGBColor;

/// 顶棚高度
pub const CEILING_Y: f64 = 3.0;
/// 顶棚半宽
pub const CEILING_HALF_WIDTH: f64 = 0.5;
/// 弹簧所在 x
pub const SPRING_X: f64 = -0.2;
/// 阻尼器所在 x
pub const DAMPER_X: f64 = 0.2;
/// 连接件与质量块表面的间隙
const ATTACH_GAP: f64 = 0.1;
/// 示意图坐标范围
pub const SCHEMATIC_X: (f64, f64) = (-1.0, 1.0);
pub const SCHEMATIC_Y: (f64, f64) = (0.0, 3.2);

const SPRING_COILS: usize = 4;
const SPRING_WIDTH: f64 = 0.05;
const DAMPER_WIDTH: f64 = 0.1;

/// 动画配置
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// 三个质量块及曲线的颜色
    pub colors: [RGBColor; NDOF],
    /// 静平衡位置（自上而下）
    pub base_y: [f64; NDOF],
    pub mass_width: f64,
    pub mass_height: f64,
    /// 保存时的基准帧率
    pub fps: u32,
    /// 播放速度倍数（2.0 为两倍速）
    pub speed: f64,
    /// 画布尺寸（像素）
    pub width: u32,
    pub height: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            colors: [
                RGBColor(0, 0, 255),
                RGBColor(255, 165, 0),
                RGBColor(0, 128, 0),
            ],
            base_y: [2.4, 1.6, 0.8],
            mass_width: 0.6,
            mass_height: 0.2,
            fps: 10,
            speed: 1.0,
            width: 1200,
            height: 600,
        }
    }
}

/// 单帧图元
#[derive(Debug, Clone)]
pub struct Frame {
    pub masses: [Rect; NDOF],
    pub springs: [Vec<Point>; NDOF],
    pub dampers: [Damper; NDOF],
    /// 右图上的移动圆点 (t, x)
    pub dots: [Point; NDOF],
    pub label: String,
}

/// 三自由度动画
#[derive(Debug, Clone)]
pub struct Animation {
    t: Vec<f64>,
    x_t: DMatrix<f64>,
    config: AnimationConfig,
    y_range: (f64, f64),
}

impl Animation {
    /// 由时间向量和 `len(t) × 3` 位移矩阵构造动画
    pub fn new(t: &[f64], x_t: &DMatrix<f64>, config: AnimationConfig) -> Result<Self> {
        if t.is_empty() {
            return Err(ThreeDofError::EmptyTimeVector);
        }
        if x_t.nrows() != t.len() {
            return Err(ThreeDofError::dimension(
                "displacement rows",
                t.len(),
                x_t.nrows(),
            ));
        }
        if x_t.ncols() != NDOF {
            return Err(ThreeDofError::dimension(
                "displacement columns",
                NDOF,
                x_t.ncols(),
            ));
        }
        if !(config.speed > 0.0) {
            return Err(ThreeDofError::InvalidArgument(format!(
                "speed must be positive, got {}",
                config.speed
            )));
        }

        let y_range = trace_range(x_t);

        Ok(Self {
            t: t.to_vec(),
            x_t: x_t.clone(),
            config,
            y_range,
        })
    }

    /// 帧数，等于时间向量长度
    pub fn frame_count(&self) -> usize {
        self.t.len()
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// 第 `j` 个质量块的完整位移曲线
    pub fn trace(&self, j: usize) -> impl Iterator<Item = Point> + '_ {
        self.t
            .iter()
            .enumerate()
            .map(move |(i, t)| (*t, self.x_t[(i, j)]))
    }

    /// 右图时间轴范围
    pub fn t_range(&self) -> (f64, f64) {
        let end = self.t[self.t.len() - 1];
        if end > 0.0 {
            (0.0, end)
        } else {
            (0.0, 1.0)
        }
    }

    /// 右图位移轴范围
    pub fn y_range(&self) -> (f64, f64) {
        self.y_range
    }

    /// 帧间隔（毫秒），已考虑播放速度
    pub fn interval_ms(&self) -> f64 {
        let duration = self.t[self.t.len() - 1];
        let base_interval = 1000.0 * duration / self.t.len() as f64;
        base_interval / self.config.speed.max(1e-8)
    }

    /// 保存用的帧率 `int(fps · speed)`，至少为 1
    pub fn fps(&self) -> u32 {
        ((self.config.fps as f64 * self.config.speed) as u32).max(1)
    }

    /// 更新回调：计算第 `i` 帧所有图元
    pub fn frame(&self, i: usize) -> Result<Frame> {
        if i >= self.frame_count() {
            return Err(ThreeDofError::InvalidArgument(format!(
                "frame {} out of range (animation has {} frames)",
                i,
                self.frame_count()
            )));
        }

        let cfg = &self.config;
        let x: [f64; NDOF] = std::array::from_fn(|j| self.x_t[(i, j)]);
        let y: [f64; NDOF] = std::array::from_fn(|j| cfg.base_y[j] + x[j]);

        let masses = std::array::from_fn(|j| Rect {
            x: -cfg.mass_width / 2.0,
            y: y[j] - cfg.mass_height / 2.0,
            width: cfg.mass_width,
            height: cfg.mass_height,
        });

        let spans = connection_spans(&y);
        let springs = std::array::from_fn(|j| {
            let (y0, y1) = spans[j];
            spring_points(SPRING_X, y0, y1, SPRING_COILS, SPRING_WIDTH)
        });
        let dampers = std::array::from_fn(|j| {
            let (y0, y1) = spans[j];
            damper_geometry(DAMPER_X, y0, y1, DAMPER_WIDTH)
        });

        let time = self.t[i];
        let dots = std::array::from_fn(|j| (time, x[j]));

        Ok(Frame {
            masses,
            springs,
            dampers,
            dots,
            label: format!("t = {:.2} s", time),
        })
    }
}

/// 弹簧/阻尼器的上下端点：顶棚-质量1、质量1-质量2、质量2-质量3
fn connection_spans(y: &[f64; NDOF]) -> [(f64, f64); NDOF] {
    [
        (CEILING_Y, y[0] + ATTACH_GAP),
        (y[0] - ATTACH_GAP, y[1] + ATTACH_GAP),
        (y[1] - ATTACH_GAP, y[2] + ATTACH_GAP),
    ]
}

/// 位移轴范围 [1.2·min, 1.2·max]；数据全为零时取 [-1, 1]
fn trace_range(x_t: &DMatrix<f64>) -> (f64, f64) {
    let lo = x_t.min() * 1.2;
    let hi = x_t.max() * 1.2;
    if (hi - lo).abs() < f64::EPSILON {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grid::linspace;

    #[test]
    fn test_make_animation_smoke() {
        let t = linspace(0.0, 5.0, 51);
        let x_t = DMatrix::zeros(t.len(), 3);
        let ani = Animation::new(&t, &x_t, AnimationConfig::default()).unwrap();

        assert_eq!(ani.frame_count(), t.len());
        assert!((0..ani.frame_count()).all(|i| ani.frame(i).is_ok()));
        assert_eq!(ani.y_range(), (-1.0, 1.0));
        assert_eq!(ani.t_range(), (0.0, 5.0));
    }

    #[test]
    fn test_frame_tracks_displacement() {
        let t = vec![0.0, 0.5, 1.0];
        let x_t = DMatrix::from_row_slice(
            3,
            3,
            &[0.0, 0.0, 0.0, 0.1, -0.2, 0.3, -0.1, 0.0, 0.05],
        );
        let ani = Animation::new(&t, &x_t, AnimationConfig::default()).unwrap();
        let frame = ani.frame(1).unwrap();

        assert_eq!(frame.label, "t = 0.50 s");

        // 质量块中心 = base_y + x
        let expected_center = [2.5, 1.4, 1.1];
        for j in 0..3 {
            let center = frame.masses[j].y + frame.masses[j].height / 2.0;
            assert!((center - expected_center[j]).abs() < 1e-12);
            assert!((frame.masses[j].x + 0.3).abs() < 1e-12);
            assert_eq!(frame.dots[j], (0.5, x_t[(1, j)]));
        }

        // 顶棚弹簧从 3.0 连到质量 1 上表面附近
        let top = &frame.springs[0];
        assert_eq!(top.first().unwrap().1, CEILING_Y);
        assert!((top.last().unwrap().1 - 2.6).abs() < 1e-12);
        // 第二个弹簧: 质量1下方 -> 质量2上方
        let mid = &frame.springs[1];
        assert!((mid.first().unwrap().1 - 2.4).abs() < 1e-12);
        assert!((mid.last().unwrap().1 - 1.5).abs() < 1e-12);

        // 阻尼器与弹簧使用相同端点
        let d = &frame.dampers[2];
        assert!((d.lower_rod[0].1 - 1.3).abs() < 1e-12);
        assert!((d.upper_rod[1].1 - 1.2).abs() < 1e-12);
        assert_eq!(d.lower_rod[0].0, DAMPER_X);
    }

    #[test]
    fn test_trace_follows_column() {
        let t = vec![0.0, 0.5, 1.0];
        let x_t = DMatrix::from_row_slice(
            3,
            3,
            &[0.0, 1.0, 2.0, 0.1, 1.1, 2.1, 0.2, 1.2, 2.2],
        );
        let ani = Animation::new(&t, &x_t, AnimationConfig::default()).unwrap();

        for j in 0..3 {
            let trace: Vec<Point> = ani.trace(j).collect();
            assert_eq!(trace.len(), t.len());
            for (i, &(ti, xi)) in trace.iter().enumerate() {
                assert_eq!(ti, t[i]);
                assert_eq!(xi, x_t[(i, j)]);
            }
        }
    }

    #[test]
    fn test_y_range_scaled() {
        let t = vec![0.0, 1.0];
        let x_t = DMatrix::from_row_slice(2, 3, &[0.0, 0.0, 0.0, 1.0, -0.5, 0.2]);
        let ani = Animation::new(&t, &x_t, AnimationConfig::default()).unwrap();
        let (lo, hi) = ani.y_range();
        assert!((lo + 0.6).abs() < 1e-12);
        assert!((hi - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_timing_follows_speed() {
        let t = linspace(0.0, 10.0, 101);
        let x_t = DMatrix::zeros(t.len(), 3);
        let config = AnimationConfig {
            speed: 2.0,
            ..AnimationConfig::default()
        };
        let ani = Animation::new(&t, &x_t, config).unwrap();

        assert!((ani.interval_ms() - 1000.0 * 10.0 / 101.0 / 2.0).abs() < 1e-9);
        assert_eq!(ani.fps(), 20);

        let slow = Animation::new(
            &t,
            &x_t,
            AnimationConfig {
                speed: 0.01,
                ..AnimationConfig::default()
            },
        )
        .unwrap();
        assert_eq!(slow.fps(), 1);
    }

    #[test]
    fn test_invalid_construction() {
        let x_t = DMatrix::zeros(0, 3);
        assert!(matches!(
            Animation::new(&[], &x_t, AnimationConfig::default()),
            Err(ThreeDofError::EmptyTimeVector)
        ));

        let x_t = DMatrix::zeros(2, 3);
        assert!(Animation::new(&[0.0, 1.0, 2.0], &x_t, AnimationConfig::default()).is_err());

        let x_t = DMatrix::zeros(3, 2);
        assert!(Animation::new(&[0.0, 1.0, 2.0], &x_t, AnimationConfig::default()).is_err());

        let x_t = DMatrix::zeros(3, 3);
        let ani = Animation::new(&[0.0, 1.0, 2.0], &x_t, AnimationConfig::default()).unwrap();
        assert!(ani.frame(3).is_err());
    }
}
