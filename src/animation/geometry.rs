//! # 示意图几何
//!
//! 纯数据计算，不依赖绘图后端。

use crate::utils::grid::linspace;

/// 二维点 (x, y)
pub type Point = (f64, f64);

/// 矩形，`(x, y)` 为左下角；高度可为负（向下延伸）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// 两个对角点，供绘图后端使用
    pub fn corners(&self) -> [Point; 2] {
        [(self.x, self.y), (self.x + self.width, self.y + self.height)]
    }
}

/// 阻尼器：下连杆、缸体、上连杆
#[derive(Debug, Clone, PartialEq)]
pub struct Damper {
    pub lower_rod: [Point; 2],
    pub body: Rect,
    pub upper_rod: [Point; 2],
}

/// 弹簧折线
///
/// 在 `y0..=y1` 上均匀取 `coils * 2` 个点，x 在 `x - width` 与
/// `x + width` 之间交替。
pub fn spring_points(x: f64, y0: f64, y1: f64, coils: usize, width: f64) -> Vec<Point> {
    let n = coils * 2;
    linspace(y0, y1, n)
        .into_iter()
        .enumerate()
        .map(|(i, y)| {
            let xi = if i % 2 == 0 { x - width } else { x + width };
            (xi, y)
        })
        .collect()
}

/// 阻尼器图元
///
/// `h = y1 - y0`；下连杆占 30%，缸体占 20%，上连杆从 50% 到终点。
pub fn damper_geometry(x: f64, y0: f64, y1: f64, width: f64) -> Damper {
    let h = y1 - y0;
    Damper {
        lower_rod: [(x, y0), (x, y0 + h * 0.3)],
        body: Rect {
            x: x - width / 2.0,
            y: y0 + h * 0.3,
            width,
            height: h * 0.2,
        },
        upper_rod: [(x, y0 + h * 0.5), (x, y1)],
    }
}
