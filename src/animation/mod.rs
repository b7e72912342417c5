//! # 动画模块
//!
//! 左侧为机械示意图（质量块、弹簧、阻尼器），右侧为位移时程曲线，
//! 所有图元由同一个时间索引驱动。
//!
//! ## 子模块
//! - `geometry`: 弹簧折线与阻尼器图元的几何计算
//! - `scene`: 动画配置、帧数据（更新回调）
//! - `render`: 使用 `plotters` 绘制单帧
//! - `writer`: GIF 动画与单帧图片输出
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 调用
//! - 使用 `plotters` 渲染，GIF 编码由 plotters 的 bitmap_gif 后端完成

pub mod geometry;
pub mod render;
pub mod scene;
pub mod writer;

pub use scene::{Animation, AnimationConfig};
pub use writer::{save_frame, save_gif};
