//! # 数据导出模块
//!
//! 将响应轨迹、模态表和扫频结果导出为 CSV，并绘制幅频图。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `csv` + `serde` 写入表格，`plotters` 绘图

pub mod plot;
pub mod tables;

pub use tables::{modes_to_csv, response_to_csv, sweep_to_csv};
