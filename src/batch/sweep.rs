//! # 频率扫描
//!
//! 对一组正弦激励频率分别积分，统计进入稳态后各质量块的峰值位移，
//! 得到幅频曲线。每个频率是一个独立任务，由 `BatchRunner` 并行执行。
//!
//! ## 依赖关系
//! - 被 `commands/sweep.rs` 调用
//! - 使用 `system/`, `forces/`
//! - 使用 `batch/runner.rs` 并行执行

use crate::batch::{BatchResult, BatchRunner, TaskResult};
use crate::error::{Result, ThreeDofError};
use crate::forces::{build_input, sine_force};
use crate::system::{
    simulate_response, state_space, Interpolation, StateSpace, SystemParameters, NDOF,
};
use crate::utils::grid::linspace;

/// 扫描设置
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub params: SystemParameters,
    /// 受力自由度（0 起）
    pub dof: usize,
    pub amp: f64,
    pub t_end: f64,
    pub samples: usize,
    /// 丢弃的瞬态比例 (0..1)
    pub settle: f64,
    pub interpolation: Interpolation,
}

/// 单个频率的稳态峰值
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub frequency: f64,
    pub amplitudes: [f64; NDOF],
}

/// 扫描频率网格（含端点）
pub fn frequency_grid(from: f64, to: f64, steps: usize) -> Result<Vec<f64>> {
    if steps == 0 {
        return Err(ThreeDofError::InvalidArgument(
            "sweep needs at least one step".into(),
        ));
    }
    if !(from > 0.0) || to < from {
        return Err(ThreeDofError::InvalidArgument(format!(
            "invalid frequency range {} - {} Hz (must be 0 < from <= to)",
            from, to
        )));
    }
    Ok(linspace(from, to, steps))
}

/// 计算单个频率点
pub fn sweep_point(ss: &StateSpace, config: &SweepConfig, frequency: f64) -> Result<SweepPoint> {
    let t = linspace(0.0, config.t_end, config.samples);
    let f_t = sine_force(&t, frequency, config.amp);
    let u = build_input(&t, config.dof, &f_t, NDOF)?;
    let response = simulate_response(ss, &t, &u, config.interpolation)?;

    let start = (config.settle * t.len() as f64) as usize;
    let peaks = response.peak_amplitudes(start.min(t.len().saturating_sub(1)));

    Ok(SweepPoint {
        frequency,
        amplitudes: [peaks[0], peaks[1], peaks[2]],
    })
}

/// 并行执行整个扫描，结果按频率升序
pub fn run_sweep(
    config: &SweepConfig,
    frequencies: &[f64],
    runner: &BatchRunner,
) -> Result<BatchResult<SweepPoint>> {
    if config.samples < 2 || !(config.t_end > 0.0) {
        return Err(ThreeDofError::InvalidArgument(format!(
            "sweep needs t_end > 0 and at least 2 samples (got t_end = {}, samples = {})",
            config.t_end, config.samples
        )));
    }
    if !(0.0..1.0).contains(&config.settle) {
        return Err(ThreeDofError::InvalidArgument(format!(
            "settle fraction must be within [0, 1), got {}",
            config.settle
        )));
    }

    let ss = state_space(&config.params.matrices())?;

    let mut result = runner.run(frequencies, "Sweeping", |&f| {
        match sweep_point(&ss, config, f) {
            Ok(point) => TaskResult::Success(point),
            Err(e) => TaskResult::Failed(format!("{:.4} Hz", f), e.to_string()),
        }
    })?;

    result
        .success
        .sort_by(|a, b| a.frequency.partial_cmp(&b.frequency).unwrap_or(std::cmp::Ordering::Equal));
    Ok(result)
}
