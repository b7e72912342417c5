//! # 激励信号
//!
//! - 正弦: `amp · sin(2π f t)`
//! - 线性扫频: `amp · cos(2π (f0 t + β t² / 2) + φ)`，`β = (f1 - f0) / t1`，
//!   `t1` 取时间向量的最后一个值，`φ` 以度为单位

use std::f64::consts::PI;

/// 正弦力
pub fn sine_force(t: &[f64], freq: f64, amp: f64) -> Vec<f64> {
    t.iter().map(|&ti| amp * (2.0 * PI * freq * ti).sin()).collect()
}

/// 线性扫频力，频率在 `t[0]..t[last]` 内从 `f0` 变到 `f1`
pub fn chirp_force(t: &[f64], f0: f64, f1: f64, amp: f64, phase_deg: f64) -> Vec<f64> {
    let Some(&t1) = t.last() else {
        return Vec::new();
    };
    let beta = if t1 != 0.0 { (f1 - f0) / t1 } else { 0.0 };
    let phi = phase_deg * PI / 180.0;

    t.iter()
        .map(|&ti| amp * (2.0 * PI * (f0 * ti + 0.5 * beta * ti * ti) + phi).cos())
        .collect()
}
