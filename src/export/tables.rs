//! # CSV 表格导出
//!
//! ## 支持内容
//! - 响应: t, x1..x3, v1..v3
//! - 模态: mode, lambda, frequency_hz, psi1..psi3
//! - 扫频: frequency_hz, amp1..amp3

use crate::batch::SweepPoint;
use crate::error::{Result, ThreeDofError};
use crate::system::{ModalProperties, Response, NDOF};

use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ResponseRow {
    t: f64,
    x1: f64,
    x2: f64,
    x3: f64,
    v1: f64,
    v2: f64,
    v3: f64,
}

#[derive(Serialize)]
struct ModeRow {
    mode: usize,
    lambda: f64,
    frequency_hz: f64,
    psi1: f64,
    psi2: f64,
    psi3: f64,
}

#[derive(Serialize)]
struct SweepRow {
    frequency_hz: f64,
    amp1: f64,
    amp2: f64,
    amp3: f64,
}

/// 导出时域响应（位移与速度）
pub fn response_to_csv(response: &Response, output_path: &Path) -> Result<()> {
    let x = response.displacements(NDOF);
    let v = response.velocities(NDOF);

    write_rows(
        output_path,
        response.t.iter().enumerate().map(|(i, &t)| ResponseRow {
            t,
            x1: x[(i, 0)],
            x2: x[(i, 1)],
            x3: x[(i, 2)],
            v1: v[(i, 0)],
            v2: v[(i, 1)],
            v3: v[(i, 2)],
        }),
    )
}

/// 导出模态表
pub fn modes_to_csv(modal: &ModalProperties, output_path: &Path) -> Result<()> {
    write_rows(
        output_path,
        (0..NDOF).map(|i| {
            let psi = modal.mode_shape(i);
            ModeRow {
                mode: i + 1,
                lambda: modal.eigenvalues[i],
                frequency_hz: modal.frequencies_hz[i],
                psi1: psi[0],
                psi2: psi[1],
                psi3: psi[2],
            }
        }),
    )
}

/// 导出扫频幅值
pub fn sweep_to_csv(points: &[SweepPoint], output_path: &Path) -> Result<()> {
    write_rows(
        output_path,
        points.iter().map(|p| SweepRow {
            frequency_hz: p.frequency,
            amp1: p.amplitudes[0],
            amp2: p.amplitudes[1],
            amp3: p.amplitudes[2],
        }),
    )
}

fn write_rows<R: Serialize>(output_path: &Path, rows: impl Iterator<Item = R>) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(|e| ThreeDofError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    Ok(())
}
