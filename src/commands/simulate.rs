//! # simulate 命令实现
//!
//! 完整流程：参数 → M/C/K → 状态空间 → 强迫响应 → 动画 → 文件。
//!
//! ## 依赖关系
//! - 使用 `cli/simulate.rs` 定义的 SimulateArgs
//! - 使用 `system/`, `forces/` 进行计算
//! - 使用 `animation/` 渲染，`export/` 导出数据

use crate::animation::{self, Animation, AnimationConfig};
use crate::cli::simulate::{ForceKind, SimulateArgs};
use crate::error::{Result, ThreeDofError};
use crate::export;
use crate::forces::{build_input, chirp_force, sine_force};
use crate::system::{eigen_properties, simulate_response, state_space, NDOF};
use crate::utils::grid::linspace;
use crate::utils::output;

/// 执行 simulate 命令
pub fn execute(args: SimulateArgs) -> Result<()> {
    output::print_header("3-DOF Mass-Spring-Damper Simulation");

    validate(&args)?;

    // 系统矩阵
    let params = args.system.parameters();
    output::print_info("System parameters:");
    output::print_param("m", &format!("{}", params.m));
    output::print_param("c / c1", &format!("{} / {}", params.c, params.c1));
    output::print_param("k / k1", &format!("{} / {}", params.k, params.k1));

    let matrices = params.matrices();
    let ss = state_space(&matrices)?;
    let modal = eigen_properties(&matrices)?;
    output::print_info(&format!(
        "State space: {} states, {} inputs, {} outputs",
        ss.n_states(),
        ss.n_inputs(),
        ss.n_outputs()
    ));
    output::print_info(&format!(
        "Natural frequencies: {}",
        modal
            .frequencies_hz
            .iter()
            .map(|f| format!("{:.4} Hz", f))
            .collect::<Vec<_>>()
            .join(", ")
    ));

    // 激励
    let t = linspace(0.0, args.t_end, args.samples);
    let f_t = match args.force {
        ForceKind::Sine => {
            output::print_info(&format!(
                "Sine force on mass {}: {} N at {} Hz",
                args.dof, args.amp, args.freq
            ));
            sine_force(&t, args.freq, args.amp)
        }
        ForceKind::Chirp => {
            output::print_info(&format!(
                "Chirp force on mass {}: {} N, {} -> {} Hz, phase {}°",
                args.dof, args.amp, args.f0, args.f1, args.phase
            ));
            chirp_force(&t, args.f0, args.f1, args.amp, args.phase)
        }
    };
    let u = build_input(&t, (args.dof - 1) as usize, &f_t, NDOF)?;

    // 积分
    output::print_info(&format!(
        "Integrating {} samples over {} s ({} interpolation)",
        t.len(),
        args.t_end,
        args.interp
    ));
    let response = simulate_response(&ss, &t, &u, args.interp.into())?;
    let x_t = response.displacements(NDOF);
    let peaks = response.peak_amplitudes(0);
    output::print_success(&format!(
        "Peak displacements: {:.4e} m, {:.4e} m, {:.4e} m",
        peaks[0], peaks[1], peaks[2]
    ));

    if let Some(ref csv_path) = args.csv {
        export::response_to_csv(&response, csv_path)?;
        output::print_success(&format!("Response saved to '{}'", csv_path.display()));
    }

    // 动画
    let config = AnimationConfig {
        fps: args.fps,
        speed: args.speed,
        width: args.width,
        height: args.height,
        ..AnimationConfig::default()
    };
    let ani = Animation::new(&response.t, &x_t, config)?;
    output::print_info(&format!(
        "Animation: {} frames, interval {:.1} ms, {} fps",
        ani.frame_count(),
        ani.interval_ms(),
        ani.fps()
    ));

    if let Some(ref preview) = args.preview {
        let index = args
            .preview_frame
            .unwrap_or_else(|| ani.frame_count() - 1);
        animation::save_frame(&ani, preview, index)?;
        output::print_success(&format!(
            "Preview of frame {} saved to '{}'",
            index,
            preview.display()
        ));
    }

    if args.no_gif {
        output::print_warning("GIF rendering skipped (--no-gif)");
    } else {
        let written = animation::save_gif(&ani, &args.output, args.gif_fps, args.frame_step)?;
        output::print_done(&format!(
            "Animation saved as {} ({} frames)",
            args.output.display(),
            written
        ));
    }

    Ok(())
}

/// 检查时间网格与动画参数
fn validate(args: &SimulateArgs) -> Result<()> {
    if !(args.t_end > 0.0) {
        return Err(ThreeDofError::InvalidArgument(format!(
            "--t-end must be positive, got {}",
            args.t_end
        )));
    }
    if args.samples == 0 {
        return Err(ThreeDofError::InvalidArgument(
            "--samples must be at least 1".into(),
        ));
    }
    if args.frame_step == 0 {
        return Err(ThreeDofError::InvalidArgument(
            "--frame-step must be at least 1".into(),
        ));
    }
    if args.fps == 0 || args.gif_fps == Some(0) {
        return Err(ThreeDofError::InvalidArgument("frame rate must be positive".into()));
    }
    if let Some(index) = args.preview_frame {
        if index >= args.samples {
            return Err(ThreeDofError::InvalidArgument(format!(
                "--preview-frame {} out of range (0..{})",
                index, args.samples
            )));
        }
    }
    Ok(())
}
