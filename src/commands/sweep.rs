//! # sweep 命令实现
//!
//! 并行计算各激励频率下的稳态峰值位移，输出 CSV 与可选的幅频图。
//!
//! ## 依赖关系
//! - 使用 `cli/sweep.rs` 定义的 SweepArgs
//! - 使用 `batch/sweep.rs` 并行执行
//! - 使用 `export/` 写出结果

use crate::batch::{frequency_grid, run_sweep, BatchRunner, SweepConfig};
use crate::cli::sweep::SweepArgs;
use crate::error::Result;
use crate::export;
use crate::system::eigen_properties;
use crate::utils::output;

/// 执行 sweep 命令
pub fn execute(args: SweepArgs) -> Result<()> {
    output::print_header("Forcing Frequency Sweep");

    let params = args.system.parameters();
    let modal = eigen_properties(&params.matrices())?;
    let frequencies = frequency_grid(args.from, args.to, args.steps)?;

    output::print_info(&format!(
        "{} frequencies from {} to {} Hz, force on mass {}",
        frequencies.len(),
        args.from,
        args.to,
        args.dof
    ));

    let config = SweepConfig {
        params,
        dof: (args.dof - 1) as usize,
        amp: args.amp,
        t_end: args.t_end,
        samples: args.samples,
        settle: args.settle,
        interpolation: args.interp.into(),
    };

    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!("Using {} parallel jobs", runner.jobs()));

    let result = run_sweep(&config, &frequencies, &runner)?;

    output::print_separator();
    output::print_success(&format!(
        "Sweep complete: {} total, {} success, {} failed",
        result.total(),
        result.success.len(),
        result.failures.len()
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed frequencies:");
        for (freq, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", freq, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    // 每个质量块的最大响应频率
    for j in 0..3 {
        if let Some(best) = result.success.iter().max_by(|a, b| {
            a.amplitudes[j]
                .partial_cmp(&b.amplitudes[j])
                .unwrap_or(std::cmp::Ordering::Equal)
        }) {
            output::print_info(&format!(
                "Mass {}: peak {:.4e} m at {:.4} Hz",
                j + 1,
                best.amplitudes[j],
                best.frequency
            ));
        }
    }

    export::sweep_to_csv(&result.success, &args.output)?;
    output::print_success(&format!("Sweep table saved to '{}'", args.output.display()));

    if let Some(ref plot) = args.plot {
        export::plot::generate_sweep_plot(
            &result.success,
            modal.frequencies_hz.as_slice(),
            plot,
            args.width,
            args.height,
        )?;
        output::print_success(&format!("Sweep plot saved to '{}'", plot.display()));
    }

    Ok(())
}
