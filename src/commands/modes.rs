//! # modes 命令实现
//!
//! 打印特征值、固有频率和振型表格，可选导出 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/modes.rs` 定义的参数
//! - 使用 `system/modal.rs`, `export/`

use crate::cli::modes::ModesArgs;
use crate::error::Result;
use crate::export;
use crate::system::{eigen_properties, ModalProperties, NDOF};
use crate::utils::output;

/// 执行 modes 命令
pub fn execute(args: ModesArgs) -> Result<()> {
    output::print_header("Natural Frequencies and Mode Shapes");

    let params = args.system.parameters();
    output::print_info(&format!(
        "m = {}, c = {}, c1 = {}, k = {}, k1 = {}",
        params.m, params.c, params.c1, params.k, params.k1
    ));

    let modal = eigen_properties(&params.matrices())?;
    print_mode_table(&modal);

    if let Some(ref path) = args.csv {
        export::modes_to_csv(&modal, path)?;
        output::print_success(&format!("Modal table saved to '{}'", path.display()));
    }

    Ok(())
}

/// 打印模态表格
pub fn print_mode_table(modal: &ModalProperties) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct ModeRow {
        #[tabled(rename = "Mode")]
        mode: usize,
        #[tabled(rename = "λ (rad²/s²)")]
        lambda: String,
        #[tabled(rename = "ω (rad/s)")]
        omega: String,
        #[tabled(rename = "f (Hz)")]
        freq: String,
        #[tabled(rename = "ψ (mass 1, 2, 3)")]
        shape: String,
    }

    let omega = modal.angular_frequencies();
    let rows: Vec<ModeRow> = (0..NDOF)
        .map(|i| {
            let psi = modal.mode_shape(i);
            ModeRow {
                mode: i + 1,
                lambda: format!("{:.4}", modal.eigenvalues[i]),
                omega: format!("{:.4}", omega[i]),
                freq: format!("{:.4}", modal.frequencies_hz[i]),
                shape: format!("{:+.4}, {:+.4}, {:+.4}", psi[0], psi[1], psi[2]),
            }
        })
        .collect();

    println!("{}", Table::new(&rows));
}
