//! # 统一错误处理模块
//!
//! 定义 threedof 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// threedof 统一错误类型
#[derive(Error, Debug)]
pub enum ThreeDofError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 数值错误
    // ─────────────────────────────────────────────────────────────
    #[error("Singular matrix: {0}")]
    SingularMatrix(String),

    #[error("Dimension mismatch for {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: String,
        expected: String,
        found: String,
    },

    #[error("Time vector is empty")]
    EmptyTimeVector,

    #[error("Time steps are not equally spaced (step {index}: {found:.6e} vs {expected:.6e})")]
    NonUniformTimeStep {
        index: usize,
        expected: f64,
        found: f64,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Rendering failed: {0}")]
    RenderError(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl ThreeDofError {
    /// 构造维度不匹配错误
    pub fn dimension(what: &str, expected: impl ToString, found: impl ToString) -> Self {
        ThreeDofError::DimensionMismatch {
            what: what.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ThreeDofError>;
