//! 核心错误定义

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KofError {
    #[error("no points found; the input did not contain any KOF point records")]
    NoPointsParsed,

    #[error("malformed configuration: {0}")]
    MalformedConfig(String),

    #[error("marker diameter must be a positive finite number, got {0}")]
    InvalidDiameter(f64),
}
