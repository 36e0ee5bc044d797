//! KOFDXF 文件处理
//!
//! 支持：
//! - `.kof` 读取（无效字节替换后继续）
//! - 测量点 → 标记图元
//! - `.dxf` 导出/导入

pub mod document;
pub mod dxf_io;
pub mod emitter;
pub mod error;
pub mod kof_io;

pub use document::Document;
pub use emitter::{emit, Emitter};
pub use error::FileError;
