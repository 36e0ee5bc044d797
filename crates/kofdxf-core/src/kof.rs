//! KOF 记录解析器
//!
//! 只识别一种固定格式的点记录：
//!
//! ```text
//! 05 P657 (0)             1216203.852  120379.229  117.036
//! ^  ^    ^               ^ 北         ^ 东         ^ 高程
//! 编码 点号 括号内整数
//! ```
//!
//! 整行匹配，前后空白忽略，数字只认 ASCII `0-9`。行尾可以是 `\n`、`\r\n`
//! 或单独的 `\r`。不匹配的行（文件头、空行、其他记录类型）直接跳过，不是错误。

use crate::error::KofError;
use crate::survey::SurveyPoint;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use tracing::{debug, warn};

static POINT_RECORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\s*(?P<code>[0-9]+)\s+(?P<id>[A-Za-z0-9_.-]+)\s+\(\s*[0-9]+\s*\)\s+",
        r"(?P<northing>[+-]?[0-9]+(?:\.[0-9]+)?)\s+",
        r"(?P<easting>[+-]?[0-9]+(?:\.[0-9]+)?)\s+",
        r"(?P<elevation>[+-]?[0-9]+(?:\.[0-9]+)?)\s*$",
    ))
    .expect("KOF point record pattern is valid")
});

/// 解析单行，不匹配返回 `None`
pub fn parse_line(line: &str) -> Option<SurveyPoint> {
    let caps = POINT_RECORD.captures(line)?;
    let number = |name: &str| caps[name].parse::<f64>().ok();

    Some(SurveyPoint {
        code: caps["code"].to_string(),
        id: caps["id"].to_string(),
        northing: number("northing")?,
        easting: number("easting")?,
        elevation: number("elevation")?,
    })
}

/// 解析全部文本，跳过不匹配的行，保持输入顺序
pub fn parse_points(text: &str) -> Vec<SurveyPoint> {
    let mut skipped = 0usize;
    let points: Vec<SurveyPoint> = text
        .split(['\n', '\r'])
        // `\r\n` 之间的空段
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let point = parse_line(line);
            if point.is_none() {
                skipped += 1;
            }
            point
        })
        .collect();

    debug!(parsed = points.len(), skipped, "scanned KOF text");
    points
}

/// 解析全部文本，一个点都没有时报 [`KofError::NoPointsParsed`]
pub fn parse_kof(text: &str) -> Result<Vec<SurveyPoint>, KofError> {
    let points = parse_points(text);
    if points.is_empty() {
        return Err(KofError::NoPointsParsed);
    }
    Ok(points)
}

/// 把原始字节解码为文本
///
/// 无效的 UTF-8 序列替换为 U+FFFD 并继续，开头的 BOM 会被去掉。
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let text = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = text {
        warn!("input contains invalid UTF-8; undecodable bytes were replaced");
    }
    text
}
