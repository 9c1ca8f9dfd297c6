//! 文件解析入口 - 按扩展名分发到对应的提取器
//!
//! - .xlsx / .xls → 表格提取器
//! - .docx / .doc → Word 解码后走文本提取器
//! - .pdf → 字节流抢救后走文本提取器
//! - .txt / .csv → 直接走文本提取器
//!
//! 解码错误在单个文件的边界内被捕获并转换为失败的 `ParseResult`，
//! 不会打断其它文件的导入

pub mod compact;
pub mod document;
pub mod normalize;
pub mod tabular;
pub mod text;

use crate::error::ParseError;
use crate::models::Question;
use serde::{Deserialize, Serialize};

/// 文件解析结果
///
/// 两种失败形态：硬失败带 `error` 描述；软失败（什么都没识别出来）
/// 只有 `success: false` 和空题目列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    pub success: bool,
    pub questions: Vec<Question>,
    /// 出现过的分类（去重，按出现顺序）
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParseResult {
    /// 硬失败：带错误描述的空结果
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            questions: Vec::new(),
            categories: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// 通用文件解析入口
pub fn parse_file(file_name: &str, bytes: &[u8]) -> ParseResult {
    match dispatch(file_name, bytes) {
        Ok(result) => result,
        Err(e) => ParseResult::failure(e.to_string()),
    }
}

/// 按扩展名（不区分大小写）选择提取器
fn dispatch(file_name: &str, bytes: &[u8]) -> Result<ParseResult, ParseError> {
    let lower = file_name.to_lowercase();

    if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
        tabular::extract_questions_from_workbook(bytes, file_name)
    } else if lower.ends_with(".docx") || lower.ends_with(".doc") {
        let decoded = document::extract_docx_text(bytes)?;
        text::extract_questions_from_text(&decoded, file_name)
    } else if lower.ends_with(".pdf") {
        let salvaged = document::salvage_pdf_text(bytes)?;
        text::extract_questions_from_text(&salvaged, file_name)
    } else if lower.ends_with(".txt") || lower.ends_with(".csv") {
        text::extract_questions_from_text(&String::from_utf8_lossy(bytes), file_name)
    } else {
        Err(ParseError::UnsupportedFormat)
    }
}
