//! 表格题库提取器
//!
//! 固定列布局（第一行为表头）：
//! 0=题目, 1-4=选项A-D, 5=答案, 6=分类, 7=难度, 8=解析

use crate::error::ParseError;
use crate::models::Difficulty;
use crate::parser::normalize::{collect_finalized, QuestionDraft};
use crate::parser::ParseResult;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

/// 从 Excel 字节流提取题目
///
/// 只读取第一个工作表；解码失败属于硬失败，由调用方转换为错误结果
pub fn extract_questions_from_workbook(
    bytes: &[u8],
    source_file: &str,
) -> Result<ParseResult, ParseError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| ParseError::Excel(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ParseError::Excel("工作簿中没有工作表".to_string()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ParseError::Excel(e.to_string()))?;

    Ok(extract_from_rows(range.rows(), source_file))
}

/// 将单元格网格逐行映射为题目
///
/// 跳过表头行；少于 3 个单元格、题目列为空或选项不足 2 个的行直接跳过
pub fn extract_from_rows<'a>(
    rows: impl Iterator<Item = &'a [Data]>,
    source_file: &str,
) -> ParseResult {
    let mut questions = Vec::new();
    let mut categories = Vec::new();

    for row in rows.skip(1) {
        if row.len() < 3 {
            continue;
        }
        let content = cell_to_string(&row[0]);
        if content.is_empty() {
            continue;
        }

        let mut draft = QuestionDraft::new(content);
        for cell in row.iter().skip(1).take(4) {
            let value = cell_to_string(cell);
            if !value.is_empty() {
                draft.options.push(value);
            }
        }
        if draft.options.len() < 2 {
            continue;
        }

        let answer = match row.get(5).map(cell_to_string) {
            Some(a) if !a.is_empty() => a.to_uppercase(),
            _ => "A".to_string(),
        };
        draft.correct_answer = Some(answer);

        if let Some(category) = row.get(6).map(cell_to_string).filter(|c| !c.is_empty()) {
            draft.category = Some(category);
        }
        if let Some(label) = row.get(7).map(cell_to_string) {
            draft.difficulty = Difficulty::from_label(&label);
        }
        if let Some(explanation) = row.get(8).map(cell_to_string).filter(|e| !e.is_empty()) {
            draft.explanation = Some(explanation);
        }

        collect_finalized(draft, source_file, &mut questions, &mut categories);
    }

    ParseResult {
        success: !questions.is_empty(),
        questions,
        categories,
        error: None,
    }
}

/// 单元格转字符串
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // 整数值不显示小数点
            if f.fract() == 0.0 {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("#ERR:{:?}", e),
    }
}
