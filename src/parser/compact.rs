//! 紧凑格式备用提取器
//!
//! 仅在逐行扫描一无所获时启用。匹配单行内联格式：
//! 题号 + 题目 + (A)选项(B)选项(C)选项[(D)选项] + 答案标记，全文反复匹配。
//! 它之后没有更多备用方案：再匹配不到就是软失败（空结果、无错误信息）

use crate::error::ParseError;
use crate::parser::normalize::{collect_finalized, QuestionDraft};
use crate::parser::ParseResult;
use regex::Regex;

/// 按紧凑格式在全文中提取题目
pub fn extract_compact_format(text: &str, source_file: &str) -> Result<ParseResult, ParseError> {
    // 格式: 题目 (A)选项A (B)选项B (C)选项C [(D)选项D] 答案:X
    let pattern = Regex::new(
        r"(?i)(\d+)[:.、]?\s*([^()]+)\s*\(A\)\s*([^()]+)\s*\(B\)\s*([^()]+)\s*\(C\)\s*([^()]+)(?:\s*\(D\)\s*([^()]+))?\s*(?:答案|Answer)[:：\s]*([A-D])",
    )?;

    let mut questions = Vec::new();
    let mut categories = Vec::new();

    for caps in pattern.captures_iter(text) {
        let mut draft = QuestionDraft::new(caps[2].trim());
        draft.options = vec![
            caps[3].trim().to_string(),
            caps[4].trim().to_string(),
            caps[5].trim().to_string(),
        ];
        if let Some(fourth) = caps.get(6) {
            draft.options.push(fourth.as_str().trim().to_string());
        }
        draft.correct_answer = Some(caps[7].to_uppercase());

        collect_finalized(draft, source_file, &mut questions, &mut categories);
    }

    Ok(ParseResult {
        success: !questions.is_empty(),
        questions,
        categories,
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;
    use crate::parser::normalize::UNCATEGORIZED;

    #[test]
    fn extracts_three_option_inline_question() {
        let text = "5 What color is the sky? (A)Red(B)Blue(C)Green 答案:B";
        let result = extract_compact_format(text, "sky.txt").unwrap();

        assert!(result.success);
        assert_eq!(result.questions.len(), 1);

        let q = &result.questions[0];
        assert_eq!(q.content, "What color is the sky?");
        assert_eq!(q.options, vec!["Red", "Blue", "Green"]);
        assert_eq!(q.correct_answer, "B");
        assert_eq!(q.category, UNCATEGORIZED);
        assert_eq!(q.difficulty, Difficulty::Medium);
        assert!(q.explanation.is_none());
        assert_eq!(result.categories, vec![UNCATEGORIZED]);
    }

    #[test]
    fn fourth_option_is_optional() {
        let text = "1. 一年有几个季节? (A)两个 (B)三个 (C)四个 (D)五个 答案: C";
        let result = extract_compact_format(text, "t.txt").unwrap();

        let q = &result.questions[0];
        assert_eq!(q.options.len(), 4);
        assert_eq!(q.options[3], "五个");
        assert_eq!(q.correct_answer, "C");
    }

    #[test]
    fn matches_repeatedly_in_document_order() {
        let text = "1. 第一题 (A)甲 (B)乙 (C)丙 答案:A\n2. 第二题 (A)对 (B)错 (C)都不对 Answer: B";
        let result = extract_compact_format(text, "t.txt").unwrap();

        assert_eq!(result.questions.len(), 2);
        assert_eq!(result.questions[0].correct_answer, "A");
        assert_eq!(result.questions[1].correct_answer, "B");
    }

    #[test]
    fn no_match_is_soft_failure() {
        let result = extract_compact_format("完全不相关的文本", "t.txt").unwrap();

        assert!(!result.success);
        assert!(result.questions.is_empty());
        assert!(result.error.is_none());
    }
}
