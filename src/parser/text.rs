//! 文本题目提取器 - 解析核心
//!
//! 逐行正向扫描，识别 题目/选项/答案/分类/难度/解析 标记并组装题目。
//! 同一题内后出现的标记覆盖先出现的；字段不会跨题继承。
//! 一道题目都没识别出来时改走紧凑格式的备用解析

use crate::error::ParseError;
use crate::models::Difficulty;
use crate::parser::compact;
use crate::parser::normalize::{collect_finalized, QuestionDraft};
use crate::parser::ParseResult;
use regex::Regex;

/// 从文本中提取选择题
///
/// # 参数
/// - `text`: 完整文本内容
/// - `source_file`: 来源文件名（写入每道题的 source 字段）
pub fn extract_questions_from_text(
    text: &str,
    source_file: &str,
) -> Result<ParseResult, ParseError> {
    // 题目起始: 数字开头 + 分隔符
    let question_start = Regex::new(r"^(\d+)[:.、]\s*(.+)")?;
    let option_line = Regex::new(r"^([A-D])[.、)\s]\s*(.+)")?;
    let answer_line = Regex::new(r"(?i)(?:答案|正确答案|Answer)[:：\s]*([A-D])")?;
    let category_line = Regex::new(r"(?i)(?:分类|类别|Category)[:：\s]*(.+)")?;
    let difficulty_line =
        Regex::new(r"(?i)(?:难度|Difficulty)[:：\s]*(简单|中等|困难|easy|medium|hard)")?;
    let explanation_line = Regex::new(r"(?i)(?:解析|Explanation)[:：\s]*(.+)")?;

    let mut questions = Vec::new();
    let mut categories: Vec<String> = Vec::new();
    let mut current: Option<QuestionDraft> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = question_start.captures(line) {
            // 结算上一道题，开始新题
            if let Some(draft) = current.take() {
                collect_finalized(draft, source_file, &mut questions, &mut categories);
            }
            current = Some(QuestionDraft::new(&caps[2]));
        } else if let Some(draft) = current.as_mut() {
            if let Some(caps) = option_line.captures(line) {
                draft.options.push(caps[2].to_string());
            }
            if let Some(caps) = answer_line.captures(line) {
                draft.correct_answer = Some(caps[1].to_uppercase());
            }
            if let Some(caps) = category_line.captures(line) {
                draft.category = Some(caps[1].trim().to_string());
            }
            if let Some(caps) = difficulty_line.captures(line) {
                draft.difficulty = Difficulty::from_label(&caps[1]);
            }
            if let Some(caps) = explanation_line.captures(line) {
                draft.explanation = Some(caps[1].trim().to_string());
            }
        }
    }

    // 结算最后一道题
    if let Some(draft) = current.take() {
        collect_finalized(draft, source_file, &mut questions, &mut categories);
    }

    // 没有解析到题目时尝试备用解析方法
    if questions.is_empty() {
        return compact::extract_compact_format(text, source_file);
    }

    Ok(ParseResult {
        success: true,
        questions,
        categories,
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_MARKERS: &str = "1. What is 2+2?\nA. 3\nB. 4\n答案: B\n分类: Math\n难度: easy\n解析: basic arithmetic";

    #[test]
    fn extracts_question_with_all_markers() {
        let result = extract_questions_from_text(FULL_MARKERS, "math.txt").unwrap();

        assert!(result.success);
        assert_eq!(result.questions.len(), 1);

        let q = &result.questions[0];
        assert_eq!(q.content, "What is 2+2?");
        assert_eq!(q.options, vec!["3", "4"]);
        assert_eq!(q.correct_answer, "B");
        assert_eq!(q.category, "Math");
        assert_eq!(q.difficulty, Difficulty::Easy);
        assert_eq!(q.explanation.as_deref(), Some("basic arithmetic"));
        assert_eq!(q.source.as_deref(), Some("math.txt"));
        assert_eq!(result.categories, vec!["Math"]);
    }

    #[test]
    fn later_answer_marker_wins() {
        let text = "1. 下列哪个正确?\nA. 甲\nB. 乙\n答案: A\n答案: B";
        let result = extract_questions_from_text(text, "t.txt").unwrap();
        assert_eq!(result.questions[0].correct_answer, "B");
    }

    #[test]
    fn drops_candidate_with_single_option() {
        let text = "1. 只有一个选项的题\nA. 唯一选项\n2. 正常的题\nA. 对\nB. 错\n答案: A";
        let result = extract_questions_from_text(text, "t.txt").unwrap();

        assert_eq!(result.questions.len(), 1);
        assert_eq!(result.questions[0].content, "正常的题");
    }

    #[test]
    fn drops_candidate_without_answer() {
        let text = "1. 没有答案的题\nA. 甲\nB. 乙\nC. 丙";
        let result = extract_questions_from_text(text, "t.txt").unwrap();

        assert!(!result.success);
        assert!(result.questions.is_empty());
        assert!(result.error.is_none());
    }

    #[test]
    fn fields_do_not_leak_across_questions() {
        let text = "1. 第一题\nA. 甲\nB. 乙\n答案: A\n分类: 历史\n难度: 困难\n2. 第二题\nA. 对\nB. 错\n答案: B";
        let result = extract_questions_from_text(text, "t.txt").unwrap();

        assert_eq!(result.questions.len(), 2);
        let second = &result.questions[1];
        assert_eq!(second.category, "未分类");
        assert_eq!(second.difficulty, Difficulty::Medium);
    }

    #[test]
    fn chinese_markers_and_delimiters() {
        let text = "1、中国的首都是?\nA、北京\nB、上海\nC、广州\n正确答案：A\n类别：地理\n难度：简单";
        let result = extract_questions_from_text(text, "t.txt").unwrap();

        let q = &result.questions[0];
        assert_eq!(q.content, "中国的首都是?");
        assert_eq!(q.options.len(), 3);
        assert_eq!(q.correct_answer, "A");
        assert_eq!(q.category, "地理");
        assert_eq!(q.difficulty, Difficulty::Easy);
    }

    #[test]
    fn no_markers_falls_through_to_soft_failure() {
        let result = extract_questions_from_text("这里没有任何题目标记", "t.txt").unwrap();

        assert!(!result.success);
        assert!(result.questions.is_empty());
        assert!(result.error.is_none());
    }

    #[test]
    fn rerun_yields_identical_structure() {
        let a = extract_questions_from_text(FULL_MARKERS, "math.txt").unwrap();
        let b = extract_questions_from_text(FULL_MARKERS, "math.txt").unwrap();

        assert_eq!(a.questions.len(), b.questions.len());
        for (x, y) in a.questions.iter().zip(b.questions.iter()) {
            assert_eq!(x.content, y.content);
            assert_eq!(x.options, y.options);
            assert_eq!(x.correct_answer, y.correct_answer);
            assert_eq!(x.category, y.category);
            assert_eq!(x.difficulty, y.difficulty);
        }
        assert_eq!(a.categories, b.categories);
    }

    #[test]
    fn every_emitted_question_is_well_formed() {
        let text = "1. 好题\nA. 甲\nB. 乙\n答案: A\n2. 缺选项\n答案: B\n3. 又一道好题\nA. 对\nB. 错\nC. 不确定\n答案: C";
        let result = extract_questions_from_text(text, "t.txt").unwrap();

        assert_eq!(result.questions.len(), 2);
        for q in &result.questions {
            assert!(q.options.len() >= 2);
            assert!(!q.content.is_empty());
            assert!(!q.correct_answer.is_empty());
        }
    }
}
