//! 题目归一化 - 各提取器共享的校验与默认值逻辑

use crate::models::{generate_id, Difficulty, Question};

/// 未识别出分类时使用的占位分类
pub const UNCATEGORIZED: &str = "未分类";

/// 扫描过程中的在建题目
///
/// 文本提取器的扫描状态只有两种：空闲（`None`）和在建（`Some(QuestionDraft)`），
/// 遇到新的题目起始行或扫描结束时结算当前草稿
#[derive(Debug, Default)]
pub struct QuestionDraft {
    pub content: String,
    pub options: Vec<String>,
    pub correct_answer: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub explanation: Option<String>,
}

impl QuestionDraft {
    /// 以题目内容开始一份新草稿
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// 校验草稿并生成最终题目
    ///
    /// 内容为空、缺少答案或选项少于 2 个时返回 `None`（静默丢弃，不报错）。
    /// 成功时补齐默认分类与难度，并写入来源文件名
    pub fn finalize(self, source_file: &str) -> Option<Question> {
        let content = self.content.trim();
        if content.is_empty() || self.options.len() < 2 {
            return None;
        }
        let correct_answer = self.correct_answer?;

        Some(Question {
            id: generate_id(),
            content: content.to_string(),
            options: self.options,
            correct_answer,
            category: self.category.unwrap_or_else(|| UNCATEGORIZED.to_string()),
            difficulty: self.difficulty.unwrap_or_default(),
            explanation: self.explanation,
            source: Some(source_file.to_string()),
        })
    }
}

/// 结算一份草稿：通过校验则收进结果集，并登记分类
pub(super) fn collect_finalized(
    draft: QuestionDraft,
    source_file: &str,
    questions: &mut Vec<Question>,
    categories: &mut Vec<String>,
) {
    if let Some(question) = draft.finalize(source_file) {
        if !categories.contains(&question.category) {
            categories.push(question.category.clone());
        }
        questions.push(question);
    }
}
