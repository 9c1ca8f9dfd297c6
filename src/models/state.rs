//! 持久化状态模型
//!
//! 整个应用的数据都挂在单个 `AppState` 根文档下，序列化为一份 JSON 文件

use crate::models::question::{generate_id, Question};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 当前毫秒级时间戳
fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// 题库：从一个文件导入的一组题目
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBank {
    pub id: String,
    pub name: String,
    pub questions: Vec<Question>,
    pub categories: Vec<String>,
    /// 导入时间（毫秒时间戳）
    pub import_time: i64,
    /// 来源文件名
    pub source_file: String,
}

/// 考试记录
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRecord {
    pub id: String,
    pub title: String,
    pub start_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    pub questions: Vec<Question>,
    /// questionId -> 所选答案
    pub answers: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    pub is_completed: bool,
}

impl ExamRecord {
    /// 创建一场新考试（未作答状态）
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            start_time: now_millis(),
            end_time: None,
            questions,
            answers: HashMap::new(),
            score: None,
            is_completed: false,
        }
    }

    /// 交卷：写入答案和得分
    pub fn complete(&mut self, answers: HashMap<String, String>, score: u32) {
        self.end_time = Some(now_millis());
        self.answers = answers;
        self.score = Some(score);
        self.is_completed = true;
    }
}

/// 错题记录
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrongAnswer {
    pub question: Question,
    pub user_answer: String,
    pub exam_id: String,
    pub timestamp: i64,
    /// 错误次数
    pub count: u32,
}

impl WrongAnswer {
    pub fn new(question: Question, user_answer: impl Into<String>, exam_id: impl Into<String>) -> Self {
        Self {
            question,
            user_answer: user_answer.into(),
            exam_id: exam_id.into(),
            timestamp: now_millis(),
            count: 1,
        }
    }
}

/// 练习设置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// 默认组卷题目数量
    pub default_question_count: usize,
    /// 答错时是否显示解析
    pub show_explanation: bool,
    /// 是否乱序出题
    pub random_order: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_question_count: 20,
            show_explanation: true,
            random_order: true,
        }
    }
}

/// 应用状态根文档
///
/// 所有字段都带 default，旧版本数据文件缺字段时按默认值补齐
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub question_banks: Vec<QuestionBank>,
    #[serde(default)]
    pub exam_history: Vec<ExamRecord>,
    #[serde(default)]
    pub wrong_answers: Vec<WrongAnswer>,
    #[serde(default)]
    pub settings: Settings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_state_tolerates_missing_fields() {
        let state: AppState = serde_json::from_str("{}").unwrap();
        assert!(state.question_banks.is_empty());
        assert_eq!(state.settings.default_question_count, 20);
        assert!(state.settings.random_order);
    }

    #[test]
    fn exam_record_complete_sets_score() {
        let mut record = ExamRecord::new("测试", Vec::new());
        assert!(!record.is_completed);

        record.complete(HashMap::new(), 85);
        assert!(record.is_completed);
        assert_eq!(record.score, Some(85));
        assert!(record.end_time.is_some());
    }
}
