//! 持久化仓库 - 单文档 JSON 存储
//!
//! 整个应用状态序列化为一份 JSON 文件，所有修改都是"读出-改动-写回"，
//! 且只在单个任务中串行执行，不存在交错写入。
//! 文件缺失或损坏时回退到默认状态，不视为错误

use crate::error::StorageError;
use crate::models::{AppState, ExamRecord, Question, QuestionBank, Settings, WrongAnswer};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

/// 应用状态仓库
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取根文档
    ///
    /// 文件不存在返回默认状态；内容无法解析时告警后同样回退默认状态
    pub async fn load(&self) -> AppState {
        match fs::read_to_string(&self.path).await {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(state) => state,
                Err(e) => {
                    warn!("数据文件解析失败，使用默认状态: {}", e);
                    AppState::default()
                }
            },
            Err(_) => AppState::default(),
        }
    }

    /// 写回根文档
    pub async fn save(&self, state: &AppState) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(state)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorageError::WriteFailed {
                        path: parent.display().to_string(),
                        source: e,
                    })?;
            }
        }

        fs::write(&self.path, json)
            .await
            .map_err(|e| StorageError::WriteFailed {
                path: self.path.display().to_string(),
                source: e,
            })
    }

    /// 添加题库
    pub async fn add_question_bank(&self, bank: QuestionBank) -> Result<(), StorageError> {
        let mut state = self.load().await;
        state.question_banks.push(bank);
        self.save(&state).await
    }

    /// 删除题库
    ///
    /// # 返回
    /// 是否真的删掉了一个题库
    pub async fn delete_question_bank(&self, bank_id: &str) -> Result<bool, StorageError> {
        let mut state = self.load().await;
        let before = state.question_banks.len();
        state.question_banks.retain(|b| b.id != bank_id);
        let removed = state.question_banks.len() < before;
        if removed {
            self.save(&state).await?;
        }
        Ok(removed)
    }

    /// 添加考试记录
    pub async fn add_exam_record(&self, record: ExamRecord) -> Result<(), StorageError> {
        let mut state = self.load().await;
        state.exam_history.push(record);
        self.save(&state).await
    }

    /// 更新考试记录（按 id 覆盖）
    pub async fn update_exam_record(&self, record: ExamRecord) -> Result<bool, StorageError> {
        let mut state = self.load().await;
        match state.exam_history.iter().position(|r| r.id == record.id) {
            Some(index) => {
                state.exam_history[index] = record;
                self.save(&state).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 记录错题
    ///
    /// 同一道题再次答错时累加错误次数并刷新答案和时间戳
    pub async fn add_wrong_answer(
        &self,
        question: Question,
        user_answer: &str,
        exam_id: &str,
    ) -> Result<(), StorageError> {
        let mut state = self.load().await;

        match state
            .wrong_answers
            .iter()
            .position(|w| w.question.id == question.id)
        {
            Some(index) => {
                let existing = &mut state.wrong_answers[index];
                existing.count += 1;
                existing.user_answer = user_answer.to_string();
                existing.timestamp = chrono::Utc::now().timestamp_millis();
            }
            None => {
                state
                    .wrong_answers
                    .push(WrongAnswer::new(question, user_answer, exam_id));
            }
        }

        self.save(&state).await
    }

    /// 移除错题
    pub async fn remove_wrong_answer(&self, question_id: &str) -> Result<bool, StorageError> {
        let mut state = self.load().await;
        let before = state.wrong_answers.len();
        state.wrong_answers.retain(|w| w.question.id != question_id);
        let removed = state.wrong_answers.len() < before;
        if removed {
            self.save(&state).await?;
        }
        Ok(removed)
    }

    /// 所有题库中的全部题目（每道题一份副本）
    pub async fn all_questions(&self) -> Vec<Question> {
        self.load()
            .await
            .question_banks
            .into_iter()
            .flat_map(|bank| bank.questions)
            .collect()
    }

    /// 按分类筛选题目
    pub async fn questions_by_category(&self, category: &str) -> Vec<Question> {
        let mut questions = self.all_questions().await;
        questions.retain(|q| q.category == category);
        questions
    }

    /// 所有出现过的分类（跨题库去重）
    pub async fn all_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for bank in self.load().await.question_banks {
            for category in bank.categories {
                if !categories.contains(&category) {
                    categories.push(category);
                }
            }
        }
        categories
    }

    /// 更新练习设置
    pub async fn update_settings(&self, settings: Settings) -> Result<(), StorageError> {
        let mut state = self.load().await;
        state.settings = settings;
        self.save(&state).await
    }

    /// 导出全部数据为 JSON 字符串
    pub async fn export_json(&self) -> Result<String, StorageError> {
        let state = self.load().await;
        Ok(serde_json::to_string_pretty(&state)?)
    }

    /// 从 JSON 字符串导入数据（整体覆盖，缺失字段按默认值补齐）
    pub async fn import_json(&self, json: &str) -> Result<(), StorageError> {
        let state: AppState = serde_json::from_str(json)?;
        self.save(&state).await
    }

    /// 清除所有数据（删除数据文件）
    pub async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::DeleteFailed {
                path: self.path.display().to_string(),
                source: e,
            }),
        }
    }
}
