//! 导入服务 - 业务能力层
//!
//! 只负责"单个文件 → 题库"能力，不关心批量流程

use crate::models::{generate_id, QuestionBank};
use crate::parser;
use anyhow::{bail, Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// 文件导入服务
pub struct ImportService;

impl ImportService {
    pub fn new() -> Self {
        Self
    }

    /// 解析单个文件并组装题库
    ///
    /// # 返回
    /// - `Ok(Some(bank))`: 成功解析出题目
    /// - `Ok(None)`: 未识别到任何题目（软失败）
    /// - `Err`: 硬失败（文件读不出来、不支持的格式、解码错误）
    pub async fn import_file(&self, path: &Path) -> Result<Option<QuestionBank>> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        let bytes = fs::read(path)
            .await
            .with_context(|| format!("无法读取文件: {}", path.display()))?;

        debug!("开始解析: {} ({} 字节)", file_name, bytes.len());

        let result = parser::parse_file(&file_name, &bytes);
        if let Some(error) = result.error {
            bail!(error);
        }
        if result.questions.is_empty() {
            return Ok(None);
        }

        Ok(Some(self.build_bank(&file_name, result.questions, result.categories)))
    }

    /// 把解析结果包装成题库（生成 id、去掉扩展名作为名称、打上导入时间）
    fn build_bank(
        &self,
        file_name: &str,
        questions: Vec<crate::models::Question>,
        categories: Vec<String>,
    ) -> QuestionBank {
        let name = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name)
            .to_string();

        QuestionBank {
            id: generate_id(),
            name,
            questions,
            categories,
            import_time: chrono::Utc::now().timestamp_millis(),
            source_file: file_name.to_string(),
        }
    }
}

impl Default for ImportService {
    fn default() -> Self {
        Self::new()
    }
}
