//! 批量导入器 - 编排层
//!
//! ## 职责
//!
//! 1. **并发控制**：使用 Semaphore 限制同时解析的文件数量
//! 2. **失败隔离**：每个文件是独立任务，单个文件的硬失败不影响其它文件
//! 3. **串行落库**：所有任务结束后再把题库逐个追加进存储，避免交错写入
//! 4. **统计汇总**：成功/无题目/失败 三类计数

use crate::services::ImportService;
use crate::storage::Store;
use anyhow::Result;
use futures::future::join_all;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 批量导入统计
#[derive(Debug, Default)]
pub struct ImportStats {
    /// 成功导入的文件数
    pub imported: usize,
    /// 未识别到题目的文件数
    pub empty: usize,
    /// 失败的文件数
    pub failed: usize,
    /// 导入的题目总数
    pub questions: usize,
}

/// 单个文件的导入结果
enum FileOutcome {
    Imported(crate::models::QuestionBank),
    Empty,
    Failed,
}

/// 并发导入多个文件
pub async fn import_files(
    store: &Store,
    files: &[PathBuf],
    max_concurrent: usize,
) -> Result<ImportStats> {
    let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));
    let mut handles = Vec::new();

    for (idx, path) in files.iter().enumerate() {
        let permit = semaphore.clone().acquire_owned().await?;
        let path = path.clone();
        let file_index = idx + 1;

        handles.push(tokio::spawn(async move {
            let _permit = permit;
            let display_path = path.display().to_string();

            match ImportService::new().import_file(&path).await {
                Ok(Some(bank)) => {
                    info!(
                        "[文件 {}] ✓ {}: 解析出 {} 道题目, {} 个分类",
                        file_index,
                        display_path,
                        bank.questions.len(),
                        bank.categories.len()
                    );
                    FileOutcome::Imported(bank)
                }
                Ok(None) => {
                    warn!("[文件 {}] ⚠️ {}: 未识别到题目", file_index, display_path);
                    FileOutcome::Empty
                }
                Err(e) => {
                    error!("[文件 {}] ❌ {}: {}", file_index, display_path, e);
                    FileOutcome::Failed
                }
            }
        }));
    }

    let mut stats = ImportStats::default();

    // 每个任务先在本地攒出完整结果，这里再统一串行落库
    for handle in join_all(handles).await {
        match handle {
            Ok(FileOutcome::Imported(bank)) => {
                stats.imported += 1;
                stats.questions += bank.questions.len();
                store.add_question_bank(bank).await?;
            }
            Ok(FileOutcome::Empty) => stats.empty += 1,
            Ok(FileOutcome::Failed) => stats.failed += 1,
            Err(e) => {
                error!("导入任务执行失败: {}", e);
                stats.failed += 1;
            }
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn failing_file_does_not_abort_siblings() {
        let dir = tempfile::tempdir().unwrap();

        let good = dir.path().join("good.txt");
        std::fs::write(&good, "1. 题目\nA. 甲\nB. 乙\n答案: A").unwrap();
        let bad = dir.path().join("bad.rtf");
        std::fs::write(&bad, "whatever").unwrap();
        let empty = dir.path().join("empty.txt");
        std::fs::write(&empty, "没有题目").unwrap();

        let store = Store::new(dir.path().join("data.json"));
        let stats = import_files(&store, &[good, bad, empty], 4).await.unwrap();

        assert_eq!(stats.imported, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.empty, 1);
        assert_eq!(stats.questions, 1);

        let state = store.load().await;
        assert_eq!(state.question_banks.len(), 1);
    }
}
