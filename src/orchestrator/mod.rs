//! 应用编排 - 顶层入口
//!
//! `App` 持有配置与存储仓库，把 CLI 命令向下分发给各业务能力；
//! 批量导入委托给 `batch_importer`

pub mod batch_importer;

pub use batch_importer::{import_files, ImportStats};

use crate::cli::Commands;
use crate::config::Config;
use crate::models::{ExamRecord, Question};
use crate::services::ExamService;
use crate::storage::Store;
use crate::utils::logging;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    store: Store,
}

impl App {
    /// 初始化应用（建立存储仓库）
    pub fn initialize(config: Config) -> Self {
        let store = Store::new(&config.storage_path);
        Self { config, store }
    }

    /// 执行一条命令
    pub async fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Import { files } => self.import(files).await,
            Commands::Exam {
                count,
                category,
                title,
            } => self.exam(count, category, title).await,
            Commands::Banks { delete } => self.banks(delete).await,
            Commands::History => self.history().await,
            Commands::Wrong { remove } => self.wrong(remove).await,
            Commands::Settings {
                count,
                show_explanation,
                random_order,
            } => self.settings(count, show_explanation, random_order).await,
            Commands::Export { output } => self.export(output).await,
            Commands::Restore { file } => self.restore(file).await,
            Commands::Clear => self.clear().await,
        }
    }

    async fn import(&self, files: Vec<PathBuf>) -> Result<()> {
        logging::log_import_start(files.len(), self.config.max_concurrent_imports);

        let stats = import_files(&self.store, &files, self.config.max_concurrent_imports).await?;

        logging::log_import_stats(&stats);
        Ok(())
    }

    async fn exam(
        &self,
        count: Option<usize>,
        category: Option<String>,
        title: Option<String>,
    ) -> Result<()> {
        let settings = self.store.load().await.settings;

        let pool = match category.as_deref() {
            Some(c) => self.store.questions_by_category(c).await,
            None => self.store.all_questions().await,
        };
        if pool.is_empty() {
            warn!("⚠️ 没有可用题目，请先导入题库");
            let categories = self.store.all_categories().await;
            if !categories.is_empty() {
                info!("可用分类: {}", categories.join("/"));
            }
            return Ok(());
        }

        let count = count.unwrap_or(settings.default_question_count);
        let service = ExamService::new();
        let questions = service.assemble(pool, count, settings.random_order);

        let title = title.unwrap_or_else(|| {
            format!("随机练习 {}", chrono::Local::now().format("%Y-%m-%d %H:%M"))
        });

        // 开考即落库，交卷时再覆盖
        let mut record = ExamRecord::new(title, questions.clone());
        self.store.add_exam_record(record.clone()).await?;

        println!("\n{}", "=".repeat(60));
        println!("📝 {} - 共 {} 题", record.title, questions.len());
        println!("{}", "=".repeat(60));

        let answers = self.collect_answers(&questions).await?;
        let score = service.score(&questions, &answers);
        let missed = service.missed(&questions, &answers);

        println!("\n{}", "=".repeat(60));
        println!(
            "📊 练习结束: 得分 {} 分 (答对 {}/{})",
            score,
            questions.len() - missed.len(),
            questions.len()
        );

        for (question, user_answer) in &missed {
            println!("\n❌ {}", question.content);
            let shown = if user_answer.is_empty() {
                "未作答"
            } else {
                user_answer.as_str()
            };
            println!("   你的答案: {}  正确答案: {}", shown, question.correct_answer);
            if settings.show_explanation {
                if let Some(explanation) = &question.explanation {
                    println!("   解析: {}", explanation);
                }
            }
            self.store
                .add_wrong_answer((*question).clone(), user_answer, &record.id)
                .await?;
        }

        record.complete(answers, score);
        self.store.update_exam_record(record).await?;

        info!("✓ 本次练习已记入历史");
        Ok(())
    }

    /// 逐题读取用户作答
    async fn collect_answers(&self, questions: &[Question]) -> Result<HashMap<String, String>> {
        let mut answers = HashMap::new();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        for (index, question) in questions.iter().enumerate() {
            println!(
                "\n第 {}/{} 题 [{}] ({})",
                index + 1,
                questions.len(),
                question.category,
                question.difficulty
            );
            println!("{}", question.content);
            for (i, option) in question.options.iter().enumerate() {
                println!("  {}. {}", (b'A' + i as u8) as char, option);
            }

            print!("你的答案 (回车跳过): ");
            std::io::stdout().flush().context("无法刷新标准输出")?;

            let line = lines.next_line().await?.unwrap_or_default();
            let answer = line.trim().to_uppercase();
            if !answer.is_empty() {
                answers.insert(question.id.clone(), answer);
            }
        }

        Ok(answers)
    }

    async fn banks(&self, delete: Option<String>) -> Result<()> {
        if let Some(bank_id) = delete {
            if self.store.delete_question_bank(&bank_id).await? {
                info!("✓ 题库已删除: {}", bank_id);
            } else {
                warn!("⚠️ 未找到题库: {}", bank_id);
            }
            return Ok(());
        }

        let state = self.store.load().await;
        if state.question_banks.is_empty() {
            println!("还没有导入任何题库");
            return Ok(());
        }

        println!("共 {} 个题库:", state.question_banks.len());
        for bank in &state.question_banks {
            println!(
                "  {} | {} | {} 道题 | 分类: {} | 导入于 {}",
                bank.id,
                bank.name,
                bank.questions.len(),
                bank.categories.join("/"),
                format_millis(bank.import_time)
            );
        }
        Ok(())
    }

    async fn history(&self) -> Result<()> {
        let state = self.store.load().await;
        if state.exam_history.is_empty() {
            println!("还没有练习记录");
            return Ok(());
        }

        println!("共 {} 次练习:", state.exam_history.len());
        for record in &state.exam_history {
            let score = match record.score {
                Some(s) => format!("{} 分", s),
                None => "未完成".to_string(),
            };
            println!(
                "  {} | {} | {} 题 | {} | {}",
                format_millis(record.start_time),
                record.title,
                record.questions.len(),
                score,
                record.id
            );
        }
        Ok(())
    }

    async fn wrong(&self, remove: Option<String>) -> Result<()> {
        if let Some(question_id) = remove {
            if self.store.remove_wrong_answer(&question_id).await? {
                info!("✓ 错题已移除: {}", question_id);
            } else {
                warn!("⚠️ 错题本中没有该题目: {}", question_id);
            }
            return Ok(());
        }

        let state = self.store.load().await;
        if state.wrong_answers.is_empty() {
            println!("错题本是空的 🎉");
            return Ok(());
        }

        println!("共 {} 道错题:", state.wrong_answers.len());
        for wrong in &state.wrong_answers {
            println!(
                "  [错 {} 次] {} (你的答案: {}, 正确答案: {}) | id: {}",
                wrong.count,
                logging::truncate_text(&wrong.question.content, 40),
                wrong.user_answer,
                wrong.question.correct_answer,
                wrong.question.id
            );
        }
        Ok(())
    }

    async fn settings(
        &self,
        count: Option<usize>,
        show_explanation: Option<bool>,
        random_order: Option<bool>,
    ) -> Result<()> {
        let mut settings = self.store.load().await.settings;
        let changed = count.is_some() || show_explanation.is_some() || random_order.is_some();

        if let Some(count) = count {
            settings.default_question_count = count;
        }
        if let Some(show) = show_explanation {
            settings.show_explanation = show;
        }
        if let Some(random) = random_order {
            settings.random_order = random;
        }

        if changed {
            self.store.update_settings(settings.clone()).await?;
            info!("✓ 设置已更新");
        }

        println!("默认题目数量: {}", settings.default_question_count);
        println!("答错显示解析: {}", settings.show_explanation);
        println!("乱序出题: {}", settings.random_order);
        Ok(())
    }

    async fn export(&self, output: Option<PathBuf>) -> Result<()> {
        let json = self.store.export_json().await?;
        match output {
            Some(path) => {
                tokio::fs::write(&path, json)
                    .await
                    .with_context(|| format!("无法写入文件: {}", path.display()))?;
                info!("✓ 数据已导出至: {}", path.display());
            }
            None => println!("{}", json),
        }
        Ok(())
    }

    async fn restore(&self, file: PathBuf) -> Result<()> {
        let json = tokio::fs::read_to_string(&file)
            .await
            .with_context(|| format!("无法读取文件: {}", file.display()))?;
        self.store.import_json(&json).await?;
        info!("✓ 数据已从 {} 恢复", file.display());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.store.clear().await?;
        info!("✓ 所有数据已清除");
        Ok(())
    }
}

/// 毫秒时间戳转本地时间显示
fn format_millis(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp)
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| timestamp.to_string())
}
