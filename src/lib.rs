//! # Exam Practice
//!
//! 本地刷题练习工具：导入题库文件、随机组卷练习、回顾历史和错题
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 模型层（Models）
//! - `models/` - 题目、题库、考试记录、错题记录与应用状态根文档
//!
//! ### ② 解析核心（Parser）
//! - `parser/` - 按扩展名分发的解析入口
//! - `text` - 逐行扫描的主提取器
//! - `compact` - 紧凑格式的备用提取器
//! - `tabular` - Excel 固定列布局提取器
//! - `document` - Word 文本解码与 PDF 字节流抢救
//! - `normalize` - 各提取器共享的校验与默认值逻辑
//!
//! ### ③ 存储层（Storage）
//! - `storage/` - 单文档 JSON 仓库，唯一的状态持有者
//!
//! ### ④ 业务能力层（Services）
//! - `ImportService` - "单个文件 → 题库"能力
//! - `ExamService` - 组卷 / 判分 / 找错题能力
//!
//! ### ⑤ 编排层（Orchestration）
//! - `orchestrator/batch_importer` - 批量文件导入，管理并发与失败隔离
//! - `orchestrator::App` - 顶层命令分发

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod services;
pub mod storage;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Difficulty, Question, QuestionBank};
pub use orchestrator::{import_files, App, ImportStats};
pub use parser::{parse_file, ParseResult};
pub use storage::Store;
