//! 命令行定义

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exam_practice", version, about = "本地刷题练习工具：导入题库、随机练习、错题回顾")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 导入题库文件 (.xlsx/.xls/.docx/.doc/.pdf/.txt/.csv)
    Import {
        /// 待导入的文件，可一次传多个
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// 开始一场练习
    Exam {
        /// 题目数量（缺省使用设置中的默认数量）
        #[arg(long)]
        count: Option<usize>,

        /// 只从指定分类抽题
        #[arg(long)]
        category: Option<String>,

        /// 练习标题
        #[arg(long)]
        title: Option<String>,
    },

    /// 查看已导入的题库
    Banks {
        /// 删除指定 id 的题库
        #[arg(long)]
        delete: Option<String>,
    },

    /// 查看练习历史
    History,

    /// 查看错题本
    Wrong {
        /// 移除指定题目 id 的错题记录
        #[arg(long)]
        remove: Option<String>,
    },

    /// 查看或修改练习设置
    Settings {
        /// 默认组卷题目数量
        #[arg(long)]
        count: Option<usize>,

        /// 答错时是否显示解析 (true/false)
        #[arg(long)]
        show_explanation: Option<bool>,

        /// 是否乱序出题 (true/false)
        #[arg(long)]
        random_order: Option<bool>,
    },

    /// 导出全部数据为 JSON
    Export {
        /// 输出文件（缺省打印到标准输出）
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// 从导出的 JSON 文件恢复数据
    Restore {
        /// 之前导出的 JSON 文件
        file: PathBuf,
    },

    /// 清除所有数据
    Clear,
}
