//! 应用程序错误类型
//!
//! 解析、存储、配置各自一个错误枚举，顶层用 `AppError` 汇总；
//! 编排层统一走 `anyhow::Result` 并附加上下文

use thiserror::Error;

/// 文件解析错误
///
/// 对应"硬失败"通道：错误信息会原样写入 `ParseResult::error`
#[derive(Debug, Error)]
pub enum ParseError {
    /// 不支持的文件扩展名
    #[error("不支持的文件格式。请上传 Excel, Word, PDF 或文本文件。")]
    UnsupportedFormat,
    /// Excel 解码失败
    #[error("解析Excel文件失败: {0}")]
    Excel(String),
    /// Word 解码失败
    #[error("解析Word文件失败: {0}")]
    Word(String),
    /// PDF 抢救出的文本低于最小可用长度
    #[error("无法从PDF中提取文本。请尝试将PDF转换为Word或文本格式后导入。")]
    PdfTextTooShort,
    /// 正则表达式构建失败
    #[error("正则表达式构建失败: {0}")]
    Regex(#[from] regex::Error),
}

/// 存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("写入数据文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("删除数据文件失败 ({path}): {source}")]
    DeleteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON序列化失败: {0}")]
    Json(#[from] serde_json::Error),
}

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 解析错误
    #[error("解析错误: {0}")]
    Parse(#[from] ParseError),
    /// 存储错误
    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),
    /// 其他错误（用于包装第三方库错误）
    #[error("错误: {0}")]
    Other(String),
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
