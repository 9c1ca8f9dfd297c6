/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 数据文件路径
    pub storage_path: String,
    /// 同时导入的文件数量
    pub max_concurrent_imports: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: "exam_data.json".to_string(),
            max_concurrent_imports: 4,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            storage_path: std::env::var("EXAM_STORAGE_PATH").unwrap_or(default.storage_path),
            max_concurrent_imports: std::env::var("MAX_CONCURRENT_IMPORTS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_imports),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
