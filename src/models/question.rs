use serde::{Deserialize, Serialize};

/// 生成不重复的题目/记录标识
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// 难度枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 简单
    Easy,
    /// 中等
    #[default]
    Medium,
    /// 困难
    Hard,
}

/// 难度标签查找表，键为小写化后的标记文本
static DIFFICULTY_LABELS: phf::Map<&'static str, Difficulty> = phf::phf_map! {
    "简单" => Difficulty::Easy,
    "easy" => Difficulty::Easy,
    "中等" => Difficulty::Medium,
    "medium" => Difficulty::Medium,
    "困难" => Difficulty::Hard,
    "hard" => Difficulty::Hard,
};

impl Difficulty {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "简单",
            Difficulty::Medium => "中等",
            Difficulty::Hard => "困难",
        }
    }

    /// 从文本标签解析难度
    ///
    /// 支持中英文标签（简单/中等/困难、easy/medium/hard），英文不区分大小写
    pub fn from_label(label: &str) -> Option<Self> {
        DIFFICULTY_LABELS.get(label.to_lowercase().as_str()).copied()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 单道选择题
///
/// 由提取器在导入时创建，之后不再修改；考试记录和错题记录各自持有副本
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    /// 题目内容
    pub content: String,
    /// 选项 A, B, C, D...
    pub options: Vec<String>,
    /// 正确答案: 'A', 'B', 'C', 'D' 等
    pub correct_answer: String,
    /// 分类
    pub category: String,
    /// 难度
    pub difficulty: Difficulty,
    /// 解析
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// 来源文件
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 截断题目内容以便显示（最多80个字符）
        let content_preview = if self.content.chars().count() > 80 {
            self.content.chars().take(80).collect::<String>() + "..."
        } else {
            self.content.clone()
        };

        write!(f, "{} [答案: {}]", content_preview, self.correct_answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_labels_bilingual() {
        assert_eq!(Difficulty::from_label("简单"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_label("EASY"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_label("中等"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_label("Hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_label("未知"), None);
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Easy).unwrap();
        assert_eq!(json, "\"easy\"");
        let back: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(back, Difficulty::Hard);
    }
}
