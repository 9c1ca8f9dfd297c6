//! 考试服务 - 业务能力层
//!
//! 负责组卷、判分和找出错题，不做任何持久化

use crate::models::Question;
use rand::seq::SliceRandom;
use std::collections::HashMap;

/// 考试服务
pub struct ExamService;

impl ExamService {
    pub fn new() -> Self {
        Self
    }

    /// 组卷
    ///
    /// # 参数
    /// - `pool`: 候选题目池
    /// - `count`: 出题数量上限
    /// - `random_order`: 是否乱序
    pub fn assemble(&self, mut pool: Vec<Question>, count: usize, random_order: bool) -> Vec<Question> {
        if random_order {
            pool.shuffle(&mut rand::thread_rng());
        }
        pool.truncate(count);
        pool
    }

    /// 计算得分（百分制，四舍五入）
    pub fn score(&self, questions: &[Question], answers: &HashMap<String, String>) -> u32 {
        if questions.is_empty() {
            return 0;
        }
        let correct = questions
            .iter()
            .filter(|q| answers.get(&q.id) == Some(&q.correct_answer))
            .count();
        ((correct as f64 / questions.len() as f64) * 100.0).round() as u32
    }

    /// 找出答错或未作答的题目，返回 (题目, 用户答案) 对
    pub fn missed<'a>(
        &self,
        questions: &'a [Question],
        answers: &HashMap<String, String>,
    ) -> Vec<(&'a Question, String)> {
        questions
            .iter()
            .filter(|q| answers.get(&q.id) != Some(&q.correct_answer))
            .map(|q| (q, answers.get(&q.id).cloned().unwrap_or_default()))
            .collect()
    }
}

impl Default for ExamService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn question(id: &str, correct: &str) -> Question {
        Question {
            id: id.to_string(),
            content: format!("题目 {}", id),
            options: vec!["甲".to_string(), "乙".to_string(), "丙".to_string()],
            correct_answer: correct.to_string(),
            category: "默认".to_string(),
            difficulty: Difficulty::Medium,
            explanation: None,
            source: None,
        }
    }

    #[test]
    fn assemble_caps_question_count() {
        let pool: Vec<Question> = (0..10).map(|i| question(&i.to_string(), "A")).collect();
        let service = ExamService::new();

        assert_eq!(service.assemble(pool.clone(), 3, false).len(), 3);
        assert_eq!(service.assemble(pool.clone(), 20, false).len(), 10);
        assert_eq!(service.assemble(pool, 3, true).len(), 3);
    }

    #[test]
    fn assemble_preserves_order_without_shuffle() {
        let pool: Vec<Question> = (0..5).map(|i| question(&i.to_string(), "A")).collect();
        let picked = ExamService::new().assemble(pool, 5, false);

        let ids: Vec<&str> = picked.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn score_is_rounded_percentage() {
        let questions = vec![question("a", "A"), question("b", "B"), question("c", "C")];
        let mut answers = HashMap::new();
        answers.insert("a".to_string(), "A".to_string());
        answers.insert("b".to_string(), "B".to_string());
        answers.insert("c".to_string(), "A".to_string());

        // 2/3 = 66.67 -> 67
        assert_eq!(ExamService::new().score(&questions, &answers), 67);
    }

    #[test]
    fn score_of_empty_exam_is_zero() {
        assert_eq!(ExamService::new().score(&[], &HashMap::new()), 0);
    }

    #[test]
    fn missed_includes_unanswered_questions() {
        let questions = vec![question("a", "A"), question("b", "B")];
        let mut answers = HashMap::new();
        answers.insert("a".to_string(), "A".to_string());

        let missed = ExamService::new().missed(&questions, &answers);
        assert_eq!(missed.len(), 1);
        assert_eq!(missed[0].0.id, "b");
        assert_eq!(missed[0].1, "");
    }
}
