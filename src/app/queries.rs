use super::*;

impl QuizApp {
    /// Vista de la pregunta en curso, lista para pintar.
    pub fn current_question_view(&self) -> Option<QuestionView> {
        let q = self.session.current_question()?;
        Some(QuestionView {
            number_1based: self.session.current_index() + 1,
            total: self.session.total(),
            question: q.question.clone(),
            options: q.options.clone(),
        })
    }

    /// Fracción de preguntas ya puntuadas (0.0 sin preguntas).
    pub fn progress_fraction(&self) -> f32 {
        self.session.progress()
    }

    /// ¿La pregunta actual ya fue enviada? Gobierna los botones de la vista.
    pub fn current_submitted(&self) -> bool {
        self.session.current_result().is_some()
    }

    /// Resumen final; solo con la partida completada.
    pub fn score_summary(&self) -> Option<ScoreSummary> {
        let (score, total) = self.session.final_score().ok()?;
        Some(ScoreSummary { score, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                category: Category::MachineLearning,
                question: format!("pregunta {i}"),
                options: vec!["a".into(), "b".into()],
                answer: "a".into(),
                explanation: String::new(),
            })
            .collect()
    }

    #[test]
    fn question_view_is_one_based_over_the_session_total() {
        let mut app = QuizApp::new();
        app.session.start("Ada", questions(3)).expect("start ok");

        let view = app.current_question_view().expect("view");
        assert_eq!(view.number_1based, 1);
        assert_eq!(view.total, 3);
        assert_eq!(view.options.len(), 2);
    }

    #[test]
    fn there_is_no_question_view_outside_a_running_session() {
        let app = QuizApp::new();
        assert!(app.current_question_view().is_none());
        assert!(app.score_summary().is_none());
    }

    #[test]
    fn score_summary_appears_once_the_session_completes() {
        let mut app = QuizApp::new();
        app.session.start("Ada", questions(1)).expect("start ok");
        assert!(app.score_summary().is_none());

        app.session.submit_answer(0, "a").expect("submit");
        app.session.advance().expect("advance");
        assert_eq!(
            app.score_summary(),
            Some(ScoreSummary { score: 1, total: 1 })
        );
    }
}
