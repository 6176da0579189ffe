use crate::error::QuizError;
use crate::model::Question;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Completed,
}

impl Default for SessionPhase {
    fn default() -> Self {
        SessionPhase::NotStarted
    }
}

/// Resultado de puntuar una pregunta. Se guarda por índice y un reenvío
/// devuelve siempre el resultado original.
#[derive(Clone, Debug, PartialEq)]
pub struct Answered {
    pub correct: bool,
    pub correct_answer: String,
    pub explanation: String,
}

/// Estado de una partida: la lista fija de preguntas, la posición actual
/// y lo ya puntuado. Vive solo mientras dura la sesión.
#[derive(Debug, Default, PartialEq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
    submitted: Vec<Option<Answered>>, // indexado por pregunta, Some = ya puntuada
    player_name: String,
    score_saved: bool,
    phase: SessionPhase,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arranca la partida con el nombre del jugador y las preguntas ya
    /// muestreadas. Sin preguntas, la sesión nace directamente completada.
    pub fn start(&mut self, name: &str, questions: Vec<Question>) -> Result<(), QuizError> {
        if self.phase != SessionPhase::NotStarted {
            return Err(QuizError::state("ya hay una partida en curso"));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(QuizError::validation("Escribe tu nombre antes de empezar."));
        }

        self.player_name = name.to_string();
        self.submitted = vec![None; questions.len()];
        self.questions = questions;
        self.current_index = 0;
        self.score = 0;
        self.score_saved = false;
        self.phase = if self.questions.is_empty() {
            SessionPhase::Completed
        } else {
            SessionPhase::InProgress
        };
        Ok(())
    }

    /// Puntúa la pregunta `index` con la opción elegida.
    ///
    /// Cada índice se puntúa una sola vez: reenviar sobre un índice ya
    /// puntuado devuelve el resultado guardado sin tocar la puntuación.
    /// La comparación con la respuesta es igualdad exacta, sin normalizar.
    pub fn submit_answer(&mut self, index: usize, chosen: &str) -> Result<Answered, QuizError> {
        if self.phase != SessionPhase::InProgress {
            return Err(QuizError::state("no hay ninguna partida en curso"));
        }
        if index >= self.questions.len() {
            return Err(QuizError::state("índice de pregunta fuera de rango"));
        }
        if let Some(previous) = &self.submitted[index] {
            return Ok(previous.clone());
        }
        if index != self.current_index {
            return Err(QuizError::state("solo puede responderse la pregunta actual"));
        }

        let q = &self.questions[index];
        if !q.options.iter().any(|o| o == chosen) {
            return Err(QuizError::validation("Marca una de las opciones."));
        }

        let correct = chosen == q.answer;
        if correct {
            self.score += 1;
        }
        let result = Answered {
            correct,
            correct_answer: q.answer.clone(),
            explanation: q.explanation.clone(),
        };
        self.submitted[index] = Some(result.clone());
        Ok(result)
    }

    /// Avanza a la siguiente pregunta; exige haber puntuado la actual.
    /// Al pasar de la última, la partida queda completada.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        if self.phase != SessionPhase::InProgress {
            return Err(QuizError::state("no hay ninguna partida en curso"));
        }
        if self.submitted[self.current_index].is_none() {
            return Err(QuizError::state("debes responder antes de avanzar"));
        }

        self.current_index += 1;
        if self.current_index == self.questions.len() {
            self.phase = SessionPhase::Completed;
        }
        Ok(())
    }

    /// (aciertos, total), solo con la partida completada.
    pub fn final_score(&self) -> Result<(u32, u32), QuizError> {
        if self.phase != SessionPhase::Completed {
            return Err(QuizError::state("la partida aún no ha terminado"));
        }
        Ok((self.score, self.questions.len() as u32))
    }

    /// Vuelve al estado inicial desde cualquier punto de la partida.
    pub fn reset(&mut self) {
        *self = QuizSession::default();
    }

    // Consultas para el controlador y la UI

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.phase != SessionPhase::InProgress {
            return None;
        }
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn submitted_count(&self) -> usize {
        self.submitted.iter().filter(|s| s.is_some()).count()
    }

    /// Fracción de preguntas ya puntuadas; 0.0 para una sesión sin preguntas.
    pub fn progress(&self) -> f32 {
        if self.questions.is_empty() {
            0.0
        } else {
            self.submitted_count() as f32 / self.questions.len() as f32
        }
    }

    pub fn result_for(&self, index: usize) -> Option<&Answered> {
        self.submitted.get(index).and_then(|s| s.as_ref())
    }

    /// Resultado guardado de la pregunta actual, si ya se envió.
    pub fn current_result(&self) -> Option<&Answered> {
        self.result_for(self.current_index)
    }

    // Candado de guardado único en el ranking

    pub fn score_saved(&self) -> bool {
        self.score_saved
    }

    pub fn mark_score_saved(&mut self) {
        self.score_saved = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::QuestionBank;
    use crate::model::Category;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                category: Category::AiBasics,
                question: format!("pregunta {i}"),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                answer: "a".into(),
                explanation: format!("explicación {i}"),
            })
            .collect()
    }

    fn started(n: usize) -> QuizSession {
        let mut session = QuizSession::new();
        session.start("Ada", questions(n)).expect("start ok");
        session
    }

    #[test]
    fn start_requires_a_nonempty_trimmed_name() {
        let mut session = QuizSession::new();
        let err = session.start("   ", questions(3)).unwrap_err();
        assert!(matches!(err, QuizError::Validation(_)));
        assert_eq!(session.phase(), SessionPhase::NotStarted);
    }

    #[test]
    fn start_trims_the_player_name() {
        let mut session = QuizSession::new();
        session.start("  Ada  ", questions(1)).expect("start ok");
        assert_eq!(session.player_name(), "Ada");
    }

    #[test]
    fn double_start_is_rejected() {
        let mut session = started(3);
        let err = session.start("Ada", questions(3)).unwrap_err();
        assert!(matches!(err, QuizError::State(_)));
    }

    #[test]
    fn zero_questions_complete_the_session_on_start() {
        let mut session = QuizSession::new();
        session.start("Ada", Vec::new()).expect("start ok");
        assert!(session.is_complete());
        assert_eq!(session.final_score().expect("score"), (0, 0));
        assert_eq!(session.progress(), 0.0);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn correct_answer_adds_one_point() {
        let mut session = started(2);
        let result = session.submit_answer(0, "a").expect("submit ok");
        assert!(result.correct);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn wrong_answer_reports_solution_and_explanation() {
        let mut session = started(2);
        let result = session.submit_answer(0, "b").expect("submit ok");
        assert!(!result.correct);
        assert_eq!(result.correct_answer, "a");
        assert_eq!(result.explanation, "explicación 0");
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn resubmission_returns_the_stored_result_and_never_rescores() {
        let mut session = started(2);
        session.submit_answer(0, "a").expect("first submit");
        assert_eq!(session.score(), 1);

        // Reenvío con otra opción: ni resta ni re-puntúa
        let again = session.submit_answer(0, "b").expect("resubmit");
        assert!(again.correct);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn resubmission_after_a_wrong_answer_does_not_upgrade_it() {
        let mut session = started(2);
        session.submit_answer(0, "b").expect("first submit");
        let again = session.submit_answer(0, "a").expect("resubmit");
        assert!(!again.correct);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn grading_is_exact_string_equality() {
        let mut session = QuizSession::new();
        let q = Question {
            category: Category::Nlp,
            question: "capital".into(),
            options: vec!["Paris".into(), "paris".into()],
            answer: "Paris".into(),
            explanation: "mayúscula".into(),
        };
        session.start("Ada", vec![q]).expect("start ok");

        let result = session.submit_answer(0, "paris").expect("submit ok");
        assert!(!result.correct);
    }

    #[test]
    fn an_option_outside_the_question_is_a_validation_error() {
        let mut session = started(1);
        let err = session.submit_answer(0, "zz").unwrap_err();
        assert!(matches!(err, QuizError::Validation(_)));
        assert_eq!(session.score(), 0);
        assert!(session.current_result().is_none());
    }

    #[test]
    fn submitting_out_of_turn_is_a_state_error() {
        let mut session = started(3);
        let err = session.submit_answer(2, "a").unwrap_err();
        assert!(matches!(err, QuizError::State(_)));
    }

    #[test]
    fn advance_requires_a_submitted_answer() {
        let mut session = started(2);
        let err = session.advance().unwrap_err();
        assert!(matches!(err, QuizError::State(_)));

        session.submit_answer(0, "b").expect("submit ok");
        session.advance().expect("advance ok");
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn the_session_completes_exactly_at_the_last_advance() {
        let mut session = started(2);
        session.submit_answer(0, "a").expect("submit");
        session.advance().expect("advance");
        assert!(!session.is_complete());

        session.submit_answer(1, "b").expect("submit");
        session.advance().expect("advance");
        assert!(session.is_complete());

        let (score, total) = session.final_score().expect("score");
        assert_eq!((score, total), (1, 2));
        assert!(score <= total);
    }

    #[test]
    fn final_score_is_rejected_before_completion() {
        let session = started(2);
        let err = session.final_score().unwrap_err();
        assert!(matches!(err, QuizError::State(_)));
    }

    #[test]
    fn progress_counts_submitted_questions() {
        let mut session = started(4);
        assert_eq!(session.progress(), 0.0);
        session.submit_answer(0, "a").expect("submit");
        assert_eq!(session.progress(), 0.25);
        session.advance().expect("advance");
        session.submit_answer(1, "b").expect("submit");
        assert_eq!(session.progress(), 0.5);
    }

    #[test]
    fn reset_from_completed_matches_a_fresh_session() {
        let mut session = started(1);
        session.submit_answer(0, "a").expect("submit");
        session.advance().expect("advance");
        session.mark_score_saved();
        assert!(session.is_complete());

        session.reset();
        assert_eq!(session, QuizSession::new());
    }

    #[test]
    fn reset_escapes_from_any_state() {
        let mut session = started(3);
        session.submit_answer(0, "a").expect("submit");
        session.reset();
        assert_eq!(session, QuizSession::new());
        // y se puede volver a arrancar
        session.start("Ada", questions(1)).expect("restart ok");
    }

    #[test]
    fn a_full_run_over_a_sampled_category_scores_five_of_five() {
        let bank = QuestionBank::from_questions(questions(8));
        let mut rng = StdRng::seed_from_u64(11);
        let sampled = bank.sample(&mut rng, Category::AiBasics, 5);
        assert_eq!(sampled.len(), 5);

        let mut session = QuizSession::new();
        session.start("Ada", sampled).expect("start ok");
        while !session.is_complete() {
            let idx = session.current_index();
            session.submit_answer(idx, "a").expect("submit");
            session.advance().expect("advance");
        }
        assert_eq!(session.final_score().expect("score"), (5, 5));
    }
}
