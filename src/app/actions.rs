use super::*;
use crate::data::{QUESTIONS_PER_QUIZ, QuestionBank, questions_path};

impl QuizApp {
    /// Arranca una partida: valida el nombre, recarga el banco en bloque
    /// y muestrea las preguntas de la categoría elegida.
    pub fn empezar_quiz(&mut self) {
        if self.name_input.trim().is_empty() {
            self.message = "⚠ Escribe tu nombre antes de empezar.".into();
            return;
        }

        let path = questions_path();
        let bank = match QuestionBank::load(&path) {
            Ok(bank) => bank,
            Err(e) => {
                log::error!("fallo cargando el banco de preguntas: {e}");
                self.message = e.to_string();
                return;
            }
        };

        let sampled = bank.sample(&mut self.rng, self.selected_category, QUESTIONS_PER_QUIZ);
        if sampled.is_empty() {
            log::warn!("la categoría {} no tiene preguntas", self.selected_category);
        }

        if let Err(e) = self.session.start(&self.name_input, sampled) {
            self.message = e.to_string();
            return;
        }

        log::info!(
            "partida iniciada: jugador={} categoría={} preguntas={}",
            self.session.player_name(),
            self.selected_category,
            self.session.total()
        );
        self.chosen_option = None;
        self.message.clear();

        if self.session.is_complete() {
            // Categoría vacía: la sesión nace completada y vamos directos al resumen
            self.finalizar_quiz();
        } else {
            self.state = AppState::Quiz;
        }
    }

    /// Envía la opción marcada y puntúa la pregunta actual.
    pub fn procesar_respuesta(&mut self) {
        let chosen = match (self.chosen_option, self.session.current_question()) {
            (Some(i), Some(q)) => q.options.get(i).cloned(),
            _ => None,
        };
        let chosen = match chosen {
            Some(option) => option,
            None => {
                self.message = "⚠ Marca una opción antes de enviar.".into();
                return;
            }
        };

        let index = self.session.current_index();
        match self.session.submit_answer(index, &chosen) {
            Ok(result) if result.correct => {
                self.message = "✅ ¡Correcto!".into();
            }
            Ok(result) => {
                self.message = format!(
                    "❌ Incorrecto. La respuesta era: {}\n💬 {}",
                    result.correct_answer, result.explanation
                );
            }
            Err(e) => self.message = e.to_string(),
        }
    }

    /// Pasa a la siguiente pregunta; tras la última, cierra la partida.
    pub fn siguiente_pregunta(&mut self) {
        if let Err(e) = self.session.advance() {
            self.message = e.to_string();
            return;
        }
        self.chosen_option = None;
        self.message.clear();

        if self.session.is_complete() {
            self.finalizar_quiz();
        }
    }

    /// Cierre de partida: persiste la puntuación (una sola vez por sesión),
    /// refresca el top 5 y pasa al resumen.
    fn finalizar_quiz(&mut self) {
        if !self.session.score_saved() {
            if let Ok((score, _)) = self.session.final_score() {
                let entry = LeaderboardEntry::now(self.session.player_name(), score);
                match self.leaderboard.append(entry) {
                    Ok(()) => {
                        self.session.mark_score_saved();
                        log::info!(
                            "puntuación guardada: {} -> {}",
                            self.session.player_name(),
                            score
                        );
                    }
                    Err(e) => {
                        log::error!("no se pudo guardar la puntuación: {e}");
                        self.message = e.to_string();
                    }
                }
            }
        }

        match self.leaderboard.top_n(5) {
            Ok(entries) => self.top_entries = entries,
            Err(e) => {
                log::error!("no se pudo leer el ranking: {e}");
                self.top_entries.clear();
                self.message = e.to_string();
            }
        }

        self.state = AppState::Summary;
    }

    /// Descarta la sesión actual y vuelve a la pantalla inicial.
    /// Utilizable desde cualquier estado.
    pub fn jugar_de_nuevo(&mut self) {
        self.session.reset();
        self.name_input.clear();
        self.chosen_option = None;
        self.top_entries.clear();
        self.message.clear();
        self.state = AppState::Welcome;
    }
}
