// src/view_models.rs

/// Datos listos para pintar la pregunta en curso.
#[derive(Clone, Debug)]
pub struct QuestionView {
    pub number_1based: usize,
    pub total: usize,
    pub question: String,
    pub options: Vec<String>,
}

/// Resultado final de una partida completada.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreSummary {
    pub score: u32,
    pub total: u32,
}

impl ScoreSummary {
    /// `None` cuando la partida no tuvo preguntas (nada de 0/0).
    pub fn percentage(&self) -> Option<f32> {
        if self.total == 0 {
            None
        } else {
            Some(self.score as f32 / self.total as f32 * 100.0)
        }
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.score, self.total)
    }

    /// Valoración por tramos: 100%, 60% o menos.
    pub fn grade_label(&self) -> &'static str {
        match self.percentage() {
            None => "Esta categoría no tenía preguntas. ¡Prueba con otra! 📚",
            Some(p) if p >= 100.0 => "¡Perfecto! Eres un genio de la IA 🤖🔥",
            Some(p) if p >= 60.0 => "¡Buen trabajo! Dominas las bases de la IA 🧠",
            Some(_) => "¡Sigue aprendiendo! La IA se domina con práctica 📚",
        }
    }
}
