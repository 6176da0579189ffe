// src/data.rs

use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::QuizError;
use crate::model::{Category, Question};

/// Preguntas que se muestrean para cada partida.
pub const QUESTIONS_PER_QUIZ: usize = 5;

/// Ruta del banco de preguntas (variable de entorno o fichero local).
pub fn questions_path() -> PathBuf {
    std::env::var_os("AIQUEST_QUESTIONS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("ai_questions.yaml"))
}

/// Banco de preguntas, cargado en bloque y de solo lectura.
#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Carga el banco completo desde el YAML en disco.
    ///
    /// Un fichero ausente o un YAML inválido son errores de carga; una
    /// categoría sin preguntas no lo es (devuelve lista vacía al filtrar).
    pub fn load(path: &Path) -> Result<Self, QuizError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| QuizError::data_load(path, e))?;
        let questions: Vec<Question> =
            serde_yaml::from_str(&contents).map_err(|e| QuizError::data_load(path, e))?;

        // Cada registro debe tener opciones y la respuesta debe ser una de ellas
        for q in &questions {
            if q.options.is_empty() {
                return Err(QuizError::data_load(
                    path,
                    format!("pregunta sin opciones: {:?}", q.question),
                ));
            }
            if !q.options.iter().any(|o| o == &q.answer) {
                return Err(QuizError::data_load(
                    path,
                    format!("la respuesta no figura entre las opciones: {:?}", q.question),
                ));
            }
        }

        log::info!("banco de preguntas cargado: {} registros", questions.len());
        Ok(Self { questions })
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Preguntas de una categoría, en el orden del banco.
    pub fn for_category(&self, category: Category) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.category == category)
            .collect()
    }

    /// Muestra aleatoria uniforme sin reemplazo: `min(count, disponibles)`
    /// preguntas de la categoría. Con cero disponibles devuelve vacío.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        category: Category,
        count: usize,
    ) -> Vec<Question> {
        let pool = self.for_category(category);
        let amount = count.min(pool.len());
        pool.choose_multiple(rng, amount)
            .map(|q| (*q).clone())
            .collect()
    }
}
