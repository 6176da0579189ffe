use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::leaderboard::{Leaderboard, LeaderboardEntry, leaderboard_path};
use crate::model::{AppState, Category};
use crate::session::QuizSession;

// Submódulos
pub mod actions;
pub mod queries;

// Re-export de view models
pub use crate::view_models::{QuestionView, ScoreSummary};

/// Datos curiosos para el panel lateral; se elige uno al arrancar.
pub const FACTS: [&str; 4] = [
    "El término «Inteligencia Artificial» lo acuñó John McCarthy en 1956.",
    "Deep Blue, el ordenador de ajedrez de IBM, venció al campeón mundial Garry Kasparov en 1997.",
    "La IA ya puede generar arte, código e incluso libros enteros.",
    "El machine learning es la rama de la IA que permite a los sistemas aprender de los datos.",
];

/// Controlador de la aplicación: una única sesión viva, el ranking y los
/// buffers de entrada de la UI. Las vistas solo leen y disparan acciones.
pub struct QuizApp {
    pub session: QuizSession,
    pub leaderboard: Leaderboard,
    pub rng: StdRng,
    pub state: AppState,
    // Buffers de entrada
    pub name_input: String,
    pub selected_category: Category,
    pub chosen_option: Option<usize>,
    pub message: String,
    // Top 5 cacheado al terminar la partida
    pub top_entries: Vec<LeaderboardEntry>,
    pub daily_fact: &'static str,
}

impl QuizApp {
    pub fn new() -> Self {
        let mut rng = StdRng::from_entropy();
        let daily_fact = *FACTS.choose(&mut rng).unwrap_or(&FACTS[0]);

        Self {
            session: QuizSession::new(),
            leaderboard: Leaderboard::new(leaderboard_path()),
            rng,
            state: AppState::Welcome,
            name_input: String::new(),
            selected_category: Category::AiBasics,
            chosen_option: None,
            message: String::new(),
            top_entries: Vec::new(),
            daily_fact,
        }
    }
}
