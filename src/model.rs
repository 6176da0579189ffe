use serde::{Deserialize, Serialize};

/// Las cinco categorías fijas del banco de preguntas.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "AI Basics")]
    AiBasics,
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    #[serde(rename = "Deep Learning")]
    DeepLearning,
    #[serde(rename = "NLP")]
    Nlp,
    #[serde(rename = "AI Applications")]
    AiApplications,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::AiBasics,
        Category::MachineLearning,
        Category::DeepLearning,
        Category::Nlp,
        Category::AiApplications,
    ];

    /// Etiqueta tal y como aparece en el banco de preguntas.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AiBasics => "AI Basics",
            Category::MachineLearning => "Machine Learning",
            Category::DeepLearning => "Deep Learning",
            Category::Nlp => "NLP",
            Category::AiApplications => "AI Applications",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub category: Category,
    pub question: String, // Enunciado
    pub options: Vec<String>,
    pub answer: String, // Debe ser una de las opciones; se compara por igualdad exacta
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Summary,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
    }
}
