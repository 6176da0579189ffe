use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Ruta del ranking persistido (variable de entorno o fichero local).
pub fn leaderboard_path() -> PathBuf {
    std::env::var_os("AIQUEST_LEADERBOARD")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("leaderboard.csv"))
}

/// Fila del ranking. El orden de columnas del CSV es fijo: Name, Score, Date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Score")]
    pub score: u32,
    #[serde(rename = "Date")]
    pub date: String,
}

impl LeaderboardEntry {
    /// Entrada con la fecha actual en formato `YYYY-MM-DD HH:MM:SS`.
    pub fn now(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Ranking de partidas terminadas: CSV de solo-añadir, releído entero en
/// cada consulta. Un fichero ausente cuenta como ranking vacío; uno
/// corrupto sí es un error.
pub struct Leaderboard {
    path: PathBuf,
}

impl Leaderboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Carga todas las filas en orden de inserción.
    pub fn load(&self) -> Result<Vec<LeaderboardEntry>, QuizError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr =
            csv::Reader::from_path(&self.path).map_err(|e| QuizError::data_load(&self.path, e))?;
        let mut entries = Vec::new();
        for row in rdr.deserialize() {
            let entry: LeaderboardEntry =
                row.map_err(|e| QuizError::data_load(&self.path, e))?;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Añade una fila reescribiendo el fichero completo. La primera
    /// partida crea el fichero; nunca se rechazan duplicados.
    pub fn append(&self, entry: LeaderboardEntry) -> Result<(), QuizError> {
        let mut entries = self.load()?;
        entries.push(entry);

        let mut wtr =
            csv::Writer::from_path(&self.path).map_err(|e| QuizError::data_load(&self.path, e))?;
        for row in &entries {
            wtr.serialize(row)
                .map_err(|e| QuizError::data_load(&self.path, e))?;
        }
        wtr.flush()
            .map_err(|e| QuizError::data_load(&self.path, e))?;

        log::info!("ranking actualizado: {} filas", entries.len());
        Ok(())
    }

    /// Las `n` mejores puntuaciones, de mayor a menor. Los empates
    /// conservan el orden de llegada (orden estable).
    pub fn top_n(&self, n: usize) -> Result<Vec<LeaderboardEntry>, QuizError> {
        let mut entries = self.load()?;
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(n);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            score,
            date: "2026-08-07 12:00:00".to_string(),
        }
    }

    fn board(dir: &tempfile::TempDir) -> Leaderboard {
        Leaderboard::new(dir.path().join("leaderboard.csv"))
    }

    #[test]
    fn an_absent_store_reads_as_an_empty_leaderboard() {
        let dir = tempfile::tempdir().expect("tempdir");
        let board = board(&dir);
        assert!(board.load().expect("load ok").is_empty());
        assert!(board.top_n(5).expect("top ok").is_empty());
    }

    #[test]
    fn the_first_append_creates_the_store_with_its_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        let board = board(&dir);
        board.append(entry("Ada", 4)).expect("append ok");

        let raw = std::fs::read_to_string(board.path()).expect("read");
        assert!(raw.starts_with("Name,Score,Date"));
        assert_eq!(board.load().expect("load ok"), vec![entry("Ada", 4)]);
    }

    #[test]
    fn duplicates_are_always_accepted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let board = board(&dir);
        board.append(entry("Ada", 4)).expect("append");
        board.append(entry("Ada", 4)).expect("append");
        assert_eq!(board.load().expect("load").len(), 2);
    }

    #[test]
    fn top_n_sorts_descending_and_keeps_insertion_order_on_ties() {
        let dir = tempfile::tempdir().expect("tempdir");
        let board = board(&dir);
        board.append(entry("Ada", 3)).expect("append");
        board.append(entry("Grace", 5)).expect("append");
        board.append(entry("Alan", 3)).expect("append");
        board.append(entry("Edsger", 1)).expect("append");

        let top = board.top_n(3).expect("top ok");
        let names: Vec<&str> = top.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Grace", "Ada", "Alan"]);
    }

    #[test]
    fn top_n_truncates_to_n() {
        let dir = tempfile::tempdir().expect("tempdir");
        let board = board(&dir);
        for i in 0..7 {
            board.append(entry(&format!("p{i}"), i)).expect("append");
        }
        assert_eq!(board.top_n(5).expect("top ok").len(), 5);
    }

    #[test]
    fn a_corrupt_store_is_a_data_load_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let board = board(&dir);
        std::fs::write(board.path(), "Name,Score,Date\nAda,no-es-un-numero,hoy\n")
            .expect("write");

        assert!(matches!(
            board.top_n(5).unwrap_err(),
            QuizError::DataLoad { .. }
        ));
        // y append tampoco debe machacar un fichero que no entiende
        assert!(matches!(
            board.append(entry("Grace", 2)).unwrap_err(),
            QuizError::DataLoad { .. }
        ));
    }
}
