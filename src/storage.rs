use std::fs;
use std::path::PathBuf;

use crate::error::QuizError;
use crate::model::{Quiz, QuizRecord};

/// Rutas de trabajo del almacén. Se pasan explícitamente al construirlo;
/// nada de directorios globales.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub records_dir: PathBuf,
    pub reports_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            records_dir: PathBuf::from("data/quiz_examples"),
            reports_dir: PathBuf::from("reports"),
        }
    }
}

/// Almacén de quizzes en archivos JSON, uno por quiz.
pub struct QuizStore {
    config: StorageConfig,
}

impl QuizStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Normaliza el nombre a la extensión `.json`.
    fn record_path(&self, name: &str) -> PathBuf {
        let file = if name.ends_with(".json") {
            name.to_string()
        } else {
            format!("{name}.json")
        };
        self.config.records_dir.join(file)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.record_path(name).is_file()
    }

    /// Escribe el quiz como JSON legible, creando el directorio si hace falta.
    pub fn save(&self, quiz: &Quiz, name: &str) -> Result<PathBuf, QuizError> {
        fs::create_dir_all(&self.config.records_dir)?;
        let path = self.record_path(name);
        let json = serde_json::to_string_pretty(&quiz.to_record()).map_err(QuizError::Decode)?;
        fs::write(&path, json)?;
        log::info!("quiz '{}' guardado en {}", quiz.title(), path.display());
        Ok(path)
    }

    /// Carga un quiz por nombre. Distingue archivo inexistente, JSON roto,
    /// registro con campos ausentes e invariantes del modelo violadas.
    pub fn load(&self, name: &str) -> Result<Quiz, QuizError> {
        let path = self.record_path(name);
        if !path.is_file() {
            return Err(QuizError::NotFound(name.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        let record: QuizRecord = serde_json::from_str(&contents).map_err(QuizError::Decode)?;
        let quiz = Quiz::from_record(record)?;
        log::info!("quiz '{}' cargado desde {}", quiz.title(), path.display());
        Ok(quiz)
    }

    /// Nombres de quiz disponibles, sin extensión y en orden alfabético.
    /// Un directorio inexistente o vacío da una lista vacía, nunca un error.
    pub fn list(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.config.records_dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| match entry {
                Ok(e) => Some(e.path()),
                Err(e) => {
                    log::warn!("entrada ilegible en el directorio de quizzes: {e}");
                    None
                }
            })
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        names
    }

    /// Guarda el informe de resultados de una partida bajo `reports_dir`.
    pub fn write_report(&self, quiz_title: &str, contents: &str) -> Result<PathBuf, QuizError> {
        fs::create_dir_all(&self.config.reports_dir)?;
        let slug = quiz_title.to_lowercase().replace(' ', "_");
        let path = self.config.reports_dir.join(format!("resultados_{slug}.txt"));
        fs::write(&path, contents)?;
        log::info!("informe guardado en {}", path.display());
        Ok(path)
    }
}

/// Nombre de archivo aceptable para un quiz: letras, dígitos, `-` y `_`.
pub fn is_valid_quiz_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
