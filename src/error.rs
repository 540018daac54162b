use thiserror::Error;

/// Todos los fallos que puede producir la aplicación: invariantes del modelo,
/// registros incompletos y problemas de E/S del almacén.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("el texto de la pregunta no puede estar vacío")]
    EmptyText,

    #[error("la pregunta debe tener al menos dos opciones de respuesta")]
    EmptyOptions,

    #[error("las opciones no pueden estar vacías")]
    InvalidOption,

    #[error("la opción '{0}' está repetida")]
    DuplicateOption(String),

    #[error("índice {index} fuera de rango (hay {len} elementos)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("el título del quiz no puede estar vacío")]
    EmptyTitle,

    #[error("falta el campo obligatorio '{0}'")]
    MissingField(String),

    #[error("no existe ningún quiz con el nombre '{0}'")]
    NotFound(String),

    #[error("el archivo no contiene un registro válido: {0}")]
    Decode(serde_json::Error),

    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),
}
