use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Una pregunta de opción múltiple con una única respuesta correcta.
///
/// Es un objeto de valor: se valida entera al construirse y no expone
/// mutadores. Las ediciones pasan por [`Question::with_text`] y
/// [`Question::with_options`], que devuelven una copia validada o un error,
/// de modo que nunca circula una pregunta en estado inválido.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    /// Construye una pregunta validada. El texto y las opciones se recortan
    /// antes de guardarse; las opciones deben ser al menos dos, no vacías y
    /// sin repetidos; el índice correcto debe apuntar a una opción existente.
    pub fn new(
        text: &str,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuizError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(QuizError::EmptyText);
        }

        let options: Vec<String> = options.iter().map(|o| o.trim().to_string()).collect();
        if options.len() < 2 {
            return Err(QuizError::EmptyOptions);
        }
        if options.iter().any(|o| o.is_empty()) {
            return Err(QuizError::InvalidOption);
        }
        for (i, option) in options.iter().enumerate() {
            if options[..i].contains(option) {
                return Err(QuizError::DuplicateOption(option.clone()));
            }
        }

        if correct_index >= options.len() {
            return Err(QuizError::IndexOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }

        Ok(Self {
            text: text.to_string(),
            options,
            correct_index,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// `true` solo si el índice coincide con la respuesta correcta.
    /// Un índice fuera de rango no es un error: simplemente no acierta.
    pub fn is_correct(&self, candidate_index: usize) -> bool {
        candidate_index == self.correct_index
    }

    /// Copia validada con otro texto; opciones e índice no cambian.
    pub fn with_text(&self, text: &str) -> Result<Self, QuizError> {
        Self::new(text, self.options.clone(), self.correct_index)
    }

    /// Copia validada con otro juego de opciones y otro índice correcto.
    /// Ambos se comprometen juntos: o entran los dos o no entra ninguno.
    pub fn with_options(
        &self,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuizError> {
        Self::new(&self.text, options, correct_index)
    }

    /// Texto listo para mostrar: la pregunta y sus opciones numeradas desde 1.
    pub fn display(&self) -> String {
        let mut out = format!("Pregunta: {}\n", self.text);
        for (i, option) in self.options.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, option));
        }
        out
    }

    pub fn to_record(&self) -> QuestionRecord {
        QuestionRecord {
            question_text: Some(self.text.clone()),
            options: Some(self.options.clone()),
            correct_answer_index: Some(self.correct_index),
        }
    }

    /// Reconstruye la pregunta desde un registro, señalando por nombre el
    /// campo que falte y revalidando todas las invariantes.
    pub fn from_record(record: QuestionRecord) -> Result<Self, QuizError> {
        let text = record
            .question_text
            .ok_or_else(|| QuizError::MissingField("question_text".into()))?;
        let options = record
            .options
            .ok_or_else(|| QuizError::MissingField("options".into()))?;
        let correct_index = record
            .correct_answer_index
            .ok_or_else(|| QuizError::MissingField("correct_answer_index".into()))?;
        Self::new(&text, options, correct_index)
    }
}

/// Un quiz: título, descripción opcional y preguntas en orden de presentación.
/// Las preguntas pertenecen en exclusiva al quiz que las contiene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    title: String,
    description: String,
    questions: Vec<Question>,
}

impl Quiz {
    pub fn new(title: &str, description: &str) -> Result<Self, QuizError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(QuizError::EmptyTitle);
        }
        Ok(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
            questions: Vec::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Cambia el título; un título vacío se rechaza y deja el actual.
    pub fn set_title(&mut self, title: &str) -> Result<(), QuizError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(QuizError::EmptyTitle);
        }
        self.title = title.to_string();
        Ok(())
    }

    /// La descripción sí puede quedar vacía.
    pub fn set_description(&mut self, description: &str) {
        self.description = description.trim().to_string();
    }

    /// Añade la pregunta al final: el orden de alta es el orden de juego.
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Quita y devuelve la pregunta en `index`. Con un índice fuera de rango
    /// la lista queda exactamente igual.
    pub fn remove_question(&mut self, index: usize) -> Result<Question, QuizError> {
        if index >= self.questions.len() {
            return Err(QuizError::IndexOutOfRange {
                index,
                len: self.questions.len(),
            });
        }
        Ok(self.questions.remove(index))
    }

    /// Sustituye la pregunta en `index` por una ya validada.
    pub fn replace_question(&mut self, index: usize, question: Question) -> Result<(), QuizError> {
        if index >= self.questions.len() {
            return Err(QuizError::IndexOutOfRange {
                index,
                len: self.questions.len(),
            });
        }
        self.questions[index] = question;
        Ok(())
    }

    pub fn to_record(&self) -> QuizRecord {
        QuizRecord {
            title: Some(self.title.clone()),
            description: self.description.clone(),
            questions: Some(self.questions.iter().map(Question::to_record).collect()),
        }
    }

    /// Reconstruye el quiz completo; cada pregunta pasa otra vez por
    /// [`Question::from_record`] y el primer fallo corta la carga.
    pub fn from_record(record: QuizRecord) -> Result<Self, QuizError> {
        let title = record
            .title
            .ok_or_else(|| QuizError::MissingField("title".into()))?;
        let question_records = record
            .questions
            .ok_or_else(|| QuizError::MissingField("questions".into()))?;

        let mut quiz = Self::new(&title, &record.description)?;
        for question_record in question_records {
            quiz.add_question(Question::from_record(question_record)?);
        }
        Ok(quiz)
    }
}

/// Registro serializado de una pregunta. Los campos son `Option` para poder
/// nombrar exactamente cuál falta al deserializar un archivo incompleto.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuestionRecord {
    pub question_text: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_answer_index: Option<usize>,
}

/// Registro serializado de un quiz. `description` es el único campo opcional
/// del formato: si no está, se asume vacía.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizRecord {
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    pub questions: Option<Vec<QuestionRecord>>,
}
