use super::QuizApp;
use crate::console::Console;
use crate::model::{Question, Quiz};
use crate::storage;

impl<C: Console> QuizApp<C> {
    /// Flujo de creación completo: título, descripción, preguntas y guardado.
    pub fn crear_nuevo_quiz(&mut self) {
        self.console.tell("\n--- Creación de un quiz nuevo ---");

        // Título: reintenta hasta tener algo no vacío
        let titulo = loop {
            let entrada = self.console.ask("Título del quiz (p. ej. 'Geografía'): ");
            if entrada.is_empty() {
                self.console.tell("⚠ El título no puede estar vacío. Prueba otra vez.");
            } else {
                break entrada;
            }
        };

        let descripcion = self.console.ask("Descripción breve (opcional): ");

        let mut quiz = match Quiz::new(&titulo, &descripcion) {
            Ok(q) => q,
            Err(e) => {
                self.console.tell(&format!("❌ {e}"));
                return;
            }
        };
        self.console
            .tell(&format!("Quiz '{}' creado. Ahora añade preguntas.", quiz.title()));

        self.agregar_preguntas(&mut quiz);

        if quiz.questions().is_empty() {
            self.console
                .tell("No se añadió ninguna pregunta. El quiz no se guardará.");
            return;
        }

        self.guardar_con_confirmacion(&quiz);
    }

    /// Bucle de alta de preguntas. Un texto vacío es la única señal de fin
    /// del bucle; una pregunta que no pase la validación se descarta con un
    /// aviso y el bucle sigue.
    pub(crate) fn agregar_preguntas(&mut self, quiz: &mut Quiz) {
        loop {
            self.console.tell("\n--- Nueva pregunta ---");
            let texto = self
                .console
                .ask("Texto de la pregunta (Enter para terminar): ");
            if texto.is_empty() {
                self.console.tell("Fin del alta de preguntas.");
                break;
            }

            let opciones = self.recoger_opciones();
            let correcta = self.elegir_respuesta_correcta(&opciones);

            match Question::new(&texto, opciones, correcta) {
                Ok(pregunta) => {
                    quiz.add_question(pregunta);
                    self.console.tell("✅ Pregunta añadida.");
                }
                Err(e) => {
                    self.console
                        .tell(&format!("❌ No se pudo crear la pregunta: {e}. Se descarta."));
                }
            }
        }
    }

    /// Recoge opciones una por línea: mínimo dos antes de poder terminar,
    /// y los duplicados exactos se rechazan sin aumentar la cuenta.
    fn recoger_opciones(&mut self) -> Vec<String> {
        self.console
            .tell("Escribe las opciones. Enter en una línea vacía para terminar.");
        let mut opciones: Vec<String> = Vec::new();
        loop {
            let opcion = self.console.ask(&format!("Opción {}: ", opciones.len() + 1));
            if opcion.is_empty() {
                if opciones.len() < 2 {
                    self.console
                        .tell("⚠ La pregunta necesita al menos dos opciones.");
                    continue;
                }
                break;
            }
            if opciones.contains(&opcion) {
                self.console.tell("⚠ Esa opción ya existe. Escribe otra.");
            } else {
                opciones.push(opcion);
            }
        }
        opciones
    }

    /// Muestra las opciones numeradas y pide el número de la correcta.
    fn elegir_respuesta_correcta(&mut self, opciones: &[String]) -> usize {
        self.console.tell("Opciones disponibles:");
        for (i, opcion) in opciones.iter().enumerate() {
            self.console.tell(&format!("  {}. {}", i + 1, opcion));
        }
        self.pedir_indice("Número de la respuesta correcta: ", opciones.len())
    }

    /// Pide el nombre de archivo, confirma sobrescrituras y guarda el quiz.
    /// Rechazar la sobrescritura cancela el guardado entero, sin reintentos.
    pub(crate) fn guardar_con_confirmacion(&mut self, quiz: &Quiz) {
        let nombre = loop {
            let entrada = self.console.ask("Nombre de archivo para el quiz (sin .json): ");
            if entrada.is_empty() {
                self.console.tell("⚠ El nombre no puede estar vacío.");
                continue;
            }
            if !storage::is_valid_quiz_name(&entrada) {
                self.console
                    .tell("⚠ Solo letras, números, guiones y guiones bajos.");
                continue;
            }
            if self.store.exists(&entrada) {
                let respuesta = self
                    .console
                    .ask(&format!(
                        "El archivo '{entrada}.json' ya existe. ¿Sobrescribir? (si/no): "
                    ))
                    .to_lowercase();
                if respuesta != "si" && respuesta != "sí" {
                    self.console.tell("Guardado cancelado.");
                    return;
                }
            }
            break entrada;
        };

        match self.store.save(quiz, &nombre) {
            Ok(path) => self
                .console
                .tell(&format!("✅ Quiz guardado en {}.", path.display())),
            Err(e) => self.console.tell(&format!("❌ Error al guardar el quiz: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::{config_in, scripted_app};
    use crate::storage::QuizStore;
    use tempfile::TempDir;

    #[test]
    fn creation_flow_saves_the_quiz_once() {
        let dir = TempDir::new().unwrap();
        let mut app = scripted_app(
            dir.path(),
            &[
                "Capitals",
                "",
                "What is the capital of Poland?",
                "Warsaw",
                "Krakow",
                "",
                "1",
                "",
                "geo",
            ],
        );

        app.crear_nuevo_quiz();

        let store = QuizStore::new(config_in(dir.path()));
        assert_eq!(store.list(), vec!["geo".to_string()]);

        let quiz = store.load("geo").unwrap();
        assert_eq!(quiz.title(), "Capitals");
        assert_eq!(quiz.description(), "");
        assert_eq!(quiz.questions().len(), 1);

        let pregunta = &quiz.questions()[0];
        assert_eq!(pregunta.text(), "What is the capital of Poland?");
        assert_eq!(pregunta.options(), ["Warsaw", "Krakow"]);
        assert_eq!(pregunta.correct_index(), 0);
    }

    #[test]
    fn creation_flow_with_zero_questions_never_saves() {
        let dir = TempDir::new().unwrap();
        let mut app = scripted_app(dir.path(), &["Vacío", "nada que ver", ""]);

        app.crear_nuevo_quiz();

        let store = QuizStore::new(config_in(dir.path()));
        assert!(store.list().is_empty());
        assert!(app.console.saw("no se guardará"));
    }

    #[test]
    fn empty_title_is_asked_again() {
        let dir = TempDir::new().unwrap();
        let mut app = scripted_app(dir.path(), &["", "", "Al fin", "", ""]);

        app.crear_nuevo_quiz();

        assert!(app.console.saw("⚠ El título no puede estar vacío"));
        assert!(app.console.saw("Quiz 'Al fin' creado"));
    }

    #[test]
    fn duplicate_option_is_rejected_without_increasing_the_count() {
        let dir = TempDir::new().unwrap();
        let mut app = scripted_app(
            dir.path(),
            &["Dup", "", "¿A o B?", "A", "A", "B", "", "1", "", "dup"],
        );

        app.crear_nuevo_quiz();

        let store = QuizStore::new(config_in(dir.path()));
        let quiz = store.load("dup").unwrap();
        assert_eq!(quiz.questions()[0].options(), ["A", "B"]);
        assert!(app.console.saw("⚠ Esa opción ya existe"));
    }

    #[test]
    fn option_collection_requires_two_before_finishing() {
        let dir = TempDir::new().unwrap();
        let mut app = scripted_app(
            dir.path(),
            &["Min", "", "¿Sí o no?", "Sí", "", "No", "", "2", "", "min"],
        );

        app.crear_nuevo_quiz();

        let store = QuizStore::new(config_in(dir.path()));
        let quiz = store.load("min").unwrap();
        assert_eq!(quiz.questions()[0].options(), ["Sí", "No"]);
        assert_eq!(quiz.questions()[0].correct_index(), 1);
        assert!(app.console.saw("al menos dos opciones"));
    }

    #[test]
    fn correct_answer_prompt_retries_until_valid() {
        let dir = TempDir::new().unwrap();
        let mut app = scripted_app(
            dir.path(),
            &["Retry", "", "¿1+1?", "2", "3", "", "x", "9", "1", "", "retry"],
        );

        app.crear_nuevo_quiz();

        let store = QuizStore::new(config_in(dir.path()));
        let quiz = store.load("retry").unwrap();
        assert_eq!(quiz.questions()[0].correct_index(), 0);
        assert!(app.console.saw("⚠ Eso no es un número"));
        assert!(app.console.saw("⚠ Número fuera de la lista"));
    }

    #[test]
    fn invalid_filename_is_asked_again() {
        let dir = TempDir::new().unwrap();
        let mut app = scripted_app(
            dir.path(),
            &["Nombre", "", "¿A o B?", "A", "B", "", "1", "", "con espacios", "", "ok_1"],
        );

        app.crear_nuevo_quiz();

        let store = QuizStore::new(config_in(dir.path()));
        assert_eq!(store.list(), vec!["ok_1".to_string()]);
        assert!(app.console.saw("Solo letras, números"));
        assert!(app.console.saw("⚠ El nombre no puede estar vacío"));
    }

    #[test]
    fn declining_the_overwrite_aborts_the_save() {
        let dir = TempDir::new().unwrap();

        // primer quiz ocupa el nombre
        let mut app = scripted_app(
            dir.path(),
            &["Original", "", "¿A o B?", "A", "B", "", "1", "", "geo"],
        );
        app.crear_nuevo_quiz();

        // el segundo intenta el mismo nombre y no quiere sobrescribir
        let mut app = scripted_app(
            dir.path(),
            &["Intruso", "", "¿C o D?", "C", "D", "", "2", "", "geo", "no"],
        );
        app.crear_nuevo_quiz();
        assert!(app.console.saw("Guardado cancelado"));

        let store = QuizStore::new(config_in(dir.path()));
        let quiz = store.load("geo").unwrap();
        assert_eq!(quiz.title(), "Original");
    }

    #[test]
    fn accepting_the_overwrite_replaces_the_quiz() {
        let dir = TempDir::new().unwrap();

        let mut app = scripted_app(
            dir.path(),
            &["Original", "", "¿A o B?", "A", "B", "", "1", "", "geo"],
        );
        app.crear_nuevo_quiz();

        let mut app = scripted_app(
            dir.path(),
            &["Nuevo", "", "¿C o D?", "C", "D", "", "2", "", "geo", "si"],
        );
        app.crear_nuevo_quiz();

        let store = QuizStore::new(config_in(dir.path()));
        let quiz = store.load("geo").unwrap();
        assert_eq!(quiz.title(), "Nuevo");
    }

    #[test]
    fn several_questions_keep_their_insertion_order() {
        let dir = TempDir::new().unwrap();
        let mut app = scripted_app(
            dir.path(),
            &[
                "Doble", "", "¿Primera?", "A", "B", "", "1", "¿Segunda?", "C", "D", "", "2", "",
                "doble",
            ],
        );

        app.crear_nuevo_quiz();

        let store = QuizStore::new(config_in(dir.path()));
        let quiz = store.load("doble").unwrap();
        assert_eq!(quiz.questions().len(), 2);
        assert_eq!(quiz.questions()[0].text(), "¿Primera?");
        assert_eq!(quiz.questions()[1].text(), "¿Segunda?");
    }
}
