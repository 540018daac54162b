use crate::console::Console;
use crate::model::Quiz;
use crate::storage::QuizStore;

// Submódulos: cada flujo interactivo añade sus métodos a QuizApp
pub mod creator;
pub mod editor;
pub mod player;

/// La aplicación interactiva: conecta la consola con el almacén y reparte
/// el control entre los flujos de creación, juego y edición.
pub struct QuizApp<C: Console> {
    console: C,
    store: QuizStore,
}

impl<C: Console> QuizApp<C> {
    pub fn new(console: C, store: QuizStore) -> Self {
        Self { console, store }
    }

    /// Bucle del menú principal: crear, jugar, editar o salir.
    pub fn run(&mut self) {
        self.console.tell("👋 ¡Bienvenido a la aplicación de quizzes!");
        loop {
            self.console.tell("\n--- Menú principal ---");
            self.console.tell("1. Crear un quiz nuevo");
            self.console.tell("2. Jugar un quiz");
            self.console.tell("3. Editar un quiz existente");
            self.console.tell("4. Salir");

            match self.console.ask("Elige una opción (1-4): ").as_str() {
                "1" => self.crear_nuevo_quiz(),
                "2" => self.reproducir_quiz(),
                "3" => self.editar_quiz_existente(),
                "4" => {
                    self.console.tell("Gracias por usar la aplicación. ¡Hasta pronto!");
                    break;
                }
                _ => self.console.tell("⚠ Opción no válida. Elige 1, 2, 3 o 4."),
            }
        }
    }

    // Ayudantes compartidos por los flujos

    /// Pide un número entre 1 y `len` y lo devuelve como índice 0-based.
    /// Reintenta hasta que la entrada sea un número dentro del rango.
    pub(crate) fn pedir_indice(&mut self, prompt: &str, len: usize) -> usize {
        loop {
            let entrada = self.console.ask(prompt);
            match entrada.parse::<usize>() {
                Ok(n) if n >= 1 && n <= len => return n - 1,
                Ok(_) => self.console.tell("⚠ Número fuera de la lista. Prueba otra vez."),
                Err(_) => self
                    .console
                    .tell("⚠ Eso no es un número. Escribe el número de la lista."),
            }
        }
    }

    /// Fase de selección: lista los quizzes guardados, pide uno por número
    /// y lo carga. Devuelve `None` si no hay quizzes o si la carga falla;
    /// el fallo se informa y el estado en memoria queda intacto.
    pub(crate) fn seleccionar_quiz(&mut self, proposito: &str) -> Option<Quiz> {
        let nombres = self.store.list();
        if nombres.is_empty() {
            self.console.tell("No hay quizzes guardados. Crea uno primero.");
            return None;
        }

        self.console.tell(&format!("Quizzes disponibles para {proposito}:"));
        for (i, nombre) in nombres.iter().enumerate() {
            self.console.tell(&format!("  {}. {}", i + 1, nombre));
        }

        let idx = self.pedir_indice("Elige el número del quiz: ", nombres.len());
        let nombre = &nombres[idx];
        match self.store.load(nombre) {
            Ok(quiz) => {
                self.console.tell(&format!("Quiz '{}' cargado.", quiz.title()));
                Some(quiz)
            }
            Err(e) => {
                self.console.tell(&format!("❌ No se pudo cargar '{nombre}': {e}"));
                None
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::QuizApp;
    use crate::console::script::ScriptedConsole;
    use crate::storage::{QuizStore, StorageConfig};
    use std::path::Path;

    pub fn config_in(root: &Path) -> StorageConfig {
        StorageConfig {
            records_dir: root.join("quizzes"),
            reports_dir: root.join("reports"),
        }
    }

    pub fn scripted_app(root: &Path, answers: &[&str]) -> QuizApp<ScriptedConsole> {
        QuizApp::new(
            ScriptedConsole::new(answers),
            QuizStore::new(config_in(root)),
        )
    }
}
