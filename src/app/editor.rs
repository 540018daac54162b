use super::QuizApp;
use crate::console::Console;
use crate::model::Quiz;

/// Estados del editor una vez cargado el quiz. `Committing` y `Cancelled`
/// son terminales; la fase previa de selección vive en `seleccionar_quiz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorState {
    Editing,
    Committing,
    Cancelled,
}

/// Un juego de opciones editado solo se acepta entero: al menos dos, todas
/// con texto y sin repetidos.
fn opciones_validas(opciones: &[String]) -> bool {
    opciones.len() >= 2
        && opciones.iter().all(|o| !o.is_empty())
        && opciones
            .iter()
            .enumerate()
            .all(|(i, o)| !opciones[..i].contains(o))
}

impl<C: Console> QuizApp<C> {
    /// Flujo de edición: seleccionar un quiz guardado, editarlo en memoria
    /// y terminar guardando o descartando todos los cambios.
    pub fn editar_quiz_existente(&mut self) {
        self.console.tell("\n--- Edición de un quiz existente ---");

        // Solo se pasa a edición tras una carga correcta
        let Some(mut quiz) = self.seleccionar_quiz("editar") else {
            return;
        };

        loop {
            match self.menu_de_edicion(&mut quiz) {
                EditorState::Editing => {}
                EditorState::Committing => {
                    // El guardado puede cancelarse en la confirmación de
                    // sobrescritura; en ambos casos el editor termina aquí
                    self.guardar_con_confirmacion(&quiz);
                    self.console.tell("Edición terminada.");
                    break;
                }
                EditorState::Cancelled => {
                    self.console
                        .tell("Edición cancelada. Los cambios se descartan.");
                    break;
                }
            }
        }
    }

    /// Un paso del menú de edición; devuelve el estado siguiente.
    fn menu_de_edicion(&mut self, quiz: &mut Quiz) -> EditorState {
        self.console.tell(&format!("\n--- Editando: {} ---", quiz.title()));
        self.console.tell("1. Editar título y descripción");
        self.console.tell("2. Añadir preguntas");
        self.console.tell("3. Editar una pregunta");
        self.console.tell("4. Eliminar una pregunta");
        self.console.tell("5. Terminar y guardar");
        self.console.tell("6. Cancelar sin guardar");

        match self.console.ask("Elige una opción (1-6): ").as_str() {
            "1" => self.editar_titulo_y_descripcion(quiz),
            "2" => {
                self.agregar_preguntas(quiz);
                self.console.tell("De vuelta al menú de edición.");
            }
            "3" => self.editar_pregunta(quiz),
            "4" => self.eliminar_pregunta(quiz),
            "5" => return EditorState::Committing,
            "6" => return EditorState::Cancelled,
            _ => self.console.tell("⚠ Opción no válida. Elige del 1 al 6."),
        }
        EditorState::Editing
    }

    /// Un título en blanco conserva el actual; la descripción sí puede
    /// quedar vacía.
    fn editar_titulo_y_descripcion(&mut self, quiz: &mut Quiz) {
        self.console.tell("\n--- Título y descripción ---");

        let nuevo_titulo = self
            .console
            .ask(&format!("Nuevo título (actual: '{}'): ", quiz.title()));
        if nuevo_titulo.is_empty() {
            self.console.tell("Título sin cambios.");
        } else if let Err(e) = quiz.set_title(&nuevo_titulo) {
            self.console.tell(&format!("❌ {e}"));
        }

        let nueva_descripcion = self
            .console
            .ask(&format!("Nueva descripción (actual: '{}'): ", quiz.description()));
        quiz.set_description(&nueva_descripcion);
        self.console.tell("Título y descripción actualizados.");
    }

    /// Edita una pregunta en dos sub-ediciones independientes: primero el
    /// texto (se compromete solo), después opciones e índice correcto (se
    /// comprometen juntos, o se descartan juntos si el juego no es válido).
    fn editar_pregunta(&mut self, quiz: &mut Quiz) {
        if quiz.questions().is_empty() {
            self.console.tell("Este quiz no tiene preguntas que editar.");
            return;
        }

        self.console.tell("\n--- Edición de una pregunta ---");
        self.listar_preguntas(quiz);
        let idx = self.pedir_indice("Número de la pregunta a editar: ", quiz.questions().len());

        // Sub-edición 1: el texto
        let actual = quiz.questions()[idx].clone();
        let nuevo_texto = self
            .console
            .ask(&format!("Nuevo texto (actual: '{}'): ", actual.text()));
        let pregunta = if nuevo_texto.is_empty() {
            self.console.tell("Texto sin cambios.");
            actual
        } else {
            match actual.with_text(&nuevo_texto) {
                Ok(p) => p,
                Err(e) => {
                    self.console.tell(&format!("❌ {e}"));
                    actual
                }
            }
        };
        if let Err(e) = quiz.replace_question(idx, pregunta.clone()) {
            self.console.tell(&format!("❌ {e}"));
            return;
        }

        // Sub-edición 2: revisar cada opción en el sitio (Enter la conserva)
        self.console
            .tell("Revisa las opciones. Enter deja cada una como está.");
        let mut nuevas_opciones: Vec<String> = Vec::with_capacity(pregunta.options().len());
        for (i, opcion) in pregunta.options().iter().enumerate() {
            let editada = self
                .console
                .ask(&format!("Opción {} (actual: '{}'): ", i + 1, opcion));
            nuevas_opciones.push(if editada.is_empty() {
                opcion.clone()
            } else {
                editada
            });
        }

        // Altas de opciones nuevas: vacías o repetidas se rechazan
        loop {
            let respuesta = self
                .console
                .ask("¿Añadir una opción nueva? (si/no): ")
                .to_lowercase();
            if respuesta != "si" && respuesta != "sí" {
                break;
            }
            let nueva = self.console.ask("Texto de la opción nueva: ");
            if nueva.is_empty() {
                self.console.tell("⚠ La opción no puede estar vacía.");
            } else if nuevas_opciones.contains(&nueva) {
                self.console.tell("⚠ Esa opción ya existe.");
            } else {
                nuevas_opciones.push(nueva);
            }
        }

        // Precondición atómica: un juego inválido descarta la sub-edición
        // entera y las opciones guardadas quedan como estaban
        if !opciones_validas(&nuevas_opciones) {
            self.console.tell(
                "❌ La pregunta necesita al menos dos opciones con texto y sin repetir. \
                 Las opciones no se han cambiado.",
            );
            return;
        }

        // Índice correcto contra la lista NUEVA; Enter conserva el actual
        self.console.tell("Opciones tras la edición:");
        for (i, opcion) in nuevas_opciones.iter().enumerate() {
            self.console.tell(&format!("  {}. {}", i + 1, opcion));
        }
        let indice = loop {
            let entrada = self.console.ask(&format!(
                "Número de la respuesta correcta (actual: {}): ",
                pregunta.correct_index() + 1
            ));
            if entrada.is_empty() {
                if pregunta.correct_index() < nuevas_opciones.len() {
                    self.console.tell("Respuesta correcta sin cambios.");
                    break pregunta.correct_index();
                }
                self.console
                    .tell("⚠ La respuesta actual ya no está en rango. Elige un número.");
                continue;
            }
            match entrada.parse::<usize>() {
                Ok(n) if n >= 1 && n <= nuevas_opciones.len() => break n - 1,
                Ok(_) => self.console.tell("⚠ Número fuera de la lista."),
                Err(_) => self.console.tell("⚠ Eso no es un número."),
            }
        };

        match pregunta.with_options(nuevas_opciones, indice) {
            Ok(actualizada) => match quiz.replace_question(idx, actualizada) {
                Ok(()) => self.console.tell("✅ Pregunta actualizada."),
                Err(e) => self.console.tell(&format!("❌ {e}")),
            },
            Err(e) => self
                .console
                .tell(&format!("❌ {e}. Las opciones no se han cambiado.")),
        }
    }

    fn eliminar_pregunta(&mut self, quiz: &mut Quiz) {
        if quiz.questions().is_empty() {
            self.console.tell("Este quiz no tiene preguntas que eliminar.");
            return;
        }

        self.console.tell("\n--- Eliminación de una pregunta ---");
        self.listar_preguntas(quiz);
        let idx = self.pedir_indice("Número de la pregunta a eliminar: ", quiz.questions().len());
        match quiz.remove_question(idx) {
            Ok(eliminada) => self
                .console
                .tell(&format!("Pregunta '{}' eliminada.", eliminada.text())),
            Err(e) => self.console.tell(&format!("❌ {e}")),
        }
    }

    fn listar_preguntas(&mut self, quiz: &Quiz) {
        self.console.tell("Preguntas actuales:");
        for (i, pregunta) in quiz.questions().iter().enumerate() {
            self.console.tell(&format!("  {}. {}", i + 1, pregunta.text()));
        }
    }
}
