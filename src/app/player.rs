use super::QuizApp;
use crate::console::Console;
use crate::sampling::sample_unique_indices;

impl<C: Console> QuizApp<C> {
    /// Flujo de juego: seleccionar un quiz, responder cada pregunta,
    /// puntuar y dejar un informe de resultados en texto.
    pub fn reproducir_quiz(&mut self) {
        self.console.tell("\n--- Reproducción de un quiz ---");

        let Some(quiz) = self.seleccionar_quiz("jugar") else {
            return;
        };

        if quiz.questions().is_empty() {
            self.console.tell(&format!(
                "El quiz '{}' no tiene preguntas. No se puede jugar.",
                quiz.title()
            ));
            return;
        }

        self.console
            .tell(&format!("\n--- Comienza el quiz: {} ---", quiz.title()));
        if !quiz.description().is_empty() {
            self.console.tell(&format!("Descripción: {}", quiz.description()));
        }

        // Orden de juego: el guardado, o uno aleatorio sin repetición
        let total = quiz.questions().len();
        let barajar = self
            .console
            .ask("¿Barajar las preguntas? (si/no): ")
            .to_lowercase();
        let orden: Vec<usize> = if barajar == "si" || barajar == "sí" {
            sample_unique_indices(total, total)
        } else {
            (0..total).collect()
        };

        let mut aciertos = 0;
        let mut falladas: Vec<&str> = Vec::new();
        for (paso, &qi) in orden.iter().enumerate() {
            let pregunta = &quiz.questions()[qi];
            self.console
                .tell(&format!("\n--- Pregunta {}/{} ---", paso + 1, total));
            self.console.tell(&pregunta.display());

            let eleccion = self.pedir_indice("Número de tu respuesta: ", pregunta.options().len());
            if pregunta.is_correct(eleccion) {
                self.console.tell("✅ ¡Correcto!");
                aciertos += 1;
            } else {
                self.console.tell(&format!(
                    "❌ Incorrecto. La correcta era: {}",
                    pregunta.options()[pregunta.correct_index()]
                ));
                falladas.push(pregunta.text());
            }
        }

        self.console.tell("\n--- ¡Fin del quiz! ---");
        self.console.tell(&format!(
            "Tu puntuación: {aciertos}/{total} respuestas correctas."
        ));
        if !falladas.is_empty() {
            self.console.tell("Preguntas falladas:");
            for texto in &falladas {
                self.console.tell(&format!("- {texto}"));
            }
        }

        // El informe es un extra: si falla se avisa y la partida vale igual
        let informe = render_informe(quiz.title(), aciertos, total - aciertos);
        match self.store.write_report(quiz.title(), &informe) {
            Ok(path) => self
                .console
                .tell(&format!("Informe guardado en {}.", path.display())),
            Err(e) => self
                .console
                .tell(&format!("⚠ No se pudo guardar el informe: {e}")),
        }
    }
}

/// Resumen de la partida en texto plano, con una barra de acierto.
fn render_informe(titulo: &str, aciertos: usize, fallos: usize) -> String {
    let total = aciertos + fallos;
    let porcentaje = if total == 0 { 0 } else { aciertos * 100 / total };
    let llenas = porcentaje / 5;
    let barra = format!("{}{}", "#".repeat(llenas), "-".repeat(20 - llenas));
    format!(
        "Resultados del quiz: {titulo}\n\n\
         Correctas:   {aciertos}\n\
         Incorrectas: {fallos}\n\
         Acierto:     {porcentaje}%\n\
         [{barra}]\n"
    )
}
