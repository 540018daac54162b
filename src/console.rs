use std::io::{self, BufRead, Write};

/// Diálogo por líneas: pedir una respuesta y mostrar un mensaje. Los flujos
/// interactivos hablan solo con este trait, nunca con la terminal, para poder
/// probarse con una consola guionizada.
pub trait Console {
    /// Muestra `prompt` y devuelve la siguiente línea ya recortada.
    fn ask(&mut self, prompt: &str) -> String;

    /// Muestra un mensaje con salto de línea final.
    fn tell(&mut self, message: &str);
}

/// Consola real sobre stdin/stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn ask(&mut self, prompt: &str) -> String {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            // stdin cerrado: no queda diálogo posible
            Ok(0) => {
                println!();
                std::process::exit(0);
            }
            Ok(_) => line.trim().to_string(),
            Err(e) => {
                log::warn!("fallo leyendo stdin: {e}");
                String::new()
            }
        }
    }

    fn tell(&mut self, message: &str) {
        println!("{message}");
    }
}

#[cfg(test)]
pub(crate) mod script {
    use super::Console;
    use std::collections::VecDeque;

    /// Consola guionizada para tests: respuestas preparadas de antemano y
    /// toda la salida capturada para inspeccionarla.
    pub struct ScriptedConsole {
        answers: VecDeque<String>,
        pub output: Vec<String>,
    }

    impl ScriptedConsole {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|s| s.to_string()).collect(),
                output: Vec::new(),
            }
        }

        pub fn saw(&self, fragment: &str) -> bool {
            self.output.iter().any(|line| line.contains(fragment))
        }
    }

    impl Console for ScriptedConsole {
        fn ask(&mut self, prompt: &str) -> String {
            self.output.push(prompt.to_string());
            match self.answers.pop_front() {
                Some(answer) => answer.trim().to_string(),
                None => panic!("guion agotado tras el prompt: {prompt}"),
            }
        }

        fn tell(&mut self, message: &str) {
            self.output.push(message.to_string());
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn scripted_console_trims_answers_and_records_output() {
            let mut console = ScriptedConsole::new(&["  hola  "]);
            assert_eq!(console.ask("¿?: "), "hola");
            console.tell("mensaje");
            assert!(console.saw("¿?:"));
            assert!(console.saw("mensaje"));
        }
    }
}
