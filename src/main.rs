use quiz_maker::QuizApp;
use quiz_maker::console::StdConsole;
use quiz_maker::storage::{QuizStore, StorageConfig};

fn main() {
    env_logger::init();

    let store = QuizStore::new(StorageConfig::default());
    let mut app = QuizApp::new(StdConsole, store);
    app.run();
}
