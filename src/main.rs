use ai_quest::QuizApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "AIQuest — Quiz de IA",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}
