use crate::QuizApp;
use crate::model::Category;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Context, RichText, TextEdit};

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 340.0, 540.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("🤖 AIQuest: ¡pon a prueba lo que sabes de IA!");
            ui.label("Preguntas de IA, machine learning y deep learning 🧠");
            ui.add_space(18.0);

            ui.add(
                TextEdit::singleline(&mut app.name_input)
                    .hint_text("Tu nombre")
                    .desired_width(260.0),
            );
            ui.add_space(8.0);

            egui::ComboBox::from_label("Categoría")
                .selected_text(app.selected_category.as_str())
                .show_ui(ui, |ui| {
                    for cat in Category::ALL {
                        ui.selectable_value(&mut app.selected_category, cat, cat.as_str());
                    }
                });

            ui.add_space(16.0);
            if ui
                .add_sized([220.0, 40.0], Button::new("🚀 Empezar quiz"))
                .clicked()
            {
                app.empezar_quiz();
            }

            // Avisos de validación o de carga del banco
            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(RichText::new(&app.message).color(egui::Color32::YELLOW));
            }
        });
    });
}
