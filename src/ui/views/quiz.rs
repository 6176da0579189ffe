use crate::QuizApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, ProgressBar};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let view = match app.current_question_view() {
        Some(v) => v,
        None => {
            // Sin pregunta en curso no hay nada que pintar
            app.jugar_de_nuevo();
            return;
        }
    };

    centered_panel(ctx, 420.0, 650.0, |ui| {
        let panel_width = ui.available_width();

        ui.heading(format!("Pregunta {}/{}", view.number_1based, view.total));
        ui.add_space(6.0);
        ui.label(&view.question);
        ui.add_space(12.0);

        for (i, option) in view.options.iter().enumerate() {
            ui.radio_value(&mut app.chosen_option, Some(i), option);
        }

        ui.add_space(12.0);

        // Enviar se apaga tras puntuar; Siguiente se enciende entonces.
        // La sesión rechaza igualmente los envíos fuera de turno.
        let submitted = app.current_submitted();
        let (enviar, siguiente) = two_button_row(
            ui,
            panel_width,
            ("Enviar respuesta", !submitted),
            ("Siguiente ➡", submitted),
        );
        if enviar {
            app.procesar_respuesta();
        }
        if siguiente {
            app.siguiente_pregunta();
        }

        ui.add_space(12.0);
        ui.add(ProgressBar::new(app.progress_fraction()).show_percentage());

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}
