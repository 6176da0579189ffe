use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, Grid, RichText, ScrollArea};

pub fn ui_summary_view(app: &mut QuizApp, ctx: &Context) {
    // Si no hay sesión completada, volvemos al inicio para evitar un resumen vacío
    let summary = match app.score_summary() {
        Some(s) => s,
        None => {
            app.jugar_de_nuevo();
            return;
        }
    };

    centered_panel(ctx, 520.0, 600.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🎉 ¡Quiz completado!");
            ui.add_space(10.0);
            ui.label(
                RichText::new(format!("Puntuación final: {}", summary.label()))
                    .heading()
                    .strong(),
            );
            ui.add_space(6.0);
            ui.label(summary.grade_label());

            ui.add_space(18.0);
            ui.heading("🏆 Ranking (Top 5)");
            ui.add_space(6.0);

            if app.top_entries.is_empty() {
                ui.label("Aún no hay puntuaciones guardadas.");
            } else {
                ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                    Grid::new("leaderboard_grid")
                        .striped(true)
                        .spacing([16.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("#");
                            ui.label("Nombre");
                            ui.label("Puntos");
                            ui.label("Fecha");
                            ui.end_row();

                            for (i, entry) in app.top_entries.iter().enumerate() {
                                ui.label((i + 1).to_string());
                                ui.label(&entry.name);
                                ui.label(entry.score.to_string());
                                ui.label(&entry.date);
                                ui.end_row();
                            }
                        });
                });
            }

            ui.add_space(18.0);
            if ui
                .add_sized([220.0, 40.0], Button::new("🔁 Jugar otra vez"))
                .clicked()
            {
                app.jugar_de_nuevo();
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
