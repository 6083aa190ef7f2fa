use crate::core::state::AppState;
use crate::search::events::SearchSubmitted;
use crate::search::resources::{SearchState, SearchStatus};
use crate::weather::resources::WeatherStatus;
use crate::wind::resources::WindReadout;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 60, 60);

pub fn render_wind_panel(
    mut contexts: EguiContexts,
    mut search: ResMut<SearchState>,
    readout: Res<WindReadout>,
    weather: Res<WeatherStatus>,
    app_state: Res<State<AppState>>,
    mut submissions: MessageWriter<SearchSubmitted>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("wind_panel")
        .default_width(260.0)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Windflower");
            ui.add_space(10.0);

            let ready = *app_state.get() == AppState::Ready;
            ui.label("City");
            let mut submit = false;
            ui.horizontal(|ui| {
                let input = ui.add_enabled(
                    ready,
                    egui::TextEdit::singleline(&mut search.query).hint_text("Paris"),
                );
                if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                if ui.add_enabled(ready, egui::Button::new("Search")).clicked() {
                    submit = true;
                }
            });

            if submit && !search.query.trim().is_empty() {
                submissions.write(SearchSubmitted {
                    name: search.query.clone(),
                });
            }

            ui.add_space(5.0);
            render_search_status(ui, &search.status);
            render_weather_status(ui, &weather);

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            ui.heading("Wind");
            ui.add_space(5.0);
            ui.label(format!("Direction: {}", readout.direction));
            ui.label(format!("Speed: {}", readout.speed));
        });
}

fn render_search_status(ui: &mut egui::Ui, status: &SearchStatus) {
    match status {
        SearchStatus::LoadingCities => {
            ui.label("Loading cities...");
        }
        SearchStatus::Ready => {}
        SearchStatus::Selected(city) => {
            ui.label(format!("Selected {city}"));
        }
        SearchStatus::UnknownCity(name) => {
            ui.colored_label(ERROR_COLOR, format!("City does not exist: {name}"));
        }
        SearchStatus::LoadFailed(reason) => {
            ui.colored_label(ERROR_COLOR, format!("City list unavailable: {reason}"));
        }
    }
}

fn render_weather_status(ui: &mut egui::Ui, status: &WeatherStatus) {
    match status {
        WeatherStatus::Idle => {}
        WeatherStatus::Ready(city) => {
            ui.label(format!("Current wind for {city}"));
        }
        WeatherStatus::Fetching(city) => {
            ui.label(format!("Fetching wind for {city}..."));
        }
        WeatherStatus::Failed { city, reason } => {
            ui.colored_label(ERROR_COLOR, format!("No wind data for {city}: {reason}"));
        }
    }
}
