use eframe::egui;

use crate::controller::{events::UiEvent, reducer::ScreenState};
use crate::ui::bit_table;

pub struct ConverterApp {
    title: String,
    state: ScreenState,
}

impl ConverterApp {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            state: ScreenState::default(),
        }
    }

    fn show_inputs(&mut self, ui: &mut egui::Ui, events: &mut Vec<UiEvent>) {
        let drafts = &mut self.state.drafts;

        if number_field(ui, "decimal_input", "Decimal number", &mut drafts.decimal).changed() {
            events.push(UiEvent::DecimalChanged(drafts.decimal.clone()));
        }
        if number_field(ui, "binary_input", "Binary number", &mut drafts.binary).changed() {
            events.push(UiEvent::BinaryChanged(drafts.binary.clone()));
        }
    }
}

fn number_field(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    value: &mut String,
) -> egui::Response {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).strong());
        ui.add(
            egui::TextEdit::singleline(value)
                .id_salt(id)
                .hint_text("0")
                .desired_width(240.0),
        )
    })
    .inner
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new(&self.title).strong());
            });
            ui.separator();
            ui.add_space(12.0);

            self.show_inputs(ui, &mut events);
            ui.add_space(24.0);

            bit_table::show(ui, self.state.converter.current_bits());
            ui.add_space(12.0);

            if ui.button("Clear").clicked() {
                events.push(UiEvent::Cleared);
            }
        });

        for event in events {
            self.state.apply(event);
        }
    }
}
