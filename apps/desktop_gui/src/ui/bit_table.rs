//! Two-row bit table: place values over bit cells, scrolling sideways when wide.

use eframe::egui;
use shared::BitSequence;

const MIN_CELL_WIDTH: f32 = 48.0;

pub fn header_labels(bits: &BitSequence) -> Vec<String> {
    converter::place_values(bits)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Cells widen with the table so long sequences stay readable.
pub fn cell_width(len: usize) -> f32 {
    MIN_CELL_WIDTH.max(4.0 * len as f32)
}

pub fn show(ui: &mut egui::Ui, bits: &BitSequence) {
    let headers = header_labels(bits);
    let width = cell_width(bits.len());
    let stroke = ui.visuals().widgets.noninteractive.bg_stroke;

    egui::ScrollArea::horizontal()
        .id_salt("bit_table_scroll")
        .show(ui, |ui| {
            egui::Grid::new("bit_table")
                .spacing([0.0, 0.0])
                .min_col_width(width)
                .show(ui, |ui| {
                    for header in &headers {
                        cell(ui, egui::RichText::new(header).strong(), stroke, width);
                    }
                    ui.end_row();

                    for bit in bits.as_slice() {
                        cell(ui, egui::RichText::new(bit.to_string()).monospace(), stroke, width);
                    }
                    ui.end_row();
                });
        });
}

fn cell(ui: &mut egui::Ui, text: egui::RichText, stroke: egui::Stroke, width: f32) {
    egui::Frame::NONE
        .stroke(stroke)
        .inner_margin(egui::Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.set_min_width(width - 16.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(text);
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_powers_of_two_from_the_left() {
        let bits = BitSequence::default();
        assert_eq!(
            header_labels(&bits),
            vec!["128", "64", "32", "16", "8", "4", "2", "1"]
        );
    }

    #[test]
    fn cells_widen_for_long_tables() {
        assert_eq!(cell_width(8), MIN_CELL_WIDTH);
        assert_eq!(cell_width(20), 80.0);
    }
}
