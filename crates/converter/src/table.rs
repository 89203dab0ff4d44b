//! Plain-text rendering of the bit table: place values over bit cells.

use shared::domain::BitSequence;

use crate::place_values;

/// Renders a header row of place values and a row of bits. Cells are
/// right-aligned to the widest header so columns line up.
pub fn render_table(bits: &BitSequence) -> String {
    let headers: Vec<String> = place_values(bits)
        .iter()
        .map(ToString::to_string)
        .collect();
    let width = headers.iter().map(String::len).max().unwrap_or(1);

    let mut out = String::new();
    push_row(&mut out, headers.iter().map(String::as_str), width);
    push_row(
        &mut out,
        bits.as_slice()
            .iter()
            .map(|bit| if *bit == 0 { "0" } else { "1" }),
        width,
    );
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, width: usize) {
    out.push('|');
    for cell in cells {
        out.push_str(&format!(" {cell:>width$} |"));
    }
    out.push('\n');
}
