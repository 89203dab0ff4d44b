//! UI layer for the converter window: app shell and the bit table widget.

pub mod app;
pub mod bit_table;

pub use app::ConverterApp;
