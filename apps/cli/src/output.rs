use converter::{render_table, ConversionSnapshot};
use shared::{DomainError, ErrorReport};

use crate::config::OutputFormat;

pub fn render_snapshot(
    snapshot: &ConversionSnapshot,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(format!(
            "decimal: {}\nbinary:  {}\n{}",
            snapshot.decimal,
            snapshot.binary,
            render_table(&snapshot.bits)
        )),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(&snapshot.report())?)),
    }
}

pub fn render_error(err: &DomainError, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(format!("error: {err}\n")),
        OutputFormat::Json => Ok(format!(
            "{}\n",
            serde_json::to_string(&ErrorReport::from(err))?
        )),
    }
}

#[cfg(test)]
mod tests {
    use shared::Base;

    use super::*;

    #[test]
    fn table_output_lists_fields_then_cells() {
        let snapshot = ConversionSnapshot::from_binary("1010");
        let text = render_snapshot(&snapshot, OutputFormat::Table).expect("render");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "decimal: 10");
        assert_eq!(lines[1], "binary:  1010");
        assert_eq!(lines[2], "| 128 |  64 |  32 |  16 |   8 |   4 |   2 |   1 |");
        assert_eq!(lines[3], "|   0 |   0 |   0 |   0 |   1 |   0 |   1 |   0 |");
    }

    #[test]
    fn json_output_is_one_line() {
        let snapshot = ConversionSnapshot::from_decimal("3");
        let text = render_snapshot(&snapshot, OutputFormat::Json).expect("render");
        assert_eq!(text.lines().count(), 1);
        let json: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(json["binary"], "00000011");
        assert_eq!(json["value"], "3");
    }

    #[test]
    fn json_error_carries_code() {
        let err = DomainError::InvalidDigit {
            base: Base::Decimal,
            ch: '-',
            position: 0,
        };
        let text = render_error(&err, OutputFormat::Json).expect("render");
        let json: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(json["code"], "invalid_digit");
    }
}
