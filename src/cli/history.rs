use super::output::DISPLAY_TIME_FORMAT;
use super::ui::{self, StyleType};
use crate::core::ConversionRecord;
use crate::store::HistoryStore;
use anyhow::Result;
use comfy_table::Cell;
use std::io::Write;

/// Renders records most recent first, followed by the record count.
pub fn display_as_table(records: &[ConversionRecord]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Time"),
        ui::header_cell("Amount"),
        ui::header_cell("Result"),
        ui::header_cell("Rate"),
    ]);

    for record in records.iter().rev() {
        table.add_row(vec![
            Cell::new(record.timestamp.format(DISPLAY_TIME_FORMAT)),
            ui::number_cell(format!("{:.2} {}", record.amount, record.from_currency)),
            ui::number_cell(format!("{:.2} {}", record.result, record.to_currency)),
            ui::number_cell(format!(
                "1 {} = {:.4} {}",
                record.from_currency, record.exchange_rate, record.to_currency
            )),
        ]);
    }

    let mut output = format!(
        "{}\n\n",
        ui::banner("CONVERSION HISTORY")
    );
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{}",
        ui::style_text(
            &format!("Total records: {}", records.len()),
            StyleType::Frame
        )
    ));
    output
}

pub fn run<W: Write>(history: &HistoryStore, out: &mut W) -> Result<()> {
    let records = history.records();
    if records.is_empty() {
        writeln!(
            out,
            "{}",
            ui::style_text("Conversion history is empty", StyleType::Warning)
        )?;
        return Ok(());
    }

    writeln!(out, "{}", display_as_table(&records))?;
    Ok(())
}
