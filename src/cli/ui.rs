use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Banner,
    Frame,
    Result,
    Rate,
    Error,
    Warning,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Banner => style(text).green().bold(),
        StyleType::Frame => style(text).yellow().bold(),
        StyleType::Result => style(text).green(),
        StyleType::Rate => style(text).cyan(),
        StyleType::Error => style(text).red(),
        StyleType::Warning => style(text).yellow(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Boxed program title printed before text-mode output.
pub fn banner(title: &str) -> String {
    const WIDTH: usize = 40;
    let line = "═".repeat(WIDTH);
    [
        format!("╔{line}╗"),
        format!("║{title:^WIDTH$}║"),
        format!("╚{line}╝"),
    ]
    .iter()
    .map(|row| style_text(row, StyleType::Banner))
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn usage(program: &str) -> String {
    style_text(
        &format!(
            "Usage: {program} [--json|--csv] <FROM> <TO1[,TO2,...]> <AMOUNT>\n   or: {program} --history"
        ),
        StyleType::Error,
    )
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Creates a right aligned cell for numeric values.
pub fn number_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Creates a spinner shown on stderr while a request is in flight.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
