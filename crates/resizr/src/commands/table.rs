use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color as CellColor, ContentArrangement, Table};

use resizr_core::theme::Color;
use resizr_core::{Desktop, Theme, WindowEntry};

fn color(hex: &str) -> CellColor {
    Color::from_hex(hex)
        .map(|c| CellColor::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        })
        .unwrap_or(CellColor::Reset)
}

/// Builds the window list table, colored for `theme`.
///
/// Width and height are read live; a window that vanished since
/// enumeration shows `-` in the error color.
pub fn windows(entries: &[WindowEntry], desktop: &dyn Desktop, theme: Theme) -> Table {
    let header = color(theme.header());
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("HWND").fg(header),
            Cell::new("Title").fg(header),
            Cell::new("Process").fg(header),
            Cell::new("PID").fg(header).set_alignment(CellAlignment::Right),
            Cell::new("Width").fg(header).set_alignment(CellAlignment::Right),
            Cell::new("Height").fg(header).set_alignment(CellAlignment::Right),
        ]);

    let muted = color(theme.muted());
    let accent = color(theme.accent());
    let failed = color(theme.error());
    for entry in entries {
        let (width, height) = match desktop.rect(entry.handle) {
            Ok(rect) => (Cell::new(rect.width), Cell::new(rect.height)),
            Err(_) => (Cell::new("-").fg(failed), Cell::new("-").fg(failed)),
        };

        table.add_row(vec![
            Cell::new(entry.handle).fg(muted),
            Cell::new(&entry.title),
            Cell::new(&entry.process_name).fg(accent),
            Cell::new(entry.pid)
                .fg(muted)
                .set_alignment(CellAlignment::Right),
            width.set_alignment(CellAlignment::Right),
            height.set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
