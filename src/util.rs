// Logging setup and small display helpers shared by the surfaces.

use log::Level;

/// Routes `log` records and panics to the browser console. Safe to call twice.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("logger already installed: {err}");
    }
}

/// `"N/A"` for missing measurements, otherwise the value with its unit.
pub fn format_quantity(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if unit.is_empty() => format!("{v}"),
        Some(v) => format!("{v} {unit}"),
        None => "N/A".to_string(),
    }
}

pub fn wiki_url(title: &str) -> String {
    format!("https://en.wikipedia.org/wiki/{}", title.trim().replace(' ', "_"))
}

/// Top edge for a tooltip shown below grid row `ypos`.
pub fn tooltip_top(ypos: u32, cell_px: u32) -> f64 {
    f64::from(ypos) * f64::from(cell_px) + 30.0
}

/// Left edge for a tooltip centred over grid column `xpos`, kept inside the viewport.
pub fn tooltip_left(xpos: u32, cell_px: u32, half_width: f64, viewport_width: f64) -> f64 {
    let anchor = f64::from(xpos) * f64::from(cell_px);
    anchor.max(half_width).min(viewport_width - half_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantities() {
        assert_eq!(format_quantity(Some(2.2), ""), "2.2");
        assert_eq!(format_quantity(Some(53.0), "pm"), "53 pm");
        assert_eq!(format_quantity(Some(0.00008988), "g/cm³"), "0.00008988 g/cm³");
        assert_eq!(format_quantity(None, "K"), "N/A");
    }

    #[test]
    fn wiki_links_use_underscores() {
        assert_eq!(wiki_url("Hydrogen"), "https://en.wikipedia.org/wiki/Hydrogen");
        assert_eq!(wiki_url(" Henry Cavendish"), "https://en.wikipedia.org/wiki/Henry_Cavendish");
    }

    #[test]
    fn tooltip_stays_on_screen() {
        assert_eq!(tooltip_left(1, 70, 100.0, 1400.0), 100.0);
        assert_eq!(tooltip_left(10, 70, 100.0, 1400.0), 700.0);
        assert_eq!(tooltip_left(18, 70, 100.0, 1200.0), 1100.0);
    }

    #[test]
    fn oversized_cells_do_not_overflow() {
        assert_eq!(tooltip_left(18, 300_000_000, 100.0, 1280.0), 1180.0);
        assert_eq!(tooltip_top(10, u32::MAX), 10.0 * f64::from(u32::MAX) + 30.0);
        assert_eq!(tooltip_top(2, 70), 170.0);
    }
}
