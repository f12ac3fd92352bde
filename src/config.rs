//! Page-shell configuration: title, footer links, table geometry and scroll tuning.
//!
//! Defaults cover everything; a page can override any subset with a JSON block
//! `<script type="application/json" id="shell-config">` in `index.html`.

use serde::Deserialize;
use std::ops::RangeInclusive;

pub const CONFIG_ELEMENT_ID: &str = "shell-config";

const DEFAULT_CELL_PX: u32 = 70;
const DEFAULT_TOOLTIP_HALF_WIDTH: f64 = 100.0;
/// Accepted grid track sizes; anything outside falls back to the default.
pub const CELL_PX_RANGE: RangeInclusive<u32> = 40..=200;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkIcon {
    GitHub,
    LinkedIn,
    Website,
}

impl LinkIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            LinkIcon::GitHub => "\u{2387}",
            LinkIcon::LinkedIn => "in",
            LinkIcon::Website => "\u{2197}",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterLink {
    pub title: String,
    pub href: String,
    pub icon: LinkIcon,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub enabled: bool,
    /// Seconds to ease from the current position to the wheel target.
    pub duration: f64,
    /// Pixels scrolled per pixel of wheel delta.
    pub wheel_multiplier: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: 1.2,
            wheel_multiplier: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub title: String,
    pub author_name: String,
    pub author_url: String,
    pub links: Vec<FooterLink>,
    /// Grid track size for one element cell.
    pub cell_px: u32,
    /// Tooltip centre is kept at least this far from either viewport edge.
    pub tooltip_half_width: f64,
    pub show_welcome: bool,
    pub scroll: ScrollConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Interactive Periodic Table".to_string(),
            author_name: "Ishaan2053".to_string(),
            author_url: "https://www.ishaan2053.tech/".to_string(),
            links: vec![
                FooterLink {
                    title: "GitHub".to_string(),
                    href: "#".to_string(),
                    icon: LinkIcon::GitHub,
                },
                FooterLink {
                    title: "LinkedIn".to_string(),
                    href: "#".to_string(),
                    icon: LinkIcon::LinkedIn,
                },
            ],
            cell_px: DEFAULT_CELL_PX,
            tooltip_half_width: DEFAULT_TOOLTIP_HALF_WIDTH,
            show_welcome: true,
            scroll: ScrollConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Parses an override document. Out-of-range geometry is replaced by the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json)?;
        config.sanitize();
        Ok(config)
    }

    fn sanitize(&mut self) {
        if !CELL_PX_RANGE.contains(&self.cell_px) {
            log::warn!(
                "cell_px {} outside {:?}, using {DEFAULT_CELL_PX}",
                self.cell_px,
                CELL_PX_RANGE
            );
            self.cell_px = DEFAULT_CELL_PX;
        }
        if !(self.tooltip_half_width.is_finite() && self.tooltip_half_width >= 0.0) {
            log::warn!(
                "tooltip_half_width {} is not a usable width, using {DEFAULT_TOOLTIP_HALF_WIDTH}",
                self.tooltip_half_width
            );
            self.tooltip_half_width = DEFAULT_TOOLTIP_HALF_WIDTH;
        }
    }

    /// Reads the override block from the host page, falling back to defaults.
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = ShellConfig::from_json("{}").unwrap();
        assert_eq!(cfg, ShellConfig::default());
        assert_eq!(cfg.scroll.duration, 1.2);
        assert_eq!(cfg.links.len(), 2);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = ShellConfig::from_json(
            r##"{
                "title": "Elements",
                "scroll": { "enabled": false },
                "links": [{ "title": "Site", "href": "https://example.org", "icon": "website" }]
            }"##,
        )
        .unwrap();
        assert_eq!(cfg.title, "Elements");
        assert!(!cfg.scroll.enabled);
        assert_eq!(cfg.scroll.duration, 1.2);
        assert_eq!(cfg.links[0].icon, LinkIcon::Website);
        assert_eq!(cfg.cell_px, 70);
    }

    #[test]
    fn extreme_cell_sizes_fall_back_to_default() {
        for px in [0, 39, 201, 300_000_000] {
            let cfg = ShellConfig::from_json(&format!(r#"{{ "cell_px": {px} }}"#)).unwrap();
            assert_eq!(cfg.cell_px, 70, "cell_px {px}");
        }
        for px in [40, 96, 200] {
            let cfg = ShellConfig::from_json(&format!(r#"{{ "cell_px": {px} }}"#)).unwrap();
            assert_eq!(cfg.cell_px, px);
        }
    }

    #[test]
    fn negative_tooltip_width_falls_back_to_default() {
        let cfg = ShellConfig::from_json(r#"{ "tooltip_half_width": -5.0 }"#).unwrap();
        assert_eq!(cfg.tooltip_half_width, 100.0);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(ShellConfig::from_json("{ \"cell_px\": \"wide\" }").is_err());
        assert!(ShellConfig::from_json("not json").is_err());
    }
}
