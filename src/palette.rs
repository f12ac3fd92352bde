//! Category -> colour tokens. Total over any tag: unknown tags get the neutral fallback.

use crate::model::Category;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Cell border and legend swatch.
    pub accent: &'static str,
    /// Translucent cell background.
    pub tint: &'static str,
    /// Solid fill for the detail header tile.
    pub badge: &'static str,
}

pub const FALLBACK_STYLE: CategoryStyle = CategoryStyle {
    accent: "#90a4ae",
    tint: "rgba(144,164,174,0.10)",
    badge: "#90a4ae",
};

pub fn style_for(category: Category) -> CategoryStyle {
    match category {
        Category::Nonmetal => CategoryStyle {
            accent: "#a3e635",
            tint: "rgba(163,230,53,0.10)",
            badge: "#7986cb",
        },
        Category::NobleGas => CategoryStyle {
            accent: "#3b82f6",
            tint: "rgba(59,130,246,0.10)",
            badge: "#f06292",
        },
        Category::AlkaliMetal => CategoryStyle {
            accent: "#ea580c",
            tint: "rgba(234,88,12,0.10)",
            badge: "#ff8a65",
        },
        Category::AlkalineEarthMetal => CategoryStyle {
            accent: "#fbbf24",
            tint: "rgba(251,191,36,0.10)",
            badge: "#ffb74d",
        },
        Category::Metalloid => CategoryStyle {
            accent: "#06b6d4",
            tint: "rgba(6,182,212,0.10)",
            badge: "#4fc3f7",
        },
        Category::PostTransitionMetal => CategoryStyle {
            accent: "#92400e",
            tint: "rgba(146,64,14,0.10)",
            badge: "#aed581",
        },
        Category::TransitionMetal => CategoryStyle {
            accent: "#ec4899",
            tint: "rgba(236,72,153,0.10)",
            badge: "#ffd54f",
        },
        Category::Lanthanide => CategoryStyle {
            accent: "#a855f7",
            tint: "rgba(168,85,247,0.10)",
            badge: "#4dd0e1",
        },
        Category::Actinide => CategoryStyle {
            accent: "#d8b4fe",
            tint: "rgba(216,180,254,0.10)",
            badge: "#9575cd",
        },
        Category::Halogen => CategoryStyle {
            accent: "#4ade80",
            tint: "rgba(74,222,128,0.10)",
            badge: "#ba68c8",
        },
    }
}

/// Style for a raw category tag such as `"noble-gas"`.
pub fn color_for(tag: &str) -> CategoryStyle {
    match Category::parse(tag) {
        Some(category) => style_for(category),
        None => {
            log::debug!("no style for category {tag:?}, using fallback");
            FALLBACK_STYLE
        }
    }
}

impl Category {
    pub fn style(self) -> CategoryStyle {
        style_for(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tag_degrades_to_fallback() {
        assert_eq!(color_for("unobtanium"), FALLBACK_STYLE);
        assert_eq!(color_for(""), FALLBACK_STYLE);
        assert_eq!(color_for("Noble Gas"), FALLBACK_STYLE);
    }

    #[test]
    fn known_tags_resolve_to_their_category() {
        for c in Category::ALL {
            assert_eq!(color_for(c.tag()), c.style());
            assert_ne!(c.style(), FALLBACK_STYLE);
        }
    }

    #[test]
    fn accents_are_distinct() {
        let mut seen: Vec<&str> = Category::ALL.iter().map(|c| c.style().accent).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), Category::ALL.len());
    }
}
