//! Inline styles for the live preview surface.
//!
//! The preview always sizes tracks as `1fr` / `auto` regardless of the unit
//! tags, and the mobile view stacks every item in a single column.

use crate::areas::AreaMatrix;
use crate::model::{GridConfiguration, GridItem};

use super::css::gap_value;
use super::options::GeneratorOptions;

/// Ordered `(property, value)` pairs.
pub type Declarations = Vec<(&'static str, String)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl ViewMode {
    /// Maximum width of the preview frame in pixels.
    pub fn frame_width(self) -> u32 {
        match self {
            Self::Desktop => 896,
            Self::Tablet => 768,
            Self::Mobile => 375,
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

pub fn preview_container_style(
    config: &GridConfiguration,
    options: &GeneratorOptions,
    view: ViewMode,
) -> Declarations {
    let gap = gap_value(config);
    let (columns, rows) = if view.is_mobile() {
        ("1fr".to_string(), format!("repeat({}, auto)", config.items.len()))
    } else {
        (
            format!("repeat({}, 1fr)", config.columns),
            format!("repeat({}, auto)", config.rows),
        )
    };

    let mut declarations = vec![
        ("display", "grid".to_string()),
        ("grid-template-columns", columns),
        ("grid-template-rows", rows),
        ("gap", gap.clone()),
        ("padding", gap),
        ("justify-items", config.justify_items.to_string()),
        ("align-items", config.align_items.to_string()),
        ("justify-content", config.justify_content.to_string()),
        ("align-content", config.align_content.to_string()),
    ];
    if options.named_areas && !view.is_mobile() {
        declarations.push(("grid-template-areas", AreaMatrix::rasterize(config).to_inline()));
    }
    declarations
}

pub fn preview_item_style(
    item: &GridItem,
    options: &GeneratorOptions,
    view: ViewMode,
) -> Declarations {
    let mut declarations = vec![("background-color", item.resolved_background().to_string())];
    if view.is_mobile() {
        declarations.push(("grid-column", "1 / -1".to_string()));
    } else if options.named_areas {
        declarations.push(("grid-area", item.display_name().to_string()));
    } else {
        declarations.push(("grid-column", format!("{} / {}", item.start_col, item.end_col)));
        declarations.push(("grid-row", format!("{} / {}", item.start_row, item.end_row)));
    }
    declarations
}

/// Join declarations into a `style` attribute value.
pub fn inline_style(declarations: &[(&'static str, String)]) -> String {
    declarations
        .iter()
        .map(|(property, value)| format!("{property}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Template;

    fn lookup<'a>(declarations: &'a Declarations, property: &str) -> Option<&'a str> {
        declarations
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn desktop_uses_flat_area_template() {
        let config = GridConfiguration {
            columns: 2,
            rows: 1,
            ..GridConfiguration::default()
        };
        let options = GeneratorOptions::default();
        let style = preview_container_style(&config, &options, ViewMode::Desktop);
        assert_eq!(lookup(&style, "grid-template-columns"), Some("repeat(2, 1fr)"));
        assert_eq!(lookup(&style, "grid-template-areas"), Some("\"item1 .\""));
        assert_eq!(lookup(&style, "padding"), Some("16px"));
    }

    #[test]
    fn mobile_stacks_items() {
        let config = Template::Dashboard.configuration();
        let options = GeneratorOptions::default();
        let style = preview_container_style(&config, &options, ViewMode::Mobile);
        assert_eq!(lookup(&style, "grid-template-columns"), Some("1fr"));
        assert_eq!(lookup(&style, "grid-template-rows"), Some("repeat(6, auto)"));
        assert!(lookup(&style, "grid-template-areas").is_none());

        let item = preview_item_style(&config.items[2], &options, ViewMode::Mobile);
        assert_eq!(lookup(&item, "grid-column"), Some("1 / -1"));
        assert!(lookup(&item, "grid-area").is_none());
    }

    #[test]
    fn item_placement_follows_area_toggle() {
        let config = GridConfiguration::default();
        let item = &config.items[0];
        let named = preview_item_style(item, &GeneratorOptions::default(), ViewMode::Tablet);
        assert_eq!(lookup(&named, "grid-area"), Some("item1"));
        assert_eq!(lookup(&named, "background-color"), Some("#f0f4f8"));

        let options = GeneratorOptions::default().with_named_areas(false);
        let lines = preview_item_style(item, &options, ViewMode::Desktop);
        assert_eq!(
            inline_style(&lines),
            "background-color: #f0f4f8; grid-column: 1 / 2; grid-row: 1 / 2"
        );
    }

    #[test]
    fn frame_widths() {
        assert_eq!(ViewMode::Tablet.frame_width(), 768);
        assert_eq!(ViewMode::Mobile.frame_width(), 375);
    }
}
