//! Stylesheet rendering.
//!
//! Container properties come in a fixed order. Alignment properties are
//! emitted only when they differ from their defaults. When named areas are on,
//! the area template is the last container property.

use crate::areas::AreaMatrix;
use crate::model::{ContentAlignment, GridConfiguration, GridItem, ItemAlignment, TrackUnit};

use super::options::{CssFormat, GeneratorOptions, RESPONSIVE_MAX_WIDTH_PX};

pub(crate) const CONTAINER_CLASS: &str = "grid-container";

type Declaration = (&'static str, String);

/// `grid-template-columns` value, e.g. `repeat(5, 1fr)`.
pub fn column_template(config: &GridConfiguration) -> String {
    format!("repeat({}, {})", config.columns, resolve_track(&config.column_unit))
}

/// `grid-template-rows` value, e.g. `repeat(5, auto)`.
pub fn row_template(config: &GridConfiguration) -> String {
    format!("repeat({}, {})", config.rows, resolve_track(&config.row_unit))
}

fn resolve_track(unit: &TrackUnit) -> &str {
    match unit {
        TrackUnit::Fr => "1fr",
        TrackUnit::Auto => "auto",
        other => other.as_str(),
    }
}

pub(crate) fn gap_value(config: &GridConfiguration) -> String {
    format!("{}{}", config.gap, config.gap_unit)
}

fn container_declarations(
    config: &GridConfiguration,
    options: &GeneratorOptions,
) -> Vec<Declaration> {
    let mut declarations = vec![
        ("display", "grid".to_string()),
        ("grid-template-columns", column_template(config)),
        ("grid-template-rows", row_template(config)),
        ("gap", gap_value(config)),
    ];

    if config.justify_items != ItemAlignment::Stretch {
        declarations.push(("justify-items", config.justify_items.to_string()));
    }
    if config.align_items != ItemAlignment::Stretch {
        declarations.push(("align-items", config.align_items.to_string()));
    }
    if config.justify_content != ContentAlignment::Start {
        declarations.push(("justify-content", config.justify_content.to_string()));
    }
    if config.align_content != ContentAlignment::Start {
        declarations.push(("align-content", config.align_content.to_string()));
    }

    if options.named_areas {
        let template = AreaMatrix::rasterize(config).to_template();
        declarations.push(("grid-template-areas", format!("\n    {template}")));
    }

    declarations
}

fn item_declarations(item: &GridItem, options: &GeneratorOptions) -> Vec<Declaration> {
    if options.named_areas {
        vec![("grid-area", item.display_name().to_string())]
    } else {
        vec![
            ("grid-column", format!("{} / {}", item.start_col, item.end_col)),
            ("grid-row", format!("{} / {}", item.start_row, item.end_row)),
        ]
    }
}

fn write_rule(out: &mut String, indent: usize, selector: &str, declarations: &[Declaration]) {
    let pad = " ".repeat(indent);
    out.push_str(&format!("{pad}{selector} {{\n"));
    write_declarations(out, indent + 2, declarations);
    out.push_str(&format!("{pad}}}\n"));
}

fn write_declarations(out: &mut String, indent: usize, declarations: &[Declaration]) {
    let pad = " ".repeat(indent);
    for (property, value) in declarations {
        // Multi-line values start on the next line.
        let sep = if value.starts_with('\n') { "" } else { " " };
        out.push_str(&format!("{pad}{property}:{sep}{value};\n"));
    }
}

/// Render the stylesheet for `config`.
pub fn generate_css(config: &GridConfiguration, options: &GeneratorOptions) -> String {
    let mut css = String::new();
    let container = format!(".{CONTAINER_CLASS}");
    let container_body = container_declarations(config, options);

    match options.format {
        CssFormat::Standard => {
            write_rule(&mut css, 0, &container, &container_body);
            css.push('\n');
            for item in &config.items {
                let selector = format!(".{}", item.display_name());
                write_rule(&mut css, 0, &selector, &item_declarations(item, options));
                css.push('\n');
            }
        }
        CssFormat::Scss => {
            css.push_str(&format!("{container} {{\n"));
            write_declarations(&mut css, 2, &container_body);
            for item in &config.items {
                css.push('\n');
                let selector = format!("& > .{}", item.display_name());
                write_rule(&mut css, 2, &selector, &item_declarations(item, options));
            }
            css.push_str("}\n\n");
        }
    }

    if !options.breakpoint.is_base() {
        write_responsive_block(&mut css, config);
    }

    css
}

fn write_responsive_block(css: &mut String, config: &GridConfiguration) {
    css.push_str("/* Responsive layout */\n");
    css.push_str(&format!("@media (max-width: {RESPONSIVE_MAX_WIDTH_PX}px) {{\n"));
    write_rule(
        css,
        2,
        &format!(".{CONTAINER_CLASS}"),
        &[
            ("grid-template-columns", "1fr".to_string()),
            ("grid-template-areas", "none".to_string()),
        ],
    );
    css.push('\n');
    for item in &config.items {
        write_rule(
            css,
            2,
            &format!(".{}", item.display_name()),
            &[("grid-column", "1 / -1".to_string())],
        );
        css.push('\n');
    }
    css.push_str("}\n");
}
