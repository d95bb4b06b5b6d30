//! Markup rendering: one container element, one child per item.

use crate::model::GridConfiguration;

use super::css::CONTAINER_CLASS;

/// Render the markup skeleton for `config`.
///
/// Children follow item order and carry a placeholder comment instead of content.
pub fn generate_html(config: &GridConfiguration) -> String {
    let mut html = format!("<div class=\"{CONTAINER_CLASS}\">\n");
    for item in &config.items {
        let class = item.display_name();
        html.push_str(&format!(
            "  <div class=\"{class}\">\n    <!-- Content for {class} -->\n  </div>\n"
        ));
    }
    html.push_str("</div>");
    html
}
