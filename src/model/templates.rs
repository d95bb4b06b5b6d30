//! Built-in layouts that replace the active configuration wholesale.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

use super::core::{GridConfiguration, GridItem};
use super::units::{ContentAlignment, GapUnit, ItemAlignment, TrackUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Basic3Col,
    HolyGrail,
    Dashboard,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Basic3Col, Template::HolyGrail, Template::Dashboard];

    pub fn key(self) -> &'static str {
        match self {
            Self::Basic3Col => "basic-3col",
            Self::HolyGrail => "holy-grail",
            Self::Dashboard => "dashboard",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Basic3Col => "Basic 3-Column Layout",
            Self::HolyGrail => "Holy Grail Layout",
            Self::Dashboard => "Dashboard Layout",
        }
    }

    /// Fresh copy of the template's configuration.
    pub fn configuration(self) -> GridConfiguration {
        let (columns, rows, justify_content, items) = match self {
            Self::Basic3Col => (
                3,
                3,
                ContentAlignment::Start,
                vec![
                    area("header", (1, 1), (4, 2), "#f0f4f8"),
                    area("sidebar", (1, 2), (2, 3), "#d1e3fa"),
                    area("main", (2, 2), (4, 3), "#e6f0ff"),
                    area("footer", (1, 3), (4, 4), "#f0f4f8"),
                ],
            ),
            Self::HolyGrail => (
                5,
                5,
                ContentAlignment::SpaceBetween,
                vec![
                    area("header", (1, 1), (6, 2), "#f0f4f8"),
                    area("left-sidebar", (1, 2), (2, 5), "#d1e3fa"),
                    area("content", (2, 2), (5, 5), "#e6f0ff"),
                    area("right-sidebar", (5, 2), (6, 5), "#d1e3fa"),
                    area("footer", (1, 5), (6, 6), "#f0f4f8"),
                ],
            ),
            Self::Dashboard => (
                4,
                4,
                ContentAlignment::Start,
                vec![
                    area("header", (1, 1), (5, 2), "#f0f4f8"),
                    area("sidebar", (1, 2), (2, 5), "#d1e3fa"),
                    area("main-chart", (2, 2), (4, 4), "#e6f0ff"),
                    area("stats-1", (4, 2), (5, 3), "#c7d8ed"),
                    area("stats-2", (4, 3), (5, 4), "#c7d8ed"),
                    area("bottom-panel", (2, 4), (5, 5), "#d9e6f7"),
                ],
            ),
        };

        let mut config = GridConfiguration {
            columns,
            rows,
            gap: 16.0,
            gap_unit: GapUnit::Px,
            column_unit: TrackUnit::Fr,
            row_unit: TrackUnit::Auto,
            items,
            justify_items: ItemAlignment::Stretch,
            align_items: ItemAlignment::Stretch,
            justify_content,
            align_content: ContentAlignment::Start,
            next_item_number: 0,
        };
        config.reconcile_item_counter();
        config
    }
}

fn area(name: &str, start: (i32, i32), end: (i32, i32), color: &str) -> GridItem {
    GridItem::new(name, name, start, end).with_background(color)
}

impl FromStr for Template {
    type Err = GridError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|template| template.key() == key)
            .ok_or_else(|| GridError::UnknownTemplate(key.to_string()))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
