//! View renderer
//!
//! Maps the active selection onto a display tree. The tree carries the
//! dataset values unmodified; painting it onto a terminal is the job of
//! `crate::ui`.

use crate::app::Tab;
use crate::domain::{Dataset, FeatureList};

/// Display tree for one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBlock {
    Overview(OverviewBlock),
    Trims(TrimsBlock),
    Bars(ChartBlock),
    Radar(RadarBlock),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewBlock {
    pub title: &'static str,
    pub specs: Vec<(&'static str, &'static str)>,
    pub lists: Vec<FeatureList>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimsBlock {
    pub title: &'static str,
    pub cards: Vec<TrimCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimCard {
    pub heading: String,
    pub features: Vec<&'static str>,
}

/// One labelled value on a chart axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub label: &'static str,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBlock {
    pub title: &'static str,
    pub series: &'static str,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarBlock {
    pub title: String,
    pub series: &'static str,
    /// Upper bound of the radial axis; the lower bound is always zero.
    pub max: u64,
    pub axes: Vec<Category>,
}

impl ViewBlock {
    pub fn title(&self) -> &str {
        match self {
            ViewBlock::Overview(block) => block.title,
            ViewBlock::Trims(block) => block.title,
            ViewBlock::Bars(block) => block.title,
            ViewBlock::Radar(block) => &block.title,
        }
    }

    /// Plain-text rendition used for `--print` and clipboard copies
    pub fn plain_lines(&self) -> Vec<String> {
        let mut lines = vec![self.title().to_string()];
        match self {
            ViewBlock::Overview(block) => {
                lines.extend(
                    block
                        .specs
                        .iter()
                        .map(|(label, value)| format!("  {label}: {value}")),
                );
                for list in &block.lists {
                    lines.push(String::new());
                    lines.push(list.title.to_string());
                    lines.extend(list.items.iter().map(|item| format!("  • {item}")));
                }
            }
            ViewBlock::Trims(block) => {
                for card in &block.cards {
                    lines.push(String::new());
                    lines.push(card.heading.clone());
                    lines.extend(card.features.iter().map(|f| format!("  • {f}")));
                }
            }
            ViewBlock::Bars(block) => {
                lines.push(format!("Series: {}", block.series));
                lines.extend(
                    block
                        .categories
                        .iter()
                        .map(|c| format!("  {}: {}", c.label, c.value)),
                );
            }
            ViewBlock::Radar(block) => {
                lines.push(format!("Series: {} (0-{})", block.series, block.max));
                lines.extend(
                    block
                        .axes
                        .iter()
                        .map(|c| format!("  {}: {}", c.label, c.value)),
                );
            }
        }
        lines
    }
}

/// Select the block for `selection`. Unrecognized selections yield `None`.
pub fn render_view(selection: &str, data: &Dataset) -> Option<ViewBlock> {
    let tab = Tab::from_key(selection)?;
    Some(render_tab(tab, data))
}

pub fn render_tab(tab: Tab, data: &Dataset) -> ViewBlock {
    match tab {
        Tab::Overview => ViewBlock::Overview(OverviewBlock {
            title: "Specifications",
            specs: data.specs.iter().map(|s| (s.label, s.value)).collect(),
            lists: data.feature_lists.to_vec(),
        }),
        Tab::Trims => ViewBlock::Trims(TrimsBlock {
            title: "Trim Levels and Pricing",
            cards: data
                .trims
                .iter()
                .map(|trim| TrimCard {
                    heading: trim.heading(),
                    features: trim.features.to_vec(),
                })
                .collect(),
        }),
        Tab::CargoSpace => ViewBlock::Bars(ChartBlock {
            title: "Cargo Space",
            series: "Cubic Feet",
            categories: data
                .cargo
                .iter()
                .map(|c| Category {
                    label: c.configuration,
                    value: c.space,
                })
                .collect(),
        }),
        Tab::Ratings => ViewBlock::Radar(RadarBlock {
            title: format!("{} Ratings", data.short_name()),
            series: data.short_name(),
            max: 100,
            axes: data
                .ratings
                .iter()
                .map(|r| Category {
                    label: r.feature,
                    value: u64::from(r.value),
                })
                .collect(),
        }),
    }
}
