//! Tab bar rendering and hit testing

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Tabs;
use ratatui::Frame;

use crate::app::{App, Tab};

const DIVIDER: &str = " │ ";
const PADDING: &str = " ";

fn tab_title(tab: Tab) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}:", tab.shortcut()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(tab.title()),
    ])
}

/// Draw the tab bar into the inner row of the header
pub fn draw_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|tab| tab_title(*tab)).collect();

    // An unrecognized selection highlights nothing
    let selected = app
        .active_tab()
        .and_then(|active| Tab::ALL.iter().position(|t| *t == active))
        .unwrap_or(Tab::ALL.len());

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(app.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .padding(PADDING, PADDING)
        .divider(DIVIDER);

    f.render_widget(tabs, area);
}

/// Screen columns covered by each tab title, following the same padding and
/// divider rules the `Tabs` widget uses when drawing.
pub fn tab_hit_areas(area: Rect) -> Vec<(Tab, Rect)> {
    let pad = PADDING.chars().count() as u16;
    let divider = Span::raw(DIVIDER).width() as u16;
    let right = area.x.saturating_add(area.width);

    let mut x = area.x;
    let mut hits = Vec::with_capacity(Tab::ALL.len());
    for tab in Tab::ALL {
        if x >= right {
            break;
        }
        let width = pad + tab_title(tab).width() as u16 + pad;
        let width = width.min(right - x);
        hits.push((
            tab,
            Rect {
                x,
                y: area.y,
                width,
                height: area.height.min(1),
            },
        ));
        x = x.saturating_add(width).saturating_add(divider);
    }
    hits
}

/// Tab under the given screen cell, if any
pub fn tab_at(area: Rect, col: u16, row: u16) -> Option<Tab> {
    tab_hit_areas(area)
        .into_iter()
        .find(|(_, rect)| super::layout::rect_contains(*rect, col, row))
        .map(|(tab, _)| tab)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_areas_follow_titles() {
        let hits = tab_hit_areas(Rect::new(1, 1, 80, 1));
        // " 1:Overview " then " │ "
        assert_eq!(hits[0], (Tab::Overview, Rect::new(1, 1, 12, 1)));
        assert_eq!(hits[1], (Tab::Trims, Rect::new(16, 1, 9, 1)));
        assert_eq!(hits[2].0, Tab::CargoSpace);
        assert_eq!(hits[2].1.x, 28);
        assert_eq!(hits.len(), 4);
    }

    #[test]
    fn test_tab_at() {
        let area = Rect::new(1, 1, 80, 1);
        assert_eq!(tab_at(area, 3, 1), Some(Tab::Overview));
        assert_eq!(tab_at(area, 14, 1), None); // divider
        assert_eq!(tab_at(area, 20, 1), Some(Tab::Trims));
        assert_eq!(tab_at(area, 30, 1), Some(Tab::CargoSpace));
        assert_eq!(tab_at(area, 20, 2), None);
    }

    #[test]
    fn test_narrow_area_truncates() {
        let hits = tab_hit_areas(Rect::new(0, 0, 10, 1));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1.width, 10);
    }
}
