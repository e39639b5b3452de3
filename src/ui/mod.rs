use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod tabs;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel};
use crate::modules::views::{ChartBlock, OverviewBlock, RadarBlock, TrimsBlock, ViewBlock};
use widgets::RadarChart;

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    tabs::draw_tab_bar(f, areas.tabs, app);

    match app.current_view() {
        Some(ViewBlock::Overview(block)) => draw_overview(f, areas.body, &block, app),
        Some(ViewBlock::Trims(block)) => draw_trims(f, areas.body, &block, app),
        Some(ViewBlock::Bars(chart)) => draw_bar_chart(f, areas.body, &chart, app),
        Some(ViewBlock::Radar(radar)) => draw_radar(f, areas.body, &radar, app),
        None => draw_unknown_view(f, areas.body, app),
    }

    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let title = Span::styled(
        format!(" {} Dashboard ", app.data.model),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);
    f.render_widget(block, area);
}

fn section_block(title: &str, app: &App) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(app.accent).add_modifier(Modifier::BOLD),
        ))
}

fn draw_overview(f: &mut Frame, area: Rect, block: &OverviewBlock, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(block.specs.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    let lines: Vec<Line> = block
        .specs
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled("⚙ ", Style::default().fg(app.accent)),
                Span::styled(
                    format!("{label}: "),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(*value),
            ])
        })
        .collect();
    let specs = Paragraph::new(lines).block(section_block(block.title, app));
    f.render_widget(specs, chunks[0]);

    if block.lists.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = block
        .lists
        .iter()
        .map(|_| Constraint::Ratio(1, block.lists.len() as u32))
        .collect();
    let list_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(chunks[1]);
    for (list, area) in block.lists.iter().zip(list_chunks.iter()) {
        let lines: Vec<Line> = list
            .items
            .iter()
            .map(|item| Line::from(format!("• {item}")))
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(section_block(list.title, app))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, *area);
    }
}

fn draw_trims(f: &mut Frame, area: Rect, block: &TrimsBlock, app: &App) {
    let mut lines = Vec::new();
    for (i, card) in block.cards.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            card.heading.clone(),
            Style::default().fg(app.accent).add_modifier(Modifier::BOLD),
        )));
        lines.extend(
            card.features
                .iter()
                .map(|feature| Line::from(format!("  • {feature}"))),
        );
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(section_block(block.title, app))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_bar_chart(f: &mut Frame, area: Rect, chart: &ChartBlock, app: &App) {
    let outer = section_block(chart.title, app);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let count = chart.categories.len().max(1) as u16;
    let bar_gap = 2;
    let bar_width = (chunks[0].width / count).saturating_sub(bar_gap).clamp(3, 24);

    let bars: Vec<Bar> = chart
        .categories
        .iter()
        .map(|category| {
            Bar::default()
                .value(category.value)
                .label(Line::from(category.label))
                .style(Style::default().fg(app.accent))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(app.accent)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let bar_chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .label_style(Style::default().fg(Color::White))
        .data(BarGroup::default().bars(&bars));
    f.render_widget(bar_chart, chunks[0]);

    f.render_widget(legend(chart.series, app), chunks[1]);
}

fn draw_radar(f: &mut Frame, area: Rect, radar: &RadarBlock, app: &App) {
    let outer = section_block(&radar.title, app);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    f.render_widget(
        RadarChart::new(&radar.axes, radar.max).color(app.accent),
        chunks[0],
    );
    f.render_widget(legend(radar.series, app), chunks[1]);
}

fn legend<'a>(series: &'a str, app: &App) -> Paragraph<'a> {
    Paragraph::new(Line::from(vec![
        Span::styled("■ ", Style::default().fg(app.accent)),
        Span::raw(series),
    ]))
    .alignment(Alignment::Center)
}

fn draw_unknown_view(f: &mut Frame, area: Rect, app: &App) {
    let text = format!("No view for '{}'", app.selection());
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let tab = app
        .active_tab()
        .map(|tab| tab.title().to_string())
        .unwrap_or_else(|| format!("? ({})", app.selection()));
    let line = Line::from(vec![
        Span::styled("Tab ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{tab}  ")),
        Span::styled("Trims ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.data.trims.len())),
        Span::styled("Specs ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.data.specs.len().to_string()),
    ]);

    let paragraph = Paragraph::new(line)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("tab", "Select a tab by name"),
        ("overview", "Show overview"),
        ("trims", "Show trims and pricing"),
        ("cargo", "Show cargo space chart"),
        ("ratings", "Show ratings chart"),
        ("export", "Export tables as CSV/JSON"),
        ("copy", "Copy view to clipboard"),
        ("help", "Toggle help"),
        ("quit", "Quit"),
    ];

    for (cmd, desc) in commands {
        if cmd.starts_with(&input) {
            return Some(desc);
        }
    }
    None
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input);
            let hint_text = hint.unwrap_or("tab <name> | export [dir] | copy | quit");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.as_str()),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text, Style::default().fg(color)),
                ])
            } else {
                action_hints()
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints() -> Line<'static> {
    let hints = [
        ("1-4", "tab"),
        ("←/→", "cycle"),
        (":", "command"),
        ("e", "export"),
        ("y", "copy"),
        ("?", "help"),
        ("q", "quit"),
    ];
    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {label}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(60, 60, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  1-4          Jump to tab"),
        Line::from("  ← / → h / l  Previous / next tab"),
        Line::from("  Tab / S-Tab  Next / previous tab"),
        Line::from("  Mouse        Click a tab title"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  :            Command mode"),
        Line::from("  e            Export tables"),
        Line::from("  y            Copy view to clipboard"),
        Line::from("  ?            Toggle help"),
        Line::from("  q / Esc      Quit"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :tab <name>  :overview :trims :cargo :ratings"),
        Line::from("  :export [dir]  :copy  :quit"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(app.accent)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &App) -> String {
        render_sized(app, 120, 40)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn test_draw_every_tab() {
        let mut app = App::new();

        let screen = render(&app);
        assert!(screen.contains("Kia Telluride Dashboard"));
        assert!(screen.contains("Engine: 3.8L V6 GDI"));
        assert!(screen.contains("Safety Features"));

        app.select_tab("Trims");
        let screen = render(&app);
        assert!(screen.contains("LX - $35,990"));
        assert!(screen.contains("X-Pro - $51,990"));
        assert!(!screen.contains("Engine: 3.8L"));

        app.select_tab("Cargo Space");
        let screen = render(&app);
        assert!(screen.contains("Cubic Feet"));

        app.select_tab("Ratings");
        let screen = render(&app);
        assert!(screen.contains("Telluride Ratings"));
    }

    #[test]
    fn test_bar_chart_shows_every_category() {
        let mut app = App::new();
        app.select_tab("cargo space");
        for (width, height) in [(120, 40), (80, 24), (70, 24)] {
            let screen = render_sized(&app, width, height);
            for entry in app.data.cargo {
                assert!(
                    screen.contains(entry.configuration),
                    "{width}x{height} missing {}",
                    entry.configuration
                );
                assert!(
                    screen.contains(&entry.space.to_string()),
                    "{width}x{height} missing {}",
                    entry.space
                );
            }
        }
    }

    #[test]
    fn test_radar_shows_every_axis_label() {
        let mut app = App::new();
        app.select_tab("ratings");
        for (width, height) in [(120, 40), (80, 24), (70, 24)] {
            let screen = render_sized(&app, width, height);
            assert!(screen.contains("Telluride Ratings"));
            for entry in app.data.ratings {
                let label = format!("{} {}", entry.feature, entry.value);
                assert!(screen.contains(&label), "{width}x{height} missing {label}");
            }
        }
    }

    #[test]
    fn test_draw_unknown_selection() {
        let mut app = App::new();
        app.select_tab("Towing");
        let screen = render(&app);
        assert!(screen.contains("No view for 'towing'"));
    }

    #[test]
    fn test_same_tab_twice_draws_identically() {
        let mut app = App::new();
        app.select_tab("Trims");
        let first = render(&app);
        app.select_tab("Trims");
        assert_eq!(first, render(&app));
    }

    #[test]
    fn test_draw_help_and_small_terminal() {
        let mut app = App::new();
        app.toggle_help();
        let backend = TestBackend::new(20, 6);
        let mut terminal = Terminal::new(backend).expect("terminal");
        for tab in crate::app::Tab::ALL {
            app.select_tab(tab.title());
            terminal.draw(|f| draw(f, &app)).expect("draw");
        }
    }

    #[test]
    fn test_command_hint() {
        assert_eq!(command_hint("exp"), Some("Export tables as CSV/JSON"));
        assert_eq!(command_hint(""), None);
        assert_eq!(command_hint("zzz"), None);
    }
}
