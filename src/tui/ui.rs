//! UI rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::catalog::{font_info, ColorRole, Template};
use crate::theme::{component_styles, design_tokens, is_gradient};
use crate::tui::app::{App, Screen};
use crate::tui::theme::Theme;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_content(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    // Overlays on top
    if app.show_help {
        render_help_overlay(frame, app);
    }
    if app.error_popup.is_some() {
        render_error_popup(frame, app);
    }
}

/// Render the header
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = match (app.current_screen, &app.working) {
        (Screen::DesignSystem, Some(template)) => {
            format!(" uiforge │ Design System │ {} ", template.name)
        }
        _ => format!(" uiforge │ Catalog │ {} ", app.selected_category()),
    };

    let header = Paragraph::new(title)
        .style(Theme::header())
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

/// Render the main content area based on current screen
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    match app.current_screen {
        Screen::Catalog => render_catalog(frame, area, app),
        Screen::DesignSystem => match &app.working {
            Some(template) => render_design_system(frame, area, app, template),
            None => render_placeholder(frame, area, "Design System", "No template selected"),
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

fn render_catalog(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(0),    // Template list
            Constraint::Length(1), // Help
        ])
        .split(area);

    render_search_box(frame, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let items: Vec<ListItem> = if app.filtered.is_empty() {
        vec![ListItem::new("  No templates match").style(Theme::muted())]
    } else {
        app.filtered
            .iter()
            .enumerate()
            .map(|(i, template)| {
                let mut spans = vec![Span::raw("  ")];
                spans.extend(swatch_spans(template));
                spans.push(Span::raw(format!(" {}", template.name)));
                spans.push(Span::styled(
                    format!("  {}", template.category),
                    Theme::muted(),
                ));

                let item = ListItem::new(Line::from(spans));
                if i == app.catalog_selection.selected {
                    item.style(Theme::selected())
                } else {
                    item
                }
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Templates ({}) ", app.filtered.len()))
            .borders(Borders::ALL)
            .border_style(Theme::normal()),
    );
    frame.render_widget(list, body[0]);

    render_template_preview(frame, body[1], app);

    let help = Paragraph::new(" [/] Search  [c/Tab] Category  [Enter] Open  [q] Quit")
        .style(Theme::muted());
    frame.render_widget(help, chunks[2]);
}

fn render_search_box(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" "), Span::raw(app.search_query.clone())];
    if app.search_mode {
        spans.push(Span::styled("█", Style::default().fg(Theme::SECONDARY)));
    } else if app.search_query.is_empty() {
        spans = vec![Span::styled(" Press / to search", Theme::muted())];
    }

    let border = if app.search_mode {
        Style::default().fg(Theme::SECONDARY)
    } else {
        Theme::normal()
    };

    let search = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" Search │ Category: {} ", app.selected_category()))
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(search, area);
}

fn render_template_preview(frame: &mut Frame, area: Rect, app: &App) {
    let Some(template) = app.selected_template() else {
        render_placeholder(frame, area, "Preview", "Nothing selected");
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            template.name,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(template.description),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tags: ", Style::default().fg(Theme::PRIMARY)),
            Span::raw(template.tags.join(", ")),
        ]),
        Line::from(""),
        Line::from(Span::styled("Features", Style::default().fg(Theme::PRIMARY))),
    ];
    lines.extend(
        template
            .features
            .iter()
            .map(|feature| Line::from(format!("  • {}", feature))),
    );

    let preview = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Preview ")
                .borders(Borders::ALL)
                .border_style(Theme::normal()),
        );
    frame.render_widget(preview, area);
}

/// One colored cell per palette role
fn swatch_spans(template: &Template) -> Vec<Span<'static>> {
    template
        .colors
        .iter()
        .map(|(_, value)| Span::styled("  ", Theme::swatch(value)))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Design system
// ─────────────────────────────────────────────────────────────────────────────

fn render_design_system(frame: &mut Frame, area: Rect, app: &App, template: &Template) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Palette
            Constraint::Length(6), // Typography
            Constraint::Min(0),    // Download
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[1]);

    render_palette(frame, left[0], app, template);
    render_typography(frame, left[1], template);
    render_download(frame, left[2], app, template);
    render_design_tokens(frame, right[0], template);
    render_component_styles(frame, right[1], template);

    let help_bar = if app.color_input_mode {
        " [Enter] Apply  [Esc] Cancel"
    } else {
        " [j/k] Role  [e] Edit  [r] Reset  [f] Framework  [d] Download  [Esc] Back"
    };
    frame.render_widget(Paragraph::new(help_bar).style(Theme::muted()), chunks[1]);
}

fn render_palette(frame: &mut Frame, area: Rect, app: &App, template: &Template) {
    let selected = app.selected_role();

    let mut lines: Vec<Line> = ColorRole::ALL
        .iter()
        .map(|&role| {
            let value = template.colors.get(role);
            let marker = if role == selected { " ▶ " } else { "   " };
            let shown = if app.color_input_mode && role == selected {
                vec![
                    Span::styled("[", Style::default().fg(Theme::SECONDARY)),
                    Span::raw(app.color_input.clone()),
                    Span::styled("█]", Style::default().fg(Theme::SECONDARY)),
                ]
            } else {
                vec![Span::raw(truncate(value, 40))]
            };

            let mut spans = vec![
                Span::raw(marker),
                Span::styled("  ", Theme::swatch(value)),
                Span::styled(
                    format!(" {:<11}", role.label()),
                    Style::default().fg(Theme::PRIMARY),
                ),
            ];
            spans.extend(shown);
            Line::from(spans)
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("   {}", selected.description()),
        Theme::muted(),
    )));

    let palette = Paragraph::new(lines).block(
        Block::default()
            .title(" Color Palette ")
            .borders(Borders::ALL)
            .border_style(Theme::normal()),
    );
    frame.render_widget(palette, area);
}

fn render_typography(frame: &mut Frame, area: Rect, template: &Template) {
    let fonts = font_info(template);
    let lines = vec![
        Line::from(vec![
            Span::styled("  Headings: ", Style::default().fg(Theme::PRIMARY)),
            Span::raw(fonts.primary),
        ]),
        Line::from(vec![
            Span::styled("  Body:     ", Style::default().fg(Theme::PRIMARY)),
            Span::raw(fonts.secondary),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            if fonts.url.is_empty() {
                "  Uses the system font stack".to_string()
            } else {
                "  Loaded from Google Fonts".to_string()
            },
            Theme::muted(),
        )),
    ];

    let typography = Paragraph::new(lines).block(
        Block::default()
            .title(" Typography ")
            .borders(Borders::ALL)
            .border_style(Theme::normal()),
    );
    frame.render_widget(typography, area);
}

fn render_download(frame: &mut Frame, area: Rect, app: &App, template: &Template) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("  Framework: ", Style::default().fg(Theme::PRIMARY)),
            Span::raw(app.framework.display_name()),
            Span::styled("  (f to switch)", Theme::muted()),
        ]),
        Line::from(vec![
            Span::styled("  Output:    ", Style::default().fg(Theme::PRIMARY)),
            Span::raw(app.output_dir.display().to_string()),
        ]),
        Line::from(vec![
            Span::styled("  Archive:   ", Style::default().fg(Theme::PRIMARY)),
            Span::raw(format!("{}-{}.zip", template.slug, app.framework.key())),
        ]),
        Line::from(""),
    ];

    if app.downloading {
        let frame_index = (app.tick_counter as usize) % SPINNER.len();
        lines.push(Line::from(Span::styled(
            format!("  {} Generating project...", SPINNER[frame_index]),
            Style::default().fg(Theme::WARNING),
        )));
    } else if let Some(path) = &app.last_download {
        lines.push(Line::from(Span::styled(
            format!("  ✓ {}", path.display()),
            Style::default().fg(Theme::SUCCESS),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "  Press d to download",
            Theme::muted(),
        )));
    }

    let download = Paragraph::new(lines).block(
        Block::default()
            .title(" Download ")
            .borders(Borders::ALL)
            .border_style(Theme::normal()),
    );
    frame.render_widget(download, area);
}

fn render_design_tokens(frame: &mut Frame, area: Rect, template: &Template) {
    let items: Vec<ListItem> = design_tokens(template)
        .into_iter()
        .map(|(name, value)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("  --{:<21}", name),
                    Style::default().fg(Theme::PRIMARY),
                ),
                Span::raw(value),
            ]))
        })
        .collect();

    let title = if is_gradient(&template.colors.background) {
        " Design Tokens (gradient background) "
    } else {
        " Design Tokens "
    };

    let tokens = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Theme::normal()),
    );
    frame.render_widget(tokens, area);
}

fn render_component_styles(frame: &mut Frame, area: Rect, template: &Template) {
    let styles = component_styles(template.slug);
    let lines: Vec<Line> = styles
        .entries()
        .into_iter()
        .flat_map(|(component, classes)| {
            [
                Line::from(Span::styled(
                    format!("  {}", component),
                    Style::default().fg(Theme::PRIMARY),
                )),
                Line::from(Span::styled(format!("    {}", classes), Theme::muted())),
            ]
        })
        .collect();

    let preview = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Component Styles ")
                .borders(Borders::ALL)
                .border_style(Theme::normal()),
        );
    frame.render_widget(preview, area);
}

/// Render a placeholder screen
fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(format!("\n  {}", message)).block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status_text = if let Some(msg) = &app.status_message {
        format!(" {}", msg)
    } else {
        format!(
            " {} templates │ framework: {} │ ? for help ",
            app.filtered.len(),
            app.framework
        )
    };

    let status = Paragraph::new(status_text)
        .style(Theme::status_bar())
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(status, area);
}

// ─────────────────────────────────────────────────────────────────────────────
// Overlays
// ─────────────────────────────────────────────────────────────────────────────

/// Centered rectangle capped at the given size
fn centered(area: Rect, width_pct: u16, height_pct: u16, max_w: u16, max_h: u16) -> Rect {
    let popup_width = (area.width * width_pct / 100).min(max_w);
    let popup_height = (area.height * height_pct / 100).min(max_h);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Render the help overlay
fn render_help_overlay(frame: &mut Frame, app: &App) {
    let popup_area = centered(frame.area(), 60, 70, 60, 20);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let (title, help_lines) = get_help_content(app.current_screen);

    let text: Vec<Line> = help_lines
        .into_iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:12}", key), Style::default().fg(Color::Cyan)),
                Span::raw(desc),
            ])
        })
        .collect();

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help, popup_area);
}

/// Render the error popup
fn render_error_popup(frame: &mut Frame, app: &App) {
    let Some(popup) = &app.error_popup else {
        return;
    };

    let popup_area = centered(frame.area(), 60, 40, 70, 12);
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(popup.message.lines().map(|l| Line::from(format!("  {}", l))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press Enter or Esc to dismiss",
        Theme::muted(),
    )));

    let error = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {} ", popup.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::ERROR)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(error, popup_area);
}

/// Get help content for the current screen
fn get_help_content(screen: Screen) -> (&'static str, Vec<(&'static str, &'static str)>) {
    match screen {
        Screen::Catalog => (
            "Help - Catalog",
            vec![
                ("j / ↓", "Move down"),
                ("k / ↑", "Move up"),
                ("/", "Search templates"),
                ("c / Tab", "Next category"),
                ("Shift+Tab", "Previous category"),
                ("Enter", "Open design system"),
                ("q", "Quit application"),
                ("?", "Show this help"),
            ],
        ),
        Screen::DesignSystem => (
            "Help - Design System",
            vec![
                ("j / ↓", "Next color role"),
                ("k / ↑", "Previous color role"),
                ("e / Enter", "Edit color"),
                ("r", "Reset palette"),
                ("f", "Switch framework"),
                ("d", "Download project"),
                ("Esc", "Go back (discards edits)"),
                ("?", "Show this help"),
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::core::Config;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }

    #[test]
    fn test_catalog_renders_templates() {
        let app = App::new(Config::default());
        let screen = draw(&app);
        assert!(screen.contains("Templates (40)"));
        assert!(screen.contains("Neo Brutalism"));
    }

    #[test]
    fn test_design_system_renders_tokens() {
        let mut app = App::new(Config::default());
        app.working = Some(crate::catalog::find("neo-brutalism").unwrap().clone());
        app.current_screen = Screen::DesignSystem;

        let screen = draw(&app);
        assert!(screen.contains("Color Palette"));
        assert!(screen.contains("--background"));
        assert!(screen.contains("neo-brutalism-nextjs.zip"));
    }

    #[test]
    fn test_help_content_per_screen() {
        let (title, keys) = get_help_content(Screen::DesignSystem);
        assert_eq!(title, "Help - Design System");
        assert!(keys.iter().any(|(key, _)| *key == "d"));
    }
}
