use crate::application::{App, AppMode, Focus};
use crate::domain::PickerKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const ACCENT: Color = Color::Rgb(0x34, 0xCB, 0x79);

const TIP: &str = "Select only a state to see every city in it. Leave both blank to list every \
registered point (may be slow).";

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_picker(f, app, PickerKind::Region, chunks[1]);
    render_picker(f, app, PickerKind::Place, chunks[2]);
    render_tip(f, chunks[3]);
    render_button(f, app, chunks[4]);
    render_status_bar(f, app, chunks[6]);

    match app.mode {
        AppMode::Picking(kind) => render_picker_popup(f, app, kind),
        AppMode::Help => render_help_popup(f, app.help_scroll),
        AppMode::Normal => {}
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Your waste collection marketplace",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "We help people find collection points efficiently",
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(header, area);
}

fn is_focused(app: &App, kind: PickerKind) -> bool {
    matches!(
        (app.focus, kind),
        (Focus::Region, PickerKind::Region) | (Focus::Place, PickerKind::Place)
    )
}

fn render_picker(f: &mut Frame, app: &App, kind: PickerKind, area: Rect) {
    let value = app.picker_value(kind);
    let text = if value.is_empty() {
        Span::styled(kind.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value)
    };

    let border_style = if is_focused(app, kind) {
        Style::default().fg(ACCENT)
    } else {
        Style::default()
    };

    let picker = Paragraph::new(Line::from(vec![text, Span::raw(" ▾")])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(kind.label()),
    );
    f.render_widget(picker, area);
}

fn render_tip(f: &mut Frame, area: Rect) {
    let tip = Paragraph::new(TIP)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    f.render_widget(tip, area);
}

fn render_button(f: &mut Frame, app: &App, area: Rect) {
    let style = if app.focus == Focus::Confirm {
        Style::default().bg(ACCENT).fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    };
    let button = Paragraph::new("→  Enter")
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(ACCENT)));
    f.render_widget(button, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if let Some(ref status) = app.status_message {
        (status.clone(), Style::default().fg(Color::Red))
    } else if let Some(loading) = app.loading_message() {
        (loading.to_string(), Style::default().fg(Color::Yellow))
    } else {
        let text = match app.mode {
            AppMode::Normal => "Tab/↑↓: move | Enter: choose | F1/?: help | q: quit",
            AppMode::Picking(_) => "↑↓/jk: move | PgUp/PgDn: fast | Enter: pick | Esc: close",
            AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help",
        };
        (text.to_string(), Style::default())
    };

    let status = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, area);
}

fn centered_rect(area: Rect) -> Rect {
    Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    }
}

fn render_picker_popup(f: &mut Frame, app: &App, kind: PickerKind) {
    let popup_area = centered_rect(f.area());
    f.render_widget(Clear, popup_area);

    let options = app.picker_options(kind);
    let mut items = vec![ListItem::new(Span::styled(
        kind.placeholder(),
        Style::default().fg(Color::DarkGray),
    ))];
    items.extend(options.iter().map(|option| ListItem::new(option.as_str())));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ({} options)", kind.label(), options.len()))
                .style(Style::default().fg(ACCENT)),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().bg(ACCENT).fg(Color::Black))
        .highlight_symbol("› ");

    let mut state = ListState::default();
    state.select(Some(app.picker_cursor));
    f.render_stateful_widget(list, popup_area, &mut state);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let popup_area = centered_rect(f.area());
    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("coleta Help (Line {}/{})", start_line + 1, help_lines.len()))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

/// Number of lines in the help text; scrolling stops at the last one.
pub fn help_line_count() -> usize {
    HELP_TEXT.lines().count()
}

const HELP_TEXT: &str = r#"COLETA - FIND COLLECTION POINTS

=== CHOOSING A LOCATION ===
State (UF)      Pick the state whose points you want to see
City            Pick a city of that state (the list follows the state)
Enter button    Open the collection points for your choice

Leaving the city blank shows every city of the chosen state.
Leaving both blank shows every registered point, which may be slow.

=== MOVING AROUND ===
Tab / ↓ / j     Next control
Shift+Tab / ↑ / k
                Previous control
Enter / Space   Open the focused picker, or press the Enter button

=== INSIDE A PICKER ===
↑↓ or j/k       Move one option
Page Up/Down    Move ten options
Home / End      First / last option
Enter / Space   Choose the highlighted option
                Choosing "Select a state" or "Select a city" clears it
Esc / q         Close without changing anything

=== OTHER ===
F1 or ?         Show this help
q / Esc         Quit without opening the points screen
Ctrl+C          Quit from anywhere

When you press Enter, the chosen state and city are printed as one JSON
line, for example {"region":"SP","place":"Santos"}."#;

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_header_and_placeholders() {
        let app = App::default();
        let screen = render_to_string(&app);
        assert!(screen.contains("Your waste collection marketplace"));
        assert!(screen.contains("Select a state"));
        assert!(screen.contains("Select a city"));
        assert!(screen.contains("Enter"));
    }

    #[test]
    fn test_renders_selected_values() {
        let mut app = App::default();
        app.select_region("MG");
        app.select_place("Uberlândia");
        let screen = render_to_string(&app);
        assert!(screen.contains("MG"));
        assert!(screen.contains("Uberlândia"));
        assert!(!screen.contains("Select a city"));
    }

    #[test]
    fn test_renders_loading_and_errors() {
        let mut app = App::new();
        assert!(render_to_string(&app).contains("Loading states and cities"));
        app.status_message = Some("Could not load states: HTTP 500".to_string());
        assert!(render_to_string(&app).contains("Could not load states"));
    }

    #[test]
    fn test_renders_open_picker_options() {
        let mut app = App::default();
        app.regions = vec!["AC".to_string(), "RJ".to_string(), "SP".to_string()];
        app.open_picker(PickerKind::Region);
        let screen = render_to_string(&app);
        assert!(screen.contains("State (UF) (3 options)"));
        assert!(screen.contains("RJ"));
        assert!(screen.contains("SP"));
    }

    #[test]
    fn test_renders_help_popup() {
        let mut app = App::default();
        app.open_help();
        assert!(render_to_string(&app).contains("coleta Help"));
    }
}
