//! UI rendering using ratatui

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use serde_json::Value;

use super::app::{App, Mode, Pane, Phase, RosterField};

/// Primary accent color
const ACCENT: Color = Color::Cyan;
/// Secondary color for less important elements
const SECONDARY: Color = Color::DarkGray;
/// Highlight color for selected items
const HIGHLIGHT: Color = Color::Yellow;
/// Success color
const SUCCESS: Color = Color::Green;
/// Error color
const ERROR: Color = Color::Red;
/// Dim text color
const DIM: Color = Color::Rgb(100, 100, 100);

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Three panes
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[0]);

    render_composer(frame, app, panes[0]);
    render_roster(frame, app, panes[1]);
    render_compare(frame, app, panes[2]);
    render_status_bar(frame, app, chunks[1]);
}

fn pane_block(app: &App, pane: Pane, title: &str) -> Block<'static> {
    let focused = app.focused == pane;
    let border_style = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(SECONDARY)
    };
    let title_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(SECONDARY)
    };
    Block::default()
        .title(format!(" {title} "))
        .title_style(title_style)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// One-line summary of a pane's request phase
fn phase_line(phase: &Phase) -> Line<'static> {
    match phase {
        Phase::Idle => Line::from(Span::styled("idle", Style::default().fg(DIM))),
        Phase::Submitting => Line::from(Span::styled(
            "submitting...",
            Style::default().fg(HIGHLIGHT),
        )),
        Phase::Displaying => Line::from(Span::styled("ok", Style::default().fg(SUCCESS))),
        Phase::Failed(msg) => Line::from(Span::styled(
            format!("error: {msg}"),
            Style::default().fg(ERROR),
        )),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// An input line like `Name: Acme`, highlighted when it is being edited
fn input_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let label_style = if active {
        Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(SECONDARY)
    };
    let cursor = if active { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::raw(format!("{value}{cursor}")),
    ])
}

fn render_composer(frame: &mut Frame, app: &App, area: Rect) {
    let block = pane_block(app, Pane::Composer, "1 RFP Composer");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Draft
            Constraint::Min(3),         // Server record
            Constraint::Length(1),      // Phase
        ])
        .split(inner);

    let editing = app.focused == Pane::Composer && app.mode == Mode::Edit;
    let draft_title = if editing { " Draft [EDIT] " } else { " Draft " };
    let draft = Paragraph::new(app.composer.text.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(draft_title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if editing { HIGHLIGHT } else { SECONDARY })),
        );
    frame.render_widget(draft, chunks[0]);

    let record = match &app.composer.result {
        Some(value) => pretty(value),
        None => "No RFP created yet.\n\nPress 'i' to draft, Ctrl+S to create.".to_string(),
    };
    let record = Paragraph::new(record).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Server record ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SECONDARY)),
    );
    frame.render_widget(record, chunks[1]);

    frame.render_widget(Paragraph::new(phase_line(&app.composer.phase)), chunks[2]);
}

fn render_roster(frame: &mut Frame, app: &App, area: Rect) {
    let block = pane_block(app, Pane::Roster, "2 Vendor Roster");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Add form
            Constraint::Min(4),    // Vendor list
            Constraint::Length(5), // Dispatch
            Constraint::Length(1), // Load phase
        ])
        .split(inner);

    let editing = app.focused == Pane::Roster && app.mode == Mode::Edit;
    let form = Paragraph::new(vec![
        input_line(
            "Name",
            &app.roster.name_input,
            editing && app.roster.field == RosterField::Name,
        ),
        input_line(
            "Email",
            &app.roster.email_input,
            editing && app.roster.field == RosterField::Email,
        ),
        phase_line(&app.roster.add_phase),
    ])
    .block(
        Block::default()
            .title(" Add vendor (Enter submits) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SECONDARY)),
    );
    frame.render_widget(form, chunks[0]);

    let items: Vec<ListItem> = app
        .roster
        .vendors
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let mark = if app.roster.selected.contains(&v.id) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if i == app.roster.cursor && app.focused == Pane::Roster {
                Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{mark} {} <{}>", v.name, v.email),
                style,
            )))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title(format!(
                " Vendors ({} selected, space toggles) ",
                app.roster.selected.len()
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SECONDARY)),
    );
    frame.render_widget(list, chunks[1]);

    let ack_line = match &app.roster.last_ack {
        Some(ack) => Line::from(Span::styled(
            format!(
                "accepted for background delivery; queued for {}",
                if ack.sent_to.is_empty() {
                    "(nobody)".to_string()
                } else {
                    ack.sent_to.join(", ")
                }
            ),
            Style::default().fg(SUCCESS),
        )),
        None => Line::from(Span::styled(
            "no dispatch yet ('s' sends to selection)",
            Style::default().fg(DIM),
        )),
    };
    let dispatch = Paragraph::new(vec![
        input_line(
            "RFP id",
            &app.roster.rfp_id_input,
            editing && app.roster.field == RosterField::RfpId,
        ),
        ack_line,
        phase_line(&app.roster.send_phase),
    ])
    .block(
        Block::default()
            .title(" Dispatch ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SECONDARY)),
    );
    frame.render_widget(dispatch, chunks[2]);

    // Add and dispatch report inside their blocks; this line is the load
    frame.render_widget(Paragraph::new(phase_line(&app.roster.load_phase)), chunks[3]);
}

fn render_compare(frame: &mut Frame, app: &App, area: Rect) {
    let block = pane_block(app, Pane::Compare, "3 Proposal Comparator");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // RFP id input
            Constraint::Min(3),    // Result
            Constraint::Length(1), // Phase
        ])
        .split(inner);

    let editing = app.focused == Pane::Compare && app.mode == Mode::Edit;
    let input = Paragraph::new(input_line("RFP id", &app.compare.rfp_id_input, editing)).block(
        Block::default()
            .title(" Compare (Enter fetches) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if editing { HIGHLIGHT } else { SECONDARY })),
    );
    frame.render_widget(input, chunks[0]);

    // The payload is server-shaped; it is pretty-printed and nothing more
    let result = match &app.compare.result {
        Some(value) => pretty(value),
        None => "No comparison fetched yet.".to_string(),
    };
    let result = Paragraph::new(result).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Comparison ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SECONDARY)),
    );
    frame.render_widget(result, chunks[1]);

    frame.render_widget(Paragraph::new(phase_line(&app.compare.phase)), chunks[2]);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_color = match app.mode {
        Mode::Normal => ACCENT,
        Mode::Edit => SUCCESS,
    };
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.mode.display_name()),
            Style::default().fg(Color::Black).bg(mode_color),
        ),
        Span::raw(" "),
    ];
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(msg.clone(), Style::default().fg(HIGHLIGHT)));
    } else {
        spans.push(Span::styled(
            "Tab panes | i edit | space select | s send | r reload | q quit",
            Style::default().fg(DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
