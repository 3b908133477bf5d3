//! Terminal form for editing the planner
//!
//! Renders the team name and the six cost inputs on the left of a
//! `top`-style screen, with the cost summary underneath. Every keystroke
//! is applied to the planner straight away.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::display::CostDisplay;
use crate::input::{self, Field};
use crate::planner::Planner;

/// A line of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    TeamName,
    Cost(Field),
}

impl FormRow {
    fn label(self) -> &'static str {
        match self {
            FormRow::TeamName => "Team Name",
            FormRow::Cost(field) => field.label(),
        }
    }
}

/// Application state for the planner form
pub struct PlannerApp {
    planner: Planner,
    display: Rc<RefCell<CostDisplay>>,
    rows: Vec<FormRow>,
    buffers: Vec<String>,
    selected: usize,
    pub last_update: DateTime<Local>,
}

impl PlannerApp {
    /// Wrap a planner; the display is subscribed to its results
    pub fn new(mut planner: Planner, display: CostDisplay) -> Self {
        let display = planner.subscribe_shared(display);
        display.borrow_mut().show(planner.result());

        let rows: Vec<FormRow> = std::iter::once(FormRow::TeamName)
            .chain(Field::ALL.iter().copied().map(FormRow::Cost))
            .collect();

        let buffers = rows
            .iter()
            .map(|row| match row {
                FormRow::TeamName => planner.team_name().to_string(),
                FormRow::Cost(field) => input::format_input(field.read(planner.params())),
            })
            .collect();

        Self {
            planner,
            display,
            rows,
            buffers,
            selected: 0,
            last_update: Local::now(),
        }
    }

    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    pub fn selected(&self) -> FormRow {
        self.rows[self.selected]
    }

    /// Text currently typed into a row
    pub fn buffer(&self, row: FormRow) -> Option<&str> {
        self.rows
            .iter()
            .position(|r| *r == row)
            .map(|idx| self.buffers[idx].as_str())
    }

    /// Summary lines as the display currently shows them
    pub fn summary(&self) -> Vec<String> {
        self.display.borrow().render()
    }

    /// Handle keyboard input, returns true when the user quits
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Up | KeyCode::BackTab => self.select_previous(),
            KeyCode::Down | KeyCode::Tab | KeyCode::Enter => self.select_next(),
            KeyCode::Backspace => {
                self.buffers[self.selected].pop();
                self.apply_selected();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.buffers[self.selected].push(c);
                self.apply_selected();
            }
            _ => {}
        }
        false
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.rows.len();
    }

    fn select_previous(&mut self) {
        self.selected = (self.selected + self.rows.len() - 1) % self.rows.len();
    }

    fn apply_selected(&mut self) {
        let text = &self.buffers[self.selected];
        match self.rows[self.selected] {
            FormRow::TeamName => self.planner.set_team_name(text.clone()),
            FormRow::Cost(field) => {
                self.planner.set_input(field, text);
                self.last_update = Local::now();
            }
        }
    }

    /// Render the UI
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),  // Header
                Constraint::Length(10), // Form
                Constraint::Min(7),     // Summary
                Constraint::Length(3),  // Footer
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_form(f, chunks[1]);
        self.render_summary(f, chunks[2]);
        self.render_footer(f, chunks[3]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let title = vec![
            Line::from(vec![
                Span::styled(
                    self.planner.title().to_string(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" - Team: "),
                Span::styled(
                    self.planner.team_name().to_string(),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(vec![
                Span::raw("Last update: "),
                Span::styled(
                    self.last_update.format("%H:%M:%S").to_string(),
                    Style::default().fg(Color::Green),
                ),
            ]),
        ];

        let paragraph = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_form(&self, f: &mut Frame, area: Rect) {
        let header = Row::new(["Field", "Value"].iter().map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        }));

        let rows: Vec<Row> = self
            .rows
            .iter()
            .zip(&self.buffers)
            .enumerate()
            .map(|(idx, (row, buffer))| {
                let (marker, style) = if idx == self.selected {
                    ("> ", Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    ("  ", Style::default())
                };
                Row::new(vec![
                    Cell::from(format!("{}{}", marker, row.label())),
                    Cell::from(buffer.clone()),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(rows, [Constraint::Percentage(40), Constraint::Percentage(60)])
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Inputs"))
            .column_spacing(1);

        f.render_widget(table, area);
    }

    fn render_summary(&self, f: &mut Frame, area: Rect) {
        let lines = self.summary();
        let amount_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        // heading, label, amount, label, amount
        let content: Vec<Line> = lines
            .into_iter()
            .enumerate()
            .skip(1)
            .map(|(idx, line)| {
                if idx % 2 == 0 {
                    Line::from(Span::styled(line, amount_style))
                } else {
                    Line::from(line)
                }
            })
            .collect();

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(crate::display::SUMMARY_HEADING),
        );
        f.render_widget(paragraph, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let help = Line::from(Span::styled(
            "Up/Down to move | type to edit | Backspace to delete | Esc to quit",
            Style::default().fg(Color::DarkGray),
        ));

        let paragraph = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut PlannerApp, text: &str) {
        for c in text.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn clear_selected(app: &mut PlannerApp) {
        while app.buffer(app.selected()).is_some_and(|b| !b.is_empty()) {
            app.handle_key(press(KeyCode::Backspace));
        }
    }

    fn screen_text(app: &PlannerApp) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_app_starts_with_defaults() {
        let app = PlannerApp::new(Planner::default(), CostDisplay::default());

        assert_eq!(app.selected(), FormRow::TeamName);
        assert_eq!(app.buffer(FormRow::TeamName), Some("My Team"));
        assert_eq!(app.buffer(FormRow::Cost(Field::IceCost)), Some("300"));
        assert_eq!(app.buffer(FormRow::Cost(Field::FeePercent)), Some("2"));
        assert_eq!(app.summary()[2], "$18449.76");
    }

    #[test]
    fn test_typing_players_recomputes() {
        let mut app = PlannerApp::new(Planner::default(), CostDisplay::default());

        while app.selected() != FormRow::Cost(Field::Players) {
            app.handle_key(press(KeyCode::Down));
        }
        clear_selected(&mut app);
        type_text(&mut app, "4");

        assert_eq!(app.planner().params().players, 4.0);
        assert_eq!(app.summary()[2], "$18719.04");
        assert_eq!(app.summary()[4], "$4679.76");
    }

    #[test]
    fn test_cleared_players_shows_zero_per_player() {
        let mut app = PlannerApp::new(Planner::default(), CostDisplay::default());

        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.selected(), FormRow::Cost(Field::Players));
        clear_selected(&mut app);

        assert_eq!(app.planner().params().players, 0.0);
        assert_eq!(app.summary()[4], "$0.00");
    }

    #[test]
    fn test_garbage_input_shows_not_a_number() {
        let mut app = PlannerApp::new(Planner::default(), CostDisplay::default());

        app.handle_key(press(KeyCode::Down));
        type_text(&mut app, "x");

        assert_eq!(app.buffer(FormRow::Cost(Field::IceCost)), Some("300x"));
        assert_eq!(app.summary()[2], "N/A");
    }

    #[test]
    fn test_team_name_editing() {
        let mut app = PlannerApp::new(Planner::default(), CostDisplay::default());

        clear_selected(&mut app);
        type_text(&mut app, "Ice Hawks");

        assert_eq!(app.planner().team_name(), "Ice Hawks");
        assert_eq!(app.summary()[2], "$18449.76");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = PlannerApp::new(Planner::default(), CostDisplay::default());

        assert!(app.handle_key(press(KeyCode::Esc)));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        // 'q' is ordinary text in a form
        assert!(!app.handle_key(press(KeyCode::Char('q'))));
    }

    #[test]
    fn test_render_shows_summary() {
        let app = PlannerApp::new(
            Planner::default().with_team_name("Ice Hawks"),
            CostDisplay::default(),
        );
        let text = screen_text(&app);

        assert!(text.contains("Ice Planner"));
        assert!(text.contains("Ice Hawks"));
        assert!(text.contains("Jerseys ($/player)"));
        assert!(text.contains("Team Cost Summary"));
        assert!(text.contains("$18449.76"));
    }
}
