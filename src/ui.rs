use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use finance_tracker::{
    date_hint, parse_date, summarize, Category, CsvStore, DailySeries, EntryForm, RecordStore, StoreConfig,
    Summary, ValidationError,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

// ============================================================================
// PAGES & FIELDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    AddTransaction,
    ViewSummary,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::AddTransaction => Page::ViewSummary,
            Page::ViewSummary => Page::AddTransaction,
        }
    }

    pub fn previous(&self) -> Self {
        // Only two pages
        self.next()
    }

    pub fn title(&self) -> &str {
        match self {
            Page::AddTransaction => "Add Transaction",
            Page::ViewSummary => "View Summary",
        }
    }
}

const ADD_FIELDS: [&str; 4] = ["Date", "Amount", "Category (I/E)", "Description"];
const SUMMARY_FIELDS: [&str; 2] = ["Start Date", "End Date"];

#[derive(Debug, Clone, PartialEq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    fn info(message: impl Into<String>) -> Self {
        Status {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Status {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App<S: RecordStore> {
    store: S,
    date_format: String,
    date_hint: String,
    pub current_page: Page,
    pub form: EntryForm,
    pub add_focus: usize,
    pub start_input: String,
    pub end_input: String,
    pub summary_focus: usize,
    pub summary: Option<Summary>,
    pub table_state: TableState,
    pub record_count: usize,
    pub status: Option<Status>,
}

impl App<CsvStore> {
    /// Initialize the CSV store and build the app around it
    pub fn open(config: StoreConfig) -> Result<Self> {
        let store = CsvStore::open(config)?;
        let format = store.config().date_format.clone();
        App::new(store, format)
    }
}

impl<S: RecordStore> App<S> {
    pub fn new(store: S, date_format: impl Into<String>) -> Result<Self> {
        let date_format = date_format.into();
        let date_hint = date_hint(&date_format);
        let record_count = store.read_all()?.len();

        Ok(Self {
            store,
            date_format,
            date_hint,
            current_page: Page::AddTransaction,
            form: EntryForm::default(),
            add_focus: 0,
            start_input: String::new(),
            end_input: String::new(),
            summary_focus: 0,
            summary: None,
            table_state: TableState::default(),
            record_count,
            status: None,
        })
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }

    pub fn next_field(&mut self) {
        match self.current_page {
            Page::AddTransaction => self.add_focus = (self.add_focus + 1) % ADD_FIELDS.len(),
            Page::ViewSummary => {
                self.summary_focus = (self.summary_focus + 1) % SUMMARY_FIELDS.len()
            }
        }
    }

    pub fn previous_field(&mut self) {
        match self.current_page {
            Page::AddTransaction => {
                self.add_focus = (self.add_focus + ADD_FIELDS.len() - 1) % ADD_FIELDS.len()
            }
            Page::ViewSummary => {
                self.summary_focus =
                    (self.summary_focus + SUMMARY_FIELDS.len() - 1) % SUMMARY_FIELDS.len()
            }
        }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.current_page {
            Page::AddTransaction => match self.add_focus {
                0 => &mut self.form.date,
                1 => &mut self.form.amount,
                2 => &mut self.form.category,
                _ => &mut self.form.description,
            },
            Page::ViewSummary => match self.summary_focus {
                0 => &mut self.start_input,
                _ => &mut self.end_input,
            },
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_input().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_input().pop();
    }

    pub fn submit(&mut self) {
        match self.current_page {
            Page::AddTransaction => self.submit_entry(Local::now().date_naive()),
            Page::ViewSummary => self.submit_summary(),
        }
    }

    /// Validate the form and append it. An empty date means `today`.
    pub fn submit_entry(&mut self, today: NaiveDate) {
        let record = match self.form.validate(&self.date_format, today) {
            Ok(record) => record,
            Err(err) => {
                self.add_focus = field_index(&err);
                self.status = Some(Status::error(err.to_string()));
                return;
            }
        };

        match self.store.add_entry(&record) {
            Ok(()) => {
                self.record_count += 1;
                self.form.clear();
                self.add_focus = 0;
                self.status = Some(Status::info(format!(
                    "Transaction added successfully ({} {:.2} on {})",
                    record.category,
                    record.amount,
                    record.date.format(&self.date_format)
                )));
            }
            Err(err) => self.status = Some(Status::error(format!("Error: {:#}", err))),
        }
    }

    pub fn submit_summary(&mut self) {
        if self.start_input.trim().is_empty() || self.end_input.trim().is_empty() {
            self.status = Some(Status::error("Both dates are required"));
            return;
        }

        let range = parse_date(&self.start_input, &self.date_format)
            .map_err(|e| (0, e))
            .and_then(|start| {
                parse_date(&self.end_input, &self.date_format)
                    .map(|end| (start, end))
                    .map_err(|e| (1, e))
            });

        let (start, end) = match range {
            Ok(range) => range,
            Err((focus, err)) => {
                self.summary_focus = focus;
                self.status = Some(Status::error(err.to_string()));
                return;
            }
        };

        match summarize(&self.store, start, end) {
            Ok(summary) => {
                self.status = Some(if summary.is_empty() {
                    Status::info("No transactions found")
                } else {
                    Status::info(format!("{} transactions in range", summary.len()))
                });
                self.table_state
                    .select(if summary.is_empty() { None } else { Some(0) });
                self.summary = Some(summary);
            }
            Err(err) => self.status = Some(Status::error(format!("Error: {:#}", err))),
        }
    }

    pub fn next_row(&mut self) {
        let len = self.summary.as_ref().map(|s| s.len()).unwrap_or(0);
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_row(&mut self) {
        let len = self.summary.as_ref().map(|s| s.len()).unwrap_or(0);
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    /// Returns `false` when the app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return false,
            KeyCode::Tab => self.next_page(),
            KeyCode::BackTab => self.previous_page(),
            KeyCode::Down => self.next_field(),
            KeyCode::Up => self.previous_field(),
            KeyCode::PageDown => self.next_row(),
            KeyCode::PageUp => self.previous_row(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.pop_char(),
            KeyCode::Char(c) => self.push_char(c),
            _ => {}
        }
        true
    }
}

fn field_index(err: &ValidationError) -> usize {
    match err.field() {
        "date" => 0,
        "amount" => 1,
        "category" => 2,
        _ => 3,
    }
}

/// Chart coordinates: x is days since the first point
pub fn chart_points(series: &DailySeries, category: Category) -> Vec<(f64, f64)> {
    let Some(first) = series.first_date() else {
        return Vec::new();
    };
    series
        .series(category)
        .into_iter()
        .map(|(date, amount)| ((date - first).num_days() as f64, amount))
        .collect()
}

// ============================================================================
// EVENT LOOP
// ============================================================================

pub fn run_ui<S: RecordStore>(app: &mut App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: RecordStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && !app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

fn ui<S: RecordStore>(f: &mut Frame, app: &mut App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::AddTransaction => render_add_form(f, chunks[1], app),
        Page::ViewSummary => render_summary(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header<S: RecordStore>(f: &mut Frame, area: Rect, app: &App<S>) {
    let mut tab_spans = vec![];
    for (i, page) in [Page::AddTransaction, Page::ViewSummary].iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title().to_string(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Records: {}", app.record_count),
        Style::default().fg(Color::White),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Personal Finance Tracker "),
    );

    f.render_widget(header, area);
}

fn input_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![
        Span::styled(if focused { "→ " } else { "  " }, label_style),
        Span::styled(format!("{:<16}", label), label_style),
        Span::raw(value),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

fn hint_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ))
}

fn render_add_form<S: RecordStore>(f: &mut Frame, area: Rect, app: &App<S>) {
    let date_label = format!("Date ({})", app.date_hint);
    let labels = [date_label.as_str(), ADD_FIELDS[1], ADD_FIELDS[2], ADD_FIELDS[3]];
    let values = [
        app.form.date.as_str(),
        app.form.amount.as_str(),
        app.form.category.as_str(),
        app.form.description.as_str(),
    ];

    let mut content = vec![Line::from("")];
    for (i, (label, value)) in labels.iter().zip(values.iter()).enumerate() {
        content.push(input_line(label, value, i == app.add_focus));
        content.push(Line::from(""));
    }
    content.push(hint_line("  Leave the date empty for today. Category: I = income, E = expense."));
    content.push(hint_line("  Press Enter to add the transaction."));

    let form = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Add Transaction "),
    );

    f.render_widget(form, area);
}

fn render_summary<S: RecordStore>(f: &mut Frame, area: Rect, app: &mut App<S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),      // Range inputs + totals
            Constraint::Min(8),         // Chart
            Constraint::Percentage(30), // Records
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_range_inputs(f, top[0], app);
    render_totals(f, top[1], app);
    render_chart(f, rows[1], app);
    render_records(f, rows[2], app);
}

fn render_range_inputs<S: RecordStore>(f: &mut Frame, area: Rect, app: &App<S>) {
    let start_label = format!("{} ({})", SUMMARY_FIELDS[0], app.date_hint);
    let end_label = format!("{} ({})", SUMMARY_FIELDS[1], app.date_hint);

    let content = vec![
        input_line(&start_label, &app.start_input, app.summary_focus == 0),
        input_line(&end_label, &app.end_input, app.summary_focus == 1),
        Line::from(""),
        hint_line("  Press Enter to view the summary."),
    ];

    let inputs = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Date Range "),
    );

    f.render_widget(inputs, area);
}

fn render_totals<S: RecordStore>(f: &mut Frame, area: Rect, app: &App<S>) {
    let bold = |color| Style::default().fg(color).add_modifier(Modifier::BOLD);

    let content = match &app.summary {
        None => vec![hint_line("  Enter a date range to see totals.")],
        Some(summary) if summary.is_empty() => vec![hint_line("  No transactions found")],
        Some(summary) => {
            let net = summary.net_savings();
            vec![
                Line::from(vec![
                    Span::styled("  Total income:  ", bold(Color::Cyan)),
                    Span::styled(format!("{:.2}", summary.total_income), bold(Color::Green)),
                ]),
                Line::from(vec![
                    Span::styled("  Total expense: ", bold(Color::Cyan)),
                    Span::styled(format!("{:.2}", summary.total_expense), bold(Color::Red)),
                ]),
                Line::from(vec![
                    Span::styled("  Net savings:   ", bold(Color::Cyan)),
                    Span::styled(
                        format!("{:.2}", net),
                        bold(if net < 0.0 { Color::Red } else { Color::Green }),
                    ),
                ]),
            ]
        }
    };

    let totals = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Totals "),
    );

    f.render_widget(totals, area);
}

fn render_chart<S: RecordStore>(f: &mut Frame, area: Rect, app: &App<S>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" Income and Expenses over time ");

    let series = match &app.summary {
        Some(summary) if !summary.is_empty() => summary.daily_series(),
        _ => {
            f.render_widget(Paragraph::new("").block(block), area);
            return;
        }
    };

    let income = chart_points(&series, Category::Income);
    let expense = chart_points(&series, Category::Expense);
    let x_max = income.last().map(|(x, _)| *x).unwrap_or(0.0).max(1.0);
    let y_max = series.max_amount().max(1.0) * 1.1;

    let datasets = vec![
        Dataset::default()
            .name("Income")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&income),
        Dataset::default()
            .name("Expense")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&expense),
    ];

    let first = series.first_date().map(|d| d.format(&app.date_format).to_string());
    let last = series.last_date().map(|d| d.format(&app.date_format).to_string());

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::raw(first.unwrap_or_default()),
                    Span::raw(last.unwrap_or_default()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("Amount")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(vec![Span::raw("0"), Span::raw(format!("{:.0}", y_max))]),
        );

    f.render_widget(chart, area);
}

fn render_records<S: RecordStore>(f: &mut Frame, area: Rect, app: &mut App<S>) {
    let header_cells = ["Date", "Amount", "Category", "Description"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let records = app
        .summary
        .as_ref()
        .map(|s| s.records.as_slice())
        .unwrap_or(&[]);

    let rows = records.iter().map(|record| {
        let color = match record.category {
            Category::Income => Color::Green,
            Category::Expense => Color::Red,
        };

        Row::new(vec![
            Cell::from(record.date.format(&app.date_format).to_string()),
            Cell::from(format!("{:.2}", record.amount)).style(Style::default().fg(color)),
            Cell::from(record.category.label()).style(Style::default().fg(color)),
            Cell::from(truncate(&record.description, 40)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Transactions "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_status_bar<S: RecordStore>(f: &mut Frame, area: Rect, app: &App<S>) {
    let mut status_spans = vec![];

    if let Some(status) = &app.status {
        let color = match status.kind {
            StatusKind::Info => Color::Green,
            StatusKind::Error => Color::Red,
        };
        status_spans.push(Span::styled(
            format!(" {} ", status.message),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        status_spans.push(Span::raw(" | "));
    }

    status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Submit | "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Page | "));
    status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Field | "));
    if app.current_page == Page::ViewSummary {
        status_spans.push(Span::styled("PgUp/PgDn", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" Rows | "));
    }
    status_spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finance_tracker::{MemoryStore, Record};

    const FORMAT: &str = "%d-%m-%Y";

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn type_text<S: RecordStore>(app: &mut App<S>, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn press<S: RecordStore>(app: &mut App<S>, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_add_transaction_via_keys() {
        let mut app = App::new(MemoryStore::new(), FORMAT).unwrap();

        type_text(&mut app, "01-01-2024");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "100");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "i");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "Salary");
        app.submit_entry(date(18, 10, 2026));

        assert_eq!(app.record_count, 1);
        assert_eq!(app.form, EntryForm::default());
        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Info);
        assert_eq!(
            app.store.read_all().unwrap(),
            vec![Record::new(date(1, 1, 2024), 100.0, Category::Income, "Salary")]
        );
    }

    #[test]
    fn test_invalid_entry_focuses_field() {
        let mut app = App::new(MemoryStore::new(), FORMAT).unwrap();
        app.form = EntryForm::new("01-01-2024", "-1", "E", "Oops");

        app.submit_entry(date(18, 10, 2026));

        assert_eq!(app.add_focus, 1);
        assert_eq!(app.record_count, 0);
        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Error);
        assert!(app.store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_summary_requires_both_dates() {
        let mut app = App::new(MemoryStore::new(), FORMAT).unwrap();
        app.current_page = Page::ViewSummary;
        app.start_input = "01-01-2024".into();

        app.submit();

        assert_eq!(app.status, Some(Status::error("Both dates are required")));
        assert!(app.summary.is_none());
    }

    #[test]
    fn test_summary_via_keys() {
        let store = MemoryStore::with_records(vec![
            Record::new(date(1, 1, 2024), 100.0, Category::Income, "Salary"),
            Record::new(date(2, 1, 2024), 40.0, Category::Expense, "Groceries"),
        ]);
        let mut app = App::new(store, FORMAT).unwrap();
        assert_eq!(app.record_count, 2);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_page, Page::ViewSummary);
        type_text(&mut app, "01-01-2024");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "02-01-2024");
        press(&mut app, KeyCode::Enter);

        let summary = app.summary.as_ref().unwrap();
        assert_eq!(summary.net_savings(), 60.0);
        assert_eq!(app.table_state.selected(), Some(0));

        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.table_state.selected(), Some(1));
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn test_summary_bad_end_date() {
        let mut app = App::new(MemoryStore::new(), FORMAT).unwrap();
        app.current_page = Page::ViewSummary;
        app.start_input = "01-01-2024".into();
        app.end_input = "2024-01-31".into();

        app.submit();

        assert_eq!(app.summary_focus, 1);
        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Error);
    }

    #[test]
    fn test_empty_summary_reports_no_transactions() {
        let mut app = App::new(MemoryStore::new(), FORMAT).unwrap();
        app.current_page = Page::ViewSummary;
        app.start_input = "01-01-2024".into();
        app.end_input = "31-01-2024".into();

        app.submit();

        assert_eq!(app.status, Some(Status::info("No transactions found")));
        assert!(app.summary.as_ref().unwrap().is_empty());
        assert_eq!(app.table_state.selected(), None);
    }

    #[test]
    fn test_backspace_and_quit() {
        let mut app = App::new(MemoryStore::new(), FORMAT).unwrap();
        type_text(&mut app, "12");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.date, "1");

        assert!(press(&mut app, KeyCode::Up));
        assert_eq!(app.add_focus, 3);
        assert!(!press(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_chart_points_use_day_offsets() {
        let store = MemoryStore::with_records(vec![
            Record::new(date(1, 1, 2024), 10.0, Category::Income, "a"),
            Record::new(date(4, 1, 2024), 5.0, Category::Expense, "b"),
        ]);
        let summary = summarize(&store, date(1, 1, 2024), date(31, 1, 2024)).unwrap();
        let series = summary.daily_series();

        assert_eq!(chart_points(&series, Category::Income), vec![(0.0, 10.0), (3.0, 0.0)]);
        assert_eq!(chart_points(&series, Category::Expense), vec![(0.0, 0.0), (3.0, 5.0)]);
        assert!(chart_points(&DailySeries::default(), Category::Income).is_empty());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer description", 10), "a much ...");
        assert_eq!(truncate("ééééééééééééé", 5), "éé...");
    }
}
