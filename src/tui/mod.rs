//! Ratatui-based terminal dashboard.
//!
//! Three tool tabs mirror the suite's scope: sedimentary grain-size analysis
//! is live; igneous and metamorphic are placeholder pages. The sedimentary
//! tab provides a 9-row weight entry panel (with bulk paste), the headline
//! statistics, and Plotters-rendered charts.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs},
};

use crate::app::pipeline::{self, RunOutput};
use crate::cli::AnalyzeArgs;
use crate::data::DEMO_WEIGHTS;
use crate::domain::{CLASS_COUNT, ChartKind, RockTool, SIEVE_CLASSES, SampleConfig};
use crate::error::AppError;
use crate::io::{parse_weight, split_bulk, write_analysis_json, write_results_csv};

mod charts;

use charts::GrainChart;

/// Start the TUI.
pub fn run(args: AnalyzeArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::internal(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(&args)?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen, paste mode)
/// on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::internal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(AppError::internal(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
    }
}

struct App {
    inputs: [String; CLASS_COUNT],
    selected: usize,
    editing: bool,
    edit_buffer: String,
    tool: RockTool,
    chart: ChartKind,
    run: Option<RunOutput>,
    status: String,
    sample_config: SampleConfig,
}

impl App {
    fn new(args: &AnalyzeArgs) -> Result<Self, AppError> {
        let mut app = Self {
            inputs: std::array::from_fn(|_| String::new()),
            selected: 0,
            editing: false,
            edit_buffer: String::new(),
            tool: RockTool::Sedimentary,
            chart: ChartKind::Curve,
            run: None,
            status: "Enter retained weights (coarse to fine), or press d for demo data.".to_string(),
            sample_config: crate::app::sample_config_from_args(args),
        };

        // `gsat tui --demo` etc. pre-fill the entry panel; without a source
        // the dashboard starts blank.
        if let Some(source) = crate::app::resolve_source(args, false)? {
            let weights = pipeline::resolve_weights(&source)?;
            app.set_weights(&weights);
            app.recompute();
        }
        Ok(app)
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::internal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::internal(format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::internal(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Paste(text) => {
                    self.handle_paste(&text);
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        if self.editing {
            return self.handle_value_edit(code);
        }

        match code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Tab => {
                self.tool = self.tool.next();
                self.status = format!("tool: {}", self.tool.display_name());
            }
            KeyCode::BackTab => {
                self.tool = self.tool.prev();
                self.status = format!("tool: {}", self.tool.display_name());
            }
            KeyCode::Up => {
                if self.tool == RockTool::Sedimentary && self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Down => {
                if self.tool == RockTool::Sedimentary && self.selected < CLASS_COUNT - 1 {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                if self.tool == RockTool::Sedimentary {
                    self.editing = true;
                    self.edit_buffer = self.inputs[self.selected].clone();
                    self.status =
                        "Editing weight (digits and '.'). Enter to apply, Esc to cancel.".to_string();
                }
            }
            KeyCode::Char('d') => {
                self.set_weights(&DEMO_WEIGHTS);
                self.recompute();
                self.status = "Loaded demo sample (412.8 g).".to_string();
            }
            KeyCode::Char('r') => {
                self.sample_config.seed = self.sample_config.seed.wrapping_add(1);
                match crate::data::generate_sample(&self.sample_config) {
                    Ok(weights) => {
                        self.set_weights(&weights);
                        self.recompute();
                        self.status = format!("Generated synthetic sample (seed {}).", self.sample_config.seed);
                    }
                    Err(err) => self.status = format!("Sample generation failed: {err}"),
                }
            }
            KeyCode::Char('c') => {
                self.chart = self.chart.next();
                self.status = format!("chart: {}", self.chart.display_name());
            }
            KeyCode::Char('e') => self.export(),
            KeyCode::Char('x') => {
                self.inputs = std::array::from_fn(|_| String::new());
                self.status = "Cleared inputs.".to_string();
            }
            _ => {}
        }

        Ok(false)
    }

    fn handle_value_edit(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Esc => {
                self.editing = false;
                self.status = "Edit canceled.".to_string();
            }
            KeyCode::Enter => {
                self.editing = false;
                self.inputs[self.selected] = self.edit_buffer.trim().to_string();
                self.recompute();
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Char(c) => {
                if c.is_ascii_digit() || c == '.' {
                    self.edit_buffer.push(c);
                }
            }
            _ => {}
        }
        Ok(false)
    }

    /// Bulk paste fills fields downward from the selected row, exactly like
    /// pasting a spreadsheet column into the first input box.
    fn handle_paste(&mut self, text: &str) {
        if self.tool != RockTool::Sedimentary {
            return;
        }
        let values = split_bulk(text);
        if values.is_empty() {
            return;
        }

        self.editing = false;
        let mut filled = 0;
        for (offset, value) in values.iter().enumerate() {
            let idx = self.selected + offset;
            if idx >= CLASS_COUNT {
                break;
            }
            self.inputs[idx] = (*value).to_string();
            filled += 1;
        }
        self.recompute();
        self.status = format!("Pasted {filled} value(s).");
    }

    fn set_weights(&mut self, weights: &[f64; CLASS_COUNT]) {
        for (input, w) in self.inputs.iter_mut().zip(weights.iter()) {
            *input = format!("{w}");
        }
    }

    fn weights(&self) -> [f64; CLASS_COUNT] {
        let mut out = [0.0; CLASS_COUNT];
        for (i, input) in self.inputs.iter().enumerate() {
            out[i] = parse_weight(input);
        }
        out
    }

    fn recompute(&mut self) {
        let weights = self.weights();
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            // An empty sample is not an analysis; keep the previous result on
            // screen rather than replacing it with nonsense.
            self.status = "Empty sample: enter at least one weight.".to_string();
            return;
        }

        match pipeline::run_analysis_with_weights(weights) {
            Ok(run) => {
                self.status = format!("Analyzed {total:.1} g.");
                self.run = Some(run);
            }
            Err(err) => self.status = err.to_string(),
        }
    }

    fn export(&mut self) {
        let Some(run) = &self.run else {
            self.status = "Nothing to export yet.".to_string();
            return;
        };

        let json_path = std::path::Path::new("gsat-analysis.json");
        let csv_path = std::path::Path::new("gsat-analysis.csv");
        let outcome = write_analysis_json(json_path, &run.weights, &run.result)
            .and_then(|()| write_results_csv(csv_path, &run.weights, &run.result));
        match outcome {
            Ok(()) => {
                self.status = "Exported gsat-analysis.json and gsat-analysis.csv.".to_string();
            }
            Err(err) => self.status = format!("Export failed: {err}"),
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_tabs(frame, chunks[1]);
        self.draw_body(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut spans = vec![
            Span::styled("gsat", Style::default().fg(Color::Cyan)),
            Span::raw(" - geological analysis suite"),
        ];

        if let Some(run) = &self.run {
            spans.push(Span::styled(
                format!(
                    " | Mz={} phi | D50={} mm | mode={} phi | sorting={} phi",
                    run.result.mz, run.result.d50_mm, run.result.mode, run.result.sd
                ),
                Style::default().fg(Color::Gray),
            ));
        }

        let p = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_tabs(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let titles: Vec<Line> = RockTool::ALL
            .iter()
            .map(|tool| Line::from(tool.display_name()))
            .collect();
        let selected = RockTool::ALL.iter().position(|&t| t == self.tool).unwrap_or(0);

        let tabs = Tabs::new(titles)
            .select(selected)
            .block(Block::default().borders(Borders::ALL).title("Tools"))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        match self.tool {
            RockTool::Sedimentary => self.draw_sedimentary(frame, area),
            RockTool::Igneous => draw_placeholder(
                frame,
                area,
                "Igneous Rock Analysis",
                "Mineral composition and crystallization analysis (QAPF).",
            ),
            RockTool::Metamorphic => draw_placeholder(
                frame,
                area,
                "Metamorphic Rock Analysis",
                "Texture, mineral assemblages, and P-T conditions.",
            ),
        }
    }

    fn draw_sedimentary(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(0)])
            .split(area);

        self.draw_weights_panel(frame, chunks[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(9)])
            .split(chunks[1]);

        self.draw_chart(frame, right[0]);
        self.draw_stats_panel(frame, right[1]);
    }

    fn draw_weights_panel(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut items = Vec::with_capacity(CLASS_COUNT);
        for (i, class) in SIEVE_CLASSES.iter().enumerate() {
            let value = if self.editing && i == self.selected {
                format!("{}_", self.edit_buffer)
            } else if self.inputs[i].is_empty() {
                "-".to_string()
            } else {
                self.inputs[i].clone()
            };
            items.push(ListItem::new(format!("{:<9} {:>14}", class.label(), value)));
        }

        let list = List::new(items)
            .block(Block::default().title("Retained weight (g)").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);

        if self.editing {
            let hint = Paragraph::new("Editing weight…")
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rect = Rect {
                x: area.x + 2,
                y: area.y + area.height.saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(format!("Distribution ({})", self.chart.display_name()))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("Waiting for weights...")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        let widget = GrainChart {
            kind: self.chart,
            result: &run.result,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_stats_panel(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let text = match &self.run {
            Some(run) => crate::report::format_statistics(&run.result),
            None => "No analysis yet.".to_string(),
        };
        let p = Paragraph::new(Text::from(text))
            .block(Block::default().title("Statistics").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "Tab tool  ↑/↓ select  Enter edit  d demo  r random  c chart  e export  x clear  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn draw_placeholder(frame: &mut ratatui::Frame<'_>, area: Rect, title: &str, subtitle: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(subtitle),
        Line::from(""),
        Line::from(Span::styled(
            "Coming soon - this tool is under construction.",
            Style::default().fg(Color::Yellow),
        )),
    ];
    let p = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(p, area);
}
