// SPDX-License-Identifier: GPL-3.0-only

//! Terminal-based kiosk
//!
//! Renders the station's widget registry with ratatui and drives it from the
//! keyboard. Timers run through a [`HeadlessDriver`] polled on every frame.

use crate::config::Config;
use crate::errors::AppResult;
use crate::constants::timing::TERMINAL_POLL;
use crate::station::styles::{Rgb, Tone, palette};
use crate::station::{
    FormField, HeadlessDriver, ScanEvent, ScreenId, Station, StationEvent, WidgetId,
    WidgetRegistry,
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};
use std::io::{self, stdout};
use std::time::Instant;
use tracing::info;

/// Run the terminal kiosk
pub fn run(config: &Config) -> AppResult<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
) -> AppResult<()> {
    let station = Station::with_settings(config.layout.surface(), config.station_settings());
    let mut driver = HeadlessDriver::new(station);
    let mut keys = KeyState::default();

    info!("Terminal kiosk started");

    loop {
        let now = Instant::now();
        driver.advance(now);

        let clock = config.format_clock(&chrono::Local::now());
        if driver.station().registry().text(driver.station().refs().top_bar.clock) != clock {
            driver.dispatch(StationEvent::Clock(clock), now);
        }

        terminal.draw(|f| draw(f, driver.station(), &keys))?;

        // Handle input with timeout for timer updates
        if event::poll(TERMINAL_POLL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match keys.handle(key, driver.station()) {
                KeyOutcome::Quit => break,
                KeyOutcome::Events(events) => {
                    let now = Instant::now();
                    for event in events {
                        driver.dispatch(event, now);
                    }
                }
            }
        }
    }

    info!("Terminal kiosk stopped");
    Ok(())
}

/// What a key press asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum KeyOutcome {
    Quit,
    Events(Vec<StationEvent>),
}

/// Keyboard state that lives outside the station
#[derive(Debug, Clone)]
struct KeyState {
    /// Simulated link state toggled with `n`
    is_lan: bool,
    /// Focused form entry on the fields panel
    focus: usize,
}

impl Default for KeyState {
    fn default() -> Self {
        Self {
            is_lan: true,
            focus: 0,
        }
    }
}

impl KeyState {
    fn focused_field(&self) -> FormField {
        FormField::ALL[self.focus % FormField::ALL.len()]
    }

    /// Translate a key press into station events
    ///
    /// On the fields panel printable keys type into the focused entry, so
    /// navigation there uses F1-F3 or Esc.
    fn handle(&mut self, key: KeyEvent, station: &Station) -> KeyOutcome {
        use KeyOutcome::Events;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Quit;
        }

        let screen = station.screen();
        let navigate = |target| Events(vec![StationEvent::Navigate(target)]);
        match key.code {
            KeyCode::F(1) => return navigate(ScreenId::Scan),
            KeyCode::F(2) => return navigate(ScreenId::Fields),
            KeyCode::F(3) => return navigate(ScreenId::Settings),
            _ => {}
        }

        if screen == ScreenId::Fields {
            return self.handle_form_key(key, station);
        }

        let scan = |event| Events(vec![StationEvent::Scan(event)]);
        match key.code {
            KeyCode::Char('q') => KeyOutcome::Quit,
            KeyCode::Char('1') => navigate(ScreenId::Scan),
            KeyCode::Char('2') => navigate(ScreenId::Fields),
            KeyCode::Char('3') => navigate(ScreenId::Settings),
            KeyCode::Char('r') => {
                let registry = station.registry();
                let on = registry.is_checked(station.refs().scan.camera_switch);
                scan(if on {
                    ScanEvent::CameraToggleOff
                } else {
                    ScanEvent::CameraToggleOn
                })
            }
            KeyCode::Char('c') | KeyCode::Char(' ') => scan(ScanEvent::CaptureRequested),
            KeyCode::Char('t') => scan(ScanEvent::RetakeRequested),
            KeyCode::Char('x') => scan(ScanEvent::ClearRequested),
            KeyCode::Char('n') => {
                self.is_lan = !self.is_lan;
                Events(vec![StationEvent::NetworkStatus(self.is_lan)])
            }
            KeyCode::Char('+') | KeyCode::Char('=') if screen == ScreenId::Settings => {
                let value = station.brightness().saturating_add(5).min(100);
                Events(vec![StationEvent::BrightnessChanged(value)])
            }
            KeyCode::Char('-') if screen == ScreenId::Settings => {
                let value = station.brightness().saturating_sub(5);
                Events(vec![StationEvent::BrightnessChanged(value)])
            }
            KeyCode::Char('R') if screen == ScreenId::Settings => {
                Events(vec![StationEvent::RestartRequested])
            }
            _ => Events(Vec::new()),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, station: &Station) -> KeyOutcome {
        let field = self.focused_field();
        let current = station.registry().text(station.refs().form.entry(field));

        let events = match key.code {
            KeyCode::Esc => vec![StationEvent::Navigate(ScreenId::Scan)],
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % FormField::ALL.len();
                Vec::new()
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + FormField::ALL.len() - 1) % FormField::ALL.len();
                Vec::new()
            }
            KeyCode::Enter => vec![StationEvent::SubmitForm],
            KeyCode::Backspace => {
                let mut value = current.to_string();
                value.pop();
                vec![StationEvent::FieldEdited(field, value)]
            }
            KeyCode::Char(ch) => {
                let mut value = current.to_string();
                value.push(ch);
                vec![StationEvent::FieldEdited(field, value)]
            }
            _ => Vec::new(),
        };

        KeyOutcome::Events(events)
    }
}

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

fn draw(f: &mut Frame, station: &Station, keys: &KeyState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    f.render_widget(TopBar { station }, rows[0]);

    match station.screen() {
        ScreenId::Scan => draw_scan_panel(f, station, rows[1]),
        ScreenId::Fields => draw_fields_panel(f, station, keys, rows[1]),
        ScreenId::Settings => draw_settings_panel(f, station, rows[1]),
    }

    let toast_style = Style::default().fg(Color::White).bg(rgb(palette::TOP_BAR));
    let toasts: Vec<Span> = station
        .toasts()
        .visible()
        .iter()
        .map(|t| Span::styled(format!(" {} ", t.message), toast_style))
        .collect();
    f.render_widget(Paragraph::new(Line::from(toasts)).centered(), rows[2]);

    f.render_widget(NavBar { station }, rows[3]);
    f.render_widget(StatusBar { message: help_message(station.screen()) }, rows[4]);
}

fn help_message(screen: ScreenId) -> &'static str {
    match screen {
        ScreenId::Scan => {
            "r camera | c capture | t retake | x clear | n network | 1-3 panels | q quit"
        }
        ScreenId::Fields => "Tab next field | Enter save | Esc back | F1-F3 panels | Ctrl+C quit",
        ScreenId::Settings => "+/- brightness | R restart | 1-3 panels | q quit",
    }
}

fn chip_span(registry: &WidgetRegistry, id: WidgetId) -> Span<'_> {
    let tone: Tone = registry.tone(id);
    Span::styled(
        format!(" {} ", registry.text(id)),
        Style::default().fg(Color::White).bg(rgb(tone.color())),
    )
}

/// Titles, chips and clock on one line
struct TopBar<'a> {
    station: &'a Station,
}

impl Widget for TopBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let registry = self.station.registry();
        let refs = self.station.refs();
        let bar_style = Style::default()
            .fg(Color::White)
            .bg(rgb(palette::TOP_BAR));

        // Fill background
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(' ');
                cell.set_style(bar_style);
            }
        }

        let title = format!(
            " {} | {} ",
            registry.text(refs.top_bar.mission_title),
            registry.text(refs.top_bar.station_title)
        );
        buf.set_string(area.x, area.y, &title, bar_style.add_modifier(Modifier::BOLD));

        let status = Line::from(vec![
            chip_span(registry, refs.scan.chip_cam),
            Span::raw(" "),
            chip_span(registry, refs.scan.chip_ocr),
            Span::raw(" "),
            chip_span(registry, refs.top_bar.chip_net),
            Span::styled(format!("  {} ", registry.text(refs.top_bar.clock)), bar_style),
        ]);
        let width = status.width() as u16;
        let x = area.x + area.width.saturating_sub(width);
        buf.set_line(x, area.y, &status, width.min(area.width));
    }
}

/// SCAN / FIELDS / SETTINGS with the checked button highlighted
struct NavBar<'a> {
    station: &'a Station,
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let registry = self.station.registry();
        let panels = &self.station.refs().panels;

        let spans: Vec<Span> = ScreenId::ALL
            .into_iter()
            .enumerate()
            .flat_map(|(i, screen)| {
                let id = panels.nav_button(screen);
                let style = if registry.is_checked(id) {
                    Style::default().fg(Color::White).bg(rgb(Tone::Info.color()))
                } else {
                    Style::default()
                };
                [
                    Span::styled(format!(" {} {} ", i + 1, registry.text(id)), style),
                    Span::raw("    "),
                ]
            })
            .collect();

        Paragraph::new(Line::from(spans)).centered().render(area, buf);
    }
}

/// Status bar widget
struct StatusBar<'a> {
    message: &'a str,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(' ');
                cell.set_bg(Color::DarkGray);
            }
        }

        // Render text
        let text = if self.message.len() > area.width as usize {
            &self.message[..area.width as usize]
        } else {
            self.message
        };

        buf.set_string(
            area.x,
            area.y,
            text,
            Style::default().fg(Color::White).bg(Color::DarkGray),
        );
    }
}

fn enabled_style(enabled: bool) -> Style {
    if enabled {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_scan_panel(f: &mut Frame, station: &Station, area: Rect) {
    let registry = station.registry();
    let scan = &station.refs().scan;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(area);

    // Camera card
    let mut preview = vec![Line::from(registry.text(scan.preview_label)).centered()];
    if registry.is_visible(scan.spinner) {
        preview.push(Line::from(""));
        preview.push(
            Line::styled("◌ reading card…", Style::default().fg(rgb(Tone::Warning.color())))
                .centered(),
        );
    }
    if registry.is_visible(scan.overlay) {
        preview.push(Line::from(""));
        let boxes: Vec<Span> = registry
            .children(scan.overlay)
            .iter()
            .filter(|id| registry.is_visible(**id))
            .map(|_| Span::styled(" [▭▭▭] ", Style::default().fg(rgb(palette::LIGHT_GREEN))))
            .collect();
        preview.push(Line::from(boxes).centered());
    }
    f.render_widget(
        Paragraph::new(preview).block(Block::default().borders(Borders::ALL).title(" Camera ")),
        columns[0],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(7)])
        .split(columns[1]);

    // Control card
    let switch = if registry.is_checked(scan.camera_switch) {
        "[on ]"
    } else {
        "[off]"
    };
    let button = |id: WidgetId, key: &str| {
        Line::styled(
            format!("({}) {}", key, registry.text(id)),
            enabled_style(registry.is_enabled(id)),
        )
    };
    let controls = vec![
        Line::from(format!("(r) {} {}", switch, registry.text(scan.camera_switch))),
        button(scan.capture_button, "c"),
        button(scan.retake_button, "t"),
        button(scan.clear_button, "x"),
    ];
    f.render_widget(
        Paragraph::new(controls).block(Block::default().borders(Borders::ALL).title(" Controls ")),
        right[0],
    );

    // Results card
    let results_area = right[1];
    let block = Block::default().borders(Borders::ALL).title(" Result ");
    let inner = block.inner(results_area);
    f.render_widget(block, results_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(1)])
        .split(inner);
    let fields: Vec<Line> = [scan.result_name, scan.result_id, scan.result_dob, scan.result_sex]
        .into_iter()
        .map(|id| {
            let caption = registry.get(id).and_then(|w| w.name.as_deref()).unwrap_or_default();
            Line::from(vec![
                Span::raw(format!("{:<10}", caption)),
                Span::styled(registry.text(id), Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(fields), rows[0]);

    let percent = registry.value(scan.confidence_bar).clamp(0, 100) as u16;
    f.render_widget(
        Gauge::default()
            .percent(percent)
            .label(registry.text(scan.confidence_label))
            .gauge_style(Style::default().fg(rgb(Tone::Positive.color()))),
        rows[1],
    );
}

fn draw_fields_panel(f: &mut Frame, station: &Station, keys: &KeyState, area: Rect) {
    let registry = station.registry();
    let form = &station.refs().form;
    let focused = keys.focused_field();

    let mut lines: Vec<Line> = FormField::ALL
        .into_iter()
        .map(|field| {
            let value = registry.text(form.entry(field));
            let marker = if field == focused { "▶" } else { " " };
            let shown = if value.is_empty() && field != focused {
                Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(format!("{}▏", value), Style::default().add_modifier(Modifier::BOLD))
            };
            Line::from(vec![
                Span::raw(format!("{} {:<15}", marker, field.label())),
                shown,
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("[Enter] {}", registry.text(form.submit)),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    if registry.is_visible(form.error) {
        lines.push(Line::styled(
            registry.text(form.error),
            Style::default().fg(rgb(registry.tone(form.error).color())),
        ));
    }

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Manual entry ")),
        area,
    );
}

fn draw_settings_panel(f: &mut Frame, station: &Station, area: Rect) {
    let registry = station.registry();
    let refs = &station.refs().settings;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let device = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", crate::constants::text::DEVICE));
    let inner = device.inner(columns[0]);
    f.render_widget(device, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);
    f.render_widget(Paragraph::new(registry.text(refs.brightness)), rows[0]);
    f.render_widget(
        Gauge::default()
            .percent(registry.value(refs.brightness).clamp(0, 100) as u16)
            .gauge_style(Style::default().fg(rgb(Tone::Info.color()))),
        rows[1],
    );
    f.render_widget(
        Paragraph::new(Line::styled(
            format!("(R) {}", registry.text(refs.restart)),
            Style::default().fg(rgb(Tone::Alert.color())),
        )),
        rows[3],
    );

    f.render_widget(
        Paragraph::new(registry.text(refs.version)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", crate::constants::text::STATION)),
        ),
        columns[1],
    );
}
