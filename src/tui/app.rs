use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::db::KvStore;
use crate::models::{ConsistencyDay, DailyRecord, StreakResult, TasbihState};
use crate::tracker::{DailyTaskStore, ShareCard, calculate_streaks, consistency_window};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{checklist, consistency, header, journal, statusbar, streak, tasbih};
use crate::utils::hijri::{hijri_string, ramadan_day};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Dashboard,
    Tasbih,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    JournalInput,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub focus_row: usize,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub show_share: bool,

    // Cached state, refreshed after writes and on day rollover
    pub today: NaiveDate,
    pub hijri: Option<String>,
    pub ramadan_day: Option<usize>,
    pub record: DailyRecord,
    pub streaks: StreakResult,
    pub window: Vec<ConsistencyDay>,
    pub journal: String,
    pub tasbih: TasbihState,
}

impl App {
    pub fn new(config: AppConfig, today: NaiveDate) -> Self {
        let tasbih = TasbihState::with_target(config.tasbih.default_target);
        App {
            view: View::Dashboard,
            config,
            focus_row: 0,
            should_quit: false,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            show_share: false,
            today,
            hijri: None,
            ramadan_day: None,
            record: DailyRecord::empty(today),
            streaks: StreakResult::default(),
            window: Vec::new(),
            journal: String::new(),
            tasbih,
        }
    }

    pub fn load<S: KvStore>(&mut self, store: &DailyTaskStore<S>) {
        let offset = self.config.calendar.hijri_offset;
        self.hijri = hijri_string(self.today, offset);
        self.ramadan_day = ramadan_day(self.today, offset);
        self.record = store.get_record(self.today);
        self.journal = store.journal(self.today);
        self.tasbih = store.load_tasbih(self.config.tasbih.default_target);
        self.refresh_stats(store);
    }

    /// Recompute streaks and the heatmap, using the in-memory record for today.
    pub fn refresh_stats<S: KvStore>(&mut self, store: &DailyTaskStore<S>) {
        self.streaks = calculate_streaks(
            store,
            self.today,
            Some(&self.record),
            self.config.tracker.max_lookback_days,
        );
        self.window = consistency_window(store, self.today);
    }

    pub fn tick<S: KvStore>(&mut self, store: &DailyTaskStore<S>, now: NaiveDate) {
        if now != self.today {
            log::info!("Day changed {} -> {}", self.today, now);
            self.today = now;
            self.load(store);
        }
    }

    pub fn handle_key<S: KvStore>(&mut self, key: KeyEvent, store: &DailyTaskStore<S>) {
        match self.input_mode {
            InputMode::JournalInput => self.handle_journal_input(key, store),
            InputMode::Normal => match self.view {
                View::Dashboard => self.handle_dashboard_key(key, store),
                View::Tasbih => self.handle_tasbih_key(key, store),
                View::Help => self.handle_help_key(key),
            },
        }
    }

    fn handle_dashboard_key<S: KvStore>(&mut self, key: KeyEvent, store: &DailyTaskStore<S>) {
        if self.show_share {
            self.show_share = false;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.view = View::Help,
            KeyCode::Char('t') => self.view = View::Tasbih,
            KeyCode::Char('p') => self.show_share = true,
            KeyCode::Char('j') => {
                self.input_mode = InputMode::JournalInput;
                self.input_buffer = self.journal.clone();
            }
            KeyCode::Up => self.focus_row = self.focus_row.saturating_sub(1),
            KeyCode::Down => {
                if self.focus_row + 1 < checklist::ROWS {
                    self.focus_row += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_row(self.focus_row, store),
            KeyCode::Char('f') => self.toggle_row(0, store),
            KeyCode::Char(c) => {
                if let Some(row) = c.to_digit(10).map(|d| d as usize) {
                    if row < checklist::ROWS {
                        self.focus_row = row;
                        self.toggle_row(row, store);
                    }
                }
            }
            _ => {}
        }
    }

    fn toggle_row<S: KvStore>(&mut self, row: usize, store: &DailyTaskStore<S>) {
        let current = self.record.clone();
        self.record = match checklist::task_at(row) {
            Some(task) => store.toggle_task_on(current, task),
            None => {
                let fasting = !current.is_fasting;
                store.set_fasting_on(current, fasting)
            }
        };
    }

    fn handle_tasbih_key<S: KvStore>(&mut self, key: KeyEvent, store: &DailyTaskStore<S>) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('t') => {
                self.view = View::Dashboard;
                return;
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.tasbih.tap();
            }
            KeyCode::Char('r') => self.tasbih.reset(),
            KeyCode::Right => self.tasbih.next_dhikr(),
            KeyCode::Left => self.tasbih.prev_dhikr(),
            KeyCode::Char('g') => self.tasbih.cycle_target(),
            _ => return,
        }
        store.save_tasbih(&self.tasbih);
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            self.view = View::Dashboard;
        }
    }

    fn handle_journal_input<S: KvStore>(&mut self, key: KeyEvent, store: &DailyTaskStore<S>) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            KeyCode::Enter => {
                let text = self.input_buffer.trim().to_string();
                store.save_journal(self.today, &text);
                self.journal = text;
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            _ => {}
        }
    }

    pub fn share_card<S: KvStore>(&self, store: &DailyTaskStore<S>) -> ShareCard {
        let card = ShareCard::build(store, self.today, Some(&self.record));
        match &self.hijri {
            Some(hijri) => card.with_hijri(hijri.clone()),
            None => card,
        }
    }

    pub fn draw(&self, frame: &mut Frame, share_text: Option<&str>) {
        match self.view {
            View::Dashboard => self.draw_dashboard(frame),
            View::Tasbih => {
                frame.render_widget(Block::default().style(theme::base()), frame.area());
                tasbih::render(frame, frame.area(), &self.tasbih);
            }
            View::Help => {
                self.draw_dashboard(frame);
                self.draw_help_overlay(frame);
            }
        }

        if self.input_mode == InputMode::JournalInput {
            self.draw_journal_input(frame);
        }

        if let Some(text) = share_text {
            self.draw_share_overlay(frame, text);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            outer_chunks[0],
            self.today,
            self.hijri.as_deref(),
            self.ramadan_day,
        );
        statusbar::render(frame, outer_chunks[2]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(outer_chunks[1]);

        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(checklist::ROWS as u16 + 2),
                Constraint::Min(3),
            ])
            .split(columns[0]);

        checklist::render(frame, left_chunks[0], &self.record, self.focus_row);
        journal::render(frame, left_chunks[1], &self.journal);

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(columns[1]);

        streak::render(frame, right_chunks[0], &self.streaks);
        consistency::render(frame, right_chunks[1], &self.window);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let popup_area = centered(frame.area(), 2, 2);
        frame.render_widget(Clear, popup_area);

        let keys = [
            ("[↑ ↓]", "Pilih baris"),
            ("[Enter]", "Centang / batalkan"),
            ("[0-7]", "Centang baris langsung"),
            ("[f]", "Puasa hari ini"),
            ("[j]", "Tulis refleksi"),
            ("[t]", "Tasbih digital"),
            ("[p]", "Bagikan progress"),
            ("[?]", "Bantuan"),
            ("[Esc]", "Keluar"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Tombol",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, label) in keys {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {:<10}", key), theme::gold()),
                Span::styled(label, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Bantuan ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }

    fn draw_journal_input(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 6,
            y: (area.height / 2).saturating_sub(3),
            width: area.width * 2 / 3,
            height: 6.min(area.height),
        };
        frame.render_widget(Clear, popup_area);

        let text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  ", theme::dim()),
                Span::styled(self.input_buffer.as_str(), theme::bold()),
                Span::styled("█", theme::amber()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "  [Enter] simpan  ·  [Esc] batal",
                theme::dim(),
            )),
        ];

        let block = Block::default()
            .title(Span::styled(" Refleksi Harian ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::amber())
            .style(theme::surface());

        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, popup_area);
    }

    fn draw_share_overlay(&self, frame: &mut Frame, text: &str) {
        let popup_area = centered(frame.area(), 2, 2);
        frame.render_widget(Clear, popup_area);

        let mut lines: Vec<Line> = text
            .lines()
            .map(|l| Line::from(Span::styled(format!("  {}", l), theme::bold())))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("  [tombol apa saja] tutup", theme::dim())));

        let block = Block::default()
            .title(Span::styled(" Bagikan Progress ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::emerald())
            .style(theme::surface());

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, popup_area);
    }
}

/// Rect of `width / w_div` by `height / h_div`, centred in `area`.
fn centered(area: Rect, w_div: u16, h_div: u16) -> Rect {
    let width = area.width / w_div;
    let height = area.height / h_div;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Run the TUI event loop.
pub fn run<S: KvStore>(store: &DailyTaskStore<S>, config: AppConfig) -> Result<()> {
    let mut app = App::new(config, Local::now().date_naive());
    app.load(store);

    // Every write marks the cached stats stale; they are rebuilt before the next draw
    let stale = Rc::new(Cell::new(false));
    let flag = Rc::clone(&stale);
    let subscription = store.subscribe(move |event| {
        log::debug!("Tracker changed: {:?}", event);
        flag.set(true);
    });

    let mut terminal = ratatui::init();
    let events = EventHandler::new(Duration::from_secs(30));

    let result = (|| -> Result<()> {
        loop {
            if stale.replace(false) {
                app.refresh_stats(store);
            }
            let share_text = app.show_share.then(|| app.share_card(store).to_text());
            terminal.draw(|frame| app.draw(frame, share_text.as_deref()))?;

            match events.next()? {
                Event::Key(key) => {
                    app.handle_key(key, store);
                    if app.should_quit {
                        return Ok(());
                    }
                }
                Event::Resize => {}
                Event::Tick => app.tick(store, Local::now().date_naive()),
            }
        }
    })();

    ratatui::restore();
    store.unsubscribe(subscription);
    result
}
