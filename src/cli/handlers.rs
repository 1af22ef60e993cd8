use anyhow::{Result, anyhow};
use chrono::{Local, NaiveDate};
use std::str::FromStr;

use crate::cli::args::TasbihCommands;
use crate::config::AppConfig;
use crate::db::KvStore;
use crate::models::{FASTING_POINTS, Intensity, TaskId, badge_for, next_badge};
use crate::tracker::{
    DailyTaskStore, ShareCard, WINDOW_DAYS, active_days, calculate_streaks, consistency_window,
};
use crate::utils::format::{format_date_id, parse_date, progress_bar};
use crate::utils::hijri::hijri_string;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const EMERALD: &str = "\x1b[38;2;16;185;129m";

fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => parse_date(s),
        None => Ok(Local::now().date_naive()),
    }
}

// ─── Toggle / fast ───────────────────────────────────────────────────────────

pub fn handle_toggle<S: KvStore>(
    store: &DailyTaskStore<S>,
    config: &AppConfig,
    task_str: &str,
    date: Option<&str>,
) -> Result<()> {
    let task = TaskId::from_str(task_str).map_err(|_| {
        anyhow!(
            "Unknown task '{}'. Use: subuh, zuhur, ashar, maghrib, isya, tarawih, tadarus",
            task_str
        )
    })?;
    let date = resolve_date(date)?;

    let record = store.toggle_task(date, task);
    if record.is_done(task) {
        println_colored!(GREEN, "  ✓ {} — selesai (+{})", task.display_name(), task.points());
    } else {
        println_colored!(DIM, "  ○ {} — dibatalkan", task.display_name());
    }
    println_colored!(DIM, "  Progress {}: {}%", date, record.completion_percent());

    // Streaks must reflect the write right away
    let streaks = calculate_streaks(store, date, Some(&record), config.tracker.max_lookback_days);
    if task.is_prayer() {
        println_colored!(AMBER, "  Streak shalat: {} hari", streaks.prayer);
    } else if task == TaskId::Tarawih {
        println_colored!(AMBER, "  Streak tarawih: {} hari", streaks.tarawih);
    }
    Ok(())
}

pub fn handle_fast<S: KvStore>(
    store: &DailyTaskStore<S>,
    config: &AppConfig,
    date: Option<&str>,
    off: bool,
) -> Result<()> {
    let date = resolve_date(date)?;
    let record = store.set_fasting(date, !off);

    if record.is_fasting {
        println_colored!(GREEN, "  ✓ Puasa {} tercatat", date);
    } else {
        println_colored!(DIM, "  ○ Puasa {} dihapus", date);
    }

    let streaks = calculate_streaks(store, date, Some(&record), config.tracker.max_lookback_days);
    let badge = badge_for(streaks.fasting);
    println_colored!(
        AMBER,
        "  Streak puasa: {} hari  {} {}",
        streaks.fasting,
        badge.icon,
        badge.label
    );
    Ok(())
}

// ─── Today ───────────────────────────────────────────────────────────────────

pub fn handle_today<S: KvStore>(store: &DailyTaskStore<S>, date: Option<&str>) -> Result<()> {
    let date = resolve_date(date)?;
    let record = store.get_record(date);
    let percent = record.completion_percent();

    println!();
    println_colored!(EMERALD, "  Ibadah Harian — {}", format_date_id(date));
    println!();

    let fasting_icon = if record.is_fasting {
        format!("{}✓\x1b[0m", GREEN)
    } else {
        "○".to_string()
    };
    println!("  {}  {:<20} +{}", fasting_icon, "Puasa", FASTING_POINTS);

    for task in TaskId::all() {
        let icon = if record.is_done(task) {
            format!("{}✓\x1b[0m", GREEN)
        } else {
            "○".to_string()
        };
        println!("  {}  {:<20} +{}", icon, task.display_name(), task.points());
    }

    println!();
    println_colored!(
        BOLD,
        "  {}  {}%  ({} dari {} selesai)",
        progress_bar(percent as u32, 100, 20),
        percent,
        record.completed_tasks.len(),
        TaskId::all().len()
    );
    println!();
    Ok(())
}

// ─── Streaks ─────────────────────────────────────────────────────────────────

pub fn handle_streaks<S: KvStore>(store: &DailyTaskStore<S>, config: &AppConfig) -> Result<()> {
    let today = Local::now().date_naive();
    let streaks = calculate_streaks(store, today, None, config.tracker.max_lookback_days);
    let badge = badge_for(streaks.fasting);

    println!();
    println_colored!(EMERALD, "  {}  {}", badge.icon, badge.label);
    println_colored!(DIM, "  Streak Puasa: {} Hari", streaks.fasting);
    if let Some(next) = next_badge(streaks.fasting) {
        println_colored!(
            DIM,
            "  {} hari lagi menuju {} {}",
            next.threshold - streaks.fasting,
            next.icon,
            next.label
        );
    }
    println!();
    println_colored!(BOLD, "  Streak Shalat:   {} hari", streaks.prayer);
    println_colored!(BOLD, "  Streak Tarawih:  {} hari", streaks.tarawih);
    println!();
    Ok(())
}

// ─── Heatmap ─────────────────────────────────────────────────────────────────

fn intensity_color(intensity: Intensity) -> &'static str {
    match intensity {
        Intensity::None => DIM,
        Intensity::Low | Intensity::Medium => AMBER,
        Intensity::High | Intensity::Full => GREEN,
    }
}

pub fn handle_heatmap<S: KvStore>(store: &DailyTaskStore<S>) -> Result<()> {
    let today = Local::now().date_naive();
    let window = consistency_window(store, today);

    println!();
    println_colored!(EMERALD, "  Konsistensi Ramadan — {} hari terakhir", WINDOW_DAYS);
    println!();
    for row in window.chunks(10) {
        print!("  ");
        for day in row {
            print!("{}{}\x1b[0m ", intensity_color(day.intensity), day.intensity.glyph());
        }
        if let (Some(first), Some(last)) = (row.first(), row.last()) {
            print!(
                "  {}{} … {}\x1b[0m",
                DIM,
                first.date.format("%d/%m"),
                last.date.format("%d/%m")
            );
        }
        println!();
    }
    println!();
    println_colored!(DIM, "  Kurang ○ ◔ ◑ ◕ ● Lebih");
    println_colored!(
        DIM,
        "  Hari aktif: {}/{}",
        active_days(&window),
        WINDOW_DAYS
    );
    println!();
    Ok(())
}

// ─── Journal ─────────────────────────────────────────────────────────────────

pub fn handle_journal<S: KvStore>(
    store: &DailyTaskStore<S>,
    text: Option<&str>,
    date: Option<&str>,
) -> Result<()> {
    let date = resolve_date(date)?;
    match text {
        Some(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(anyhow!("Journal text is empty"));
            }
            store.save_journal(date, text);
            println_colored!(GREEN, "  ✓ Refleksi {} tersimpan", date);
        }
        None => {
            let entry = store.journal(date);
            println!();
            println_colored!(EMERALD, "  Refleksi Harian — {}", format_date_id(date));
            println!();
            if entry.is_empty() {
                println_colored!(DIM, "  Apa yang kamu syukuri hari ini?");
            } else {
                for line in entry.lines() {
                    println!("  {}", line);
                }
            }
            println!();
        }
    }
    Ok(())
}

// ─── Tasbih ──────────────────────────────────────────────────────────────────

pub fn handle_tasbih<S: KvStore>(
    store: &DailyTaskStore<S>,
    config: &AppConfig,
    action: &TasbihCommands,
) -> Result<()> {
    let mut state = store.load_tasbih(config.tasbih.default_target);
    let mut reached = false;

    match action {
        TasbihCommands::Tap { times } => {
            for _ in 0..*times {
                reached |= state.tap();
            }
        }
        TasbihCommands::Reset => state.reset(),
        TasbihCommands::Next => state.next_dhikr(),
        TasbihCommands::Prev => state.prev_dhikr(),
        TasbihCommands::Target { value } => {
            if *value == 0 {
                return Err(anyhow!("Target must be at least 1"));
            }
            state.set_target(*value);
        }
        TasbihCommands::Custom { text } => state.custom_text = text.clone(),
        TasbihCommands::Show => {}
    }
    store.save_tasbih(&state);

    let dhikr = state.dhikr();
    let target = if state.is_unlimited() {
        "∞".to_string()
    } else {
        state.target.to_string()
    };

    println!();
    println_colored!(EMERALD, "  {}", dhikr.name);
    if !state.recitation().is_empty() {
        println_colored!(BOLD, "  {}", state.recitation());
    }
    if !dhikr.meaning.is_empty() {
        println_colored!(DIM, "  \"{}\"", dhikr.meaning);
    }
    println!();
    println_colored!(
        BOLD,
        "  {}  {} / {}",
        progress_bar(state.progress_percent() as u32, 100, 20),
        state.count,
        target
    );
    if reached {
        println_colored!(GREEN, "  ✓ Target {} tercapai", state.target);
    }
    println!();
    Ok(())
}

// ─── Share ───────────────────────────────────────────────────────────────────

pub fn handle_share<S: KvStore>(
    store: &DailyTaskStore<S>,
    config: &AppConfig,
    date: Option<&str>,
) -> Result<()> {
    let date = resolve_date(date)?;
    let mut card = ShareCard::build(store, date, None);
    if let Some(hijri) = hijri_string(date, config.calendar.hijri_offset) {
        card = card.with_hijri(hijri);
    }

    println!();
    println!("{}", card.render_card());
    println!();
    println!("{}", card.to_text());
    println!();
    Ok(())
}
