// Time Scheduler
// Demo entry point: renders a schedule file as a text week grid

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::Parser;

use time_scheduler::models::date_format::DateFormat;
use time_scheduler::models::event::Event;
use time_scheduler::models::resource::Resource;
use time_scheduler::services::interaction::CellSelection;
use time_scheduler::services::render::DefaultRenderer;
use time_scheduler::services::schedule_file::load_schedule;
use time_scheduler::services::scheduler::TimeScheduler;
use time_scheduler::services::settings::SettingsService;
use time_scheduler::ui::render_text;
use time_scheduler::utils::date::start_of_day;
use time_scheduler::SchedulerSettings;

#[derive(Parser)]
#[command(name = "time-scheduler")]
#[command(version)]
#[command(about = "Render a weekly resource/event schedule as a text grid", long_about = None)]
struct Cli {
    /// Schedule document with `resources` and `events`
    schedule: PathBuf,

    /// Any day of the week to show (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Settings file, defaults to the platform config directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// IANA timezone overriding the settings
    #[arg(long)]
    timezone: Option<String>,

    /// First day of the week, 0 = Sunday .. 6 = Saturday
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=6))]
    week_starts_on: Option<u8>,

    /// Day label pattern, e.g. "dd/MM/yyyy"
    #[arg(long)]
    format: Option<DateFormat>,

    /// Show the per-day footer row
    #[arg(long)]
    footer: bool,

    /// Show the side bar column
    #[arg(long)]
    side_bar: bool,

    /// Hide the notes badge on events
    #[arg(long)]
    hide_notes_badge: bool,

    /// Resolve a click on RESOURCE_ID:DAY_INDEX and print the selection
    #[arg(long, value_name = "RESOURCE_ID:DAY_INDEX")]
    click: Option<String>,
}

fn load_settings(cli: &Cli) -> Result<SchedulerSettings> {
    let mut settings = match &cli.config {
        Some(path) => SettingsService::load(path)?,
        None => SettingsService::default_path()
            .map(|path| SettingsService::load_or_default(&path))
            .unwrap_or_default(),
    };

    if let Some(timezone) = &cli.timezone {
        settings.timezone = timezone.clone();
    }
    if let Some(week_starts_on) = cli.week_starts_on {
        settings.week_starts_on = week_starts_on;
    }
    if let Some(format) = cli.format {
        settings.date_format = format;
    }
    settings.show_footer |= cli.footer;
    settings.show_side_bar |= cli.side_bar;
    if cli.hide_notes_badge {
        settings.show_notes_badge = false;
    }

    settings.validate()?;
    Ok(settings)
}

fn parse_click(spec: &str) -> Result<(String, usize)> {
    let (resource_id, day) = spec
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("click must look like RESOURCE_ID:DAY_INDEX, got {:?}", spec))?;
    let day_index = day
        .parse::<usize>()
        .with_context(|| format!("invalid day index {:?}", day))?;
    Ok((resource_id.to_string(), day_index))
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    let schedule = load_schedule(&cli.schedule)?;

    let tz: Tz = settings.time_zone();
    let now = Utc::now();
    let reference = match cli.date {
        Some(date) => start_of_day(date, &tz).with_timezone(&Utc),
        None => now,
    };

    log::info!(
        "Rendering week of {} in {} (week starts on {})",
        reference.with_timezone(&tz).date_naive(),
        tz,
        settings.week_starts_on
    );

    let scheduler = TimeScheduler::new(settings);
    let renderer = DefaultRenderer::<Resource, Event>::new();
    let view = scheduler.render(schedule.resources(), schedule.events(), reference, now, &renderer);
    println!("{}", render_text(&view));

    if let Some(spec) = &cli.click {
        let (resource_id, day_index) = parse_click(spec)?;
        let resource = schedule
            .find_resource(&resource_id)
            .ok_or_else(|| anyhow!("unknown resource {:?}", resource_id))?;
        let resources = schedule.resources().unwrap_or(&[]);
        let events = schedule.events().unwrap_or(&[]);

        let mut print_selection = |selection: &CellSelection<Event>, slot: chrono::DateTime<Tz>| {
            match serde_json::to_string_pretty(selection) {
                Ok(json) => {
                    println!("\nSelected {} ({}):\n{}", slot.date_naive(), resource_id, json)
                }
                Err(e) => log::error!("Failed to serialize selection: {}", e),
            }
        };
        scheduler
            .click(resource, day_index, resources, events, reference, &mut print_selection)
            .ok_or_else(|| anyhow!("day index {} is outside the week (0-6)", day_index))?;
    }

    Ok(())
}
