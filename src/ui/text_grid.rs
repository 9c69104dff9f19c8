//! Plain-text rendering of a [`SchedulerView`].
//!
//! Column widths follow the view's pixel layout at roughly ten pixels per
//! character. Today's column header is marked with `*` and events carrying
//! notes with `✎` when the notes badge is enabled.

use crate::services::scheduler::{CellView, SchedulerView};

const PIXELS_PER_CHAR: u32 = 10;
const MIN_COLUMN_CHARS: usize = 6;
const RESOURCE_COLUMN_PIXELS: u32 = 160;
const NOTES_BADGE: char = '✎';
const TODAY_MARKER: char = '*';

fn chars_for(pixels: u32) -> usize {
    ((pixels / PIXELS_PER_CHAR) as usize).max(MIN_COLUMN_CHARS)
}

/// Pad or truncate `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        let mut padded = text.to_string();
        padded.extend(std::iter::repeat(' ').take(width - count));
        padded
    } else {
        let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }
}

fn cell_text(cell: &CellView) -> String {
    cell.events
        .iter()
        .map(|chip| {
            if chip.show_notes_badge {
                format!("{} {}", chip.label, NOTES_BADGE)
            } else {
                chip.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn row_line(
    first: &str,
    cells: impl Iterator<Item = String>,
    last: Option<&str>,
    widths: (usize, usize),
) -> String {
    let (side_width, day_width) = widths;
    let mut columns = vec![fit(first, side_width)];
    columns.extend(cells.map(|text| fit(&text, day_width)));
    if let Some(last) = last {
        columns.push(fit(last, side_width));
    }
    format!("| {} |", columns.join(" | "))
}

pub fn render_text(view: &SchedulerView) -> String {
    let side_width = chars_for(RESOURCE_COLUMN_PIXELS);
    let day_width = chars_for(view.layout.col_width);
    let widths = (side_width, day_width);

    let mut lines = Vec::new();
    if view.loading {
        lines.push("Loading...".to_string());
    }
    lines.push(view.header.clone());

    let header = row_line(
        &view.resources_header,
        view.days.iter().map(|day| {
            if day.is_today {
                format!("{}{}", day.formatted_date, TODAY_MARKER)
            } else {
                day.formatted_date.clone()
            }
        }),
        view.side_bar_header.as_deref(),
        widths,
    );
    let rule = "-".repeat(header.chars().count());
    lines.push(rule.clone());
    lines.push(header);
    lines.push(rule.clone());

    for row in &view.rows {
        lines.push(row_line(
            &row.label,
            row.cells.iter().map(cell_text),
            row.side_bar.as_deref(),
            widths,
        ));
    }

    if let Some(footer) = &view.footer {
        lines.push(rule.clone());
        // Keep the footer aligned with the side bar column even when the
        // caller left the side bar footer text out.
        let last = view
            .side_bar_header
            .as_ref()
            .map(|_| footer.side_bar_footer.as_deref().unwrap_or(""));
        lines.push(row_line(&footer.header, footer.cells.iter().cloned(), last, widths));
    }
    lines.push(rule);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::Event;
    use crate::models::resource::Resource;
    use crate::models::settings::SchedulerSettings;
    use crate::services::render::DefaultRenderer;
    use crate::services::scheduler::TimeScheduler;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdefgh", 5), "abcd…");
        assert_eq!(fit("abcde", 5), "abcde");
    }

    #[test]
    fn test_render_text_grid() {
        let scheduler = TimeScheduler::new(SchedulerSettings {
            show_footer: true,
            ..Default::default()
        });
        let resources = vec![Resource::new("1", "Alice", "#2196f3")];
        let mut event = Event::new(
            "e1",
            "1",
            "2024-01-15T09:00:00Z",
            "2024-01-15T17:00:00Z",
            "Shift",
        );
        event.notes = Some("Keys at reception".to_string());
        let events = vec![event];
        let reference = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

        let view = scheduler.render(
            Some(&resources[..]),
            Some(&events[..]),
            reference,
            reference,
            &DefaultRenderer::<Resource, Event>::new(),
        );
        let text = render_text(&view);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Time Scheduler");
        assert!(lines[2].contains("Monday 15/01*"));
        assert!(lines[4].starts_with("| Alice"));
        assert!(lines[4].contains("Shift ✎"));
        assert!(lines[6].starts_with("| Wages"));
        assert!(lines[6].contains("| 1 "));
        // every table row has the same width
        let width = lines[2].chars().count();
        assert!(lines[2..].iter().all(|line| line.chars().count() == width));
    }

    #[test]
    fn test_loading_banner() {
        let scheduler = TimeScheduler::default();
        let reference = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let renderer = DefaultRenderer::<Resource, Event>::new();
        let view = scheduler.render::<Resource, Event, _>(
            None,
            None,
            reference,
            reference,
            &renderer,
        );
        assert!(render_text(&view).starts_with("Loading..."));
    }
}
