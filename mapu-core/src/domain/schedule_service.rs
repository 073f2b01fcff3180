//! Business-hours normalization for centro turístico profiles.
//!
//! The schedule editor works in 12-hour display times while records store
//! 24-hour `"HH:MM"` strings; this service owns both conversions and the
//! compact weekly summary shown on a business card, e.g.
//!
//! ```text
//! Lunes - Viernes: 9:00 AM - 6:00 PM
//! Sábado: 9:00 AM - 12:00 PM
//! ```

use shared::{DayHours, Meridiem, TimeOfDay, Weekday, WeeklySchedule};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleService;

impl ScheduleService {
    pub fn new() -> Self {
        Self
    }

    /// Convert a 24-hour clock hour to its 12-hour form.
    ///
    /// Exact inverse of [`Self::to_24h`] for every hour in 0..=23; minutes
    /// are unaffected by the meridiem and pass through untouched.
    pub fn to_12h(&self, hour24: u8) -> (u8, Meridiem) {
        match hour24 {
            0 => (12, Meridiem::Am),
            h if h < 12 => (h, Meridiem::Am),
            12 => (12, Meridiem::Pm),
            h => (h - 12, Meridiem::Pm),
        }
    }

    /// Convert a 12-hour clock hour back to its 24-hour form.
    pub fn to_24h(&self, hour12: u8, meridiem: Meridiem) -> u8 {
        match (meridiem, hour12) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        }
    }

    /// Render the display form, e.g. `"9:00 AM"` or `"12:30 PM"`.
    pub fn format_display(&self, time: &TimeOfDay) -> String {
        let (hour12, meridiem) = self.to_12h(time.hour);
        format!("{}:{:02} {}", hour12, time.minute, meridiem.label())
    }

    /// Render a day's time range, e.g. `"9:00 AM - 6:00 PM"`.
    pub fn format_range(&self, hours: &DayHours) -> String {
        format!(
            "{} - {}",
            self.format_display(&hours.open),
            self.format_display(&hours.close)
        )
    }

    /// Compact a weekly schedule into grouped display lines.
    ///
    /// Traverses Monday-first and merges runs of adjacent enabled days that
    /// share an identical range string. A disabled day closes the current
    /// run without a line of its own, so non-contiguous days with the same
    /// hours stay on separate lines.
    pub fn group_week(&self, schedule: &WeeklySchedule) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut current: Option<(String, Weekday, Weekday)> = None;

        for (day, hours) in schedule.iter() {
            if !hours.enabled {
                if let Some(group) = current.take() {
                    lines.push(Self::render_group(&group));
                }
                continue;
            }

            let range = self.format_range(hours);
            let extends = matches!(&current, Some((open_range, _, _)) if *open_range == range);
            if extends {
                if let Some((_, _, last)) = current.as_mut() {
                    *last = day;
                }
            } else {
                if let Some(group) = current.take() {
                    lines.push(Self::render_group(&group));
                }
                current = Some((range, day, day));
            }
        }

        if let Some(group) = current.take() {
            lines.push(Self::render_group(&group));
        }

        lines.join("\n").trim().to_string()
    }

    /// True when the edited schedule differs from the saved snapshot;
    /// drives the unsaved-changes prompt in the schedule editor.
    pub fn has_diff(&self, saved: &WeeklySchedule, edited: &WeeklySchedule) -> bool {
        saved != edited
    }

    fn render_group((range, first, last): &(String, Weekday, Weekday)) -> String {
        if first == last {
            format!("{}: {}", first.display_name(), range)
        } else {
            format!("{} - {}: {}", first.display_name(), last.display_name(), range)
        }
    }
}
