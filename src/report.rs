use crate::planner::{Allocation, HourAssignment, WorkerAssignment};
use std::fmt::Write;

/// Créneau en sous-effectif.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub hour: u8,
    pub required: u32,
    pub assigned: usize,
}

/// Créneaux où le nombre de personnes affectées est inférieur au besoin.
pub fn shortfalls(allocation: &Allocation) -> Vec<Shortfall> {
    allocation
        .hourly
        .iter()
        .filter(|h| h.is_short())
        .map(|h| Shortfall {
            hour: h.hour,
            required: h.required,
            assigned: h.count(),
        })
        .collect()
}

/// `9` -> `"9:00"`
pub fn format_hour(hour: u8) -> String {
    let mut buf = itoa::Buffer::new();
    let mut out = String::with_capacity(5);
    out.push_str(buf.format(hour));
    out.push_str(":00");
    out
}

/// Regroupe les heures consécutives : `[9, 10, 11, 14]` -> `"9:00-12:00, 14:00"`.
pub fn format_time_ranges(hours: &[u8]) -> String {
    if hours.is_empty() {
        return "none".to_string();
    }
    let mut sorted = hours.to_vec();
    sorted.sort_unstable();

    let mut ranges: Vec<(u8, u8)> = Vec::new();
    for h in sorted {
        if let Some((_, end)) = ranges.last_mut() {
            if u16::from(h) == u16::from(*end) + 1 {
                *end = h;
                continue;
            }
        }
        ranges.push((h, h));
    }

    ranges
        .into_iter()
        .map(|(start, end)| {
            if start == end {
                format_hour(start)
            } else {
                format!("{}-{}", format_hour(start), format_hour(end.saturating_add(1)))
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Permet de customiser le rendu d'une allocation (texte, markdown, etc.).
pub trait AllocationRenderer {
    fn render_hour(&self, hour: &HourAssignment) -> String;
    fn render_worker(&self, worker: &WorkerAssignment) -> String;

    fn render(&self, allocation: &Allocation) -> String {
        let mut out = String::new();
        for h in &allocation.hourly {
            out.push_str(&self.render_hour(h));
            out.push('\n');
        }
        for w in &allocation.workers {
            out.push_str(&self.render_worker(w));
            out.push('\n');
        }
        out
    }
}

/// Rendu texte brut, une ligne par créneau puis une ligne par personne.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl AllocationRenderer for TextReport {
    fn render_hour(&self, hour: &HourAssignment) -> String {
        let names = if hour.workers.is_empty() {
            "-".to_string()
        } else {
            hour.workers.join(", ")
        };
        let mut line = format!("{} | {} | {}/{}", format_hour(hour.hour), names, hour.count(), hour.required);
        if hour.is_short() {
            line.push_str(" (short)");
        }
        line
    }

    fn render_worker(&self, worker: &WorkerAssignment) -> String {
        let mut line = String::new();
        let mark = if worker.target_met() { "ok" } else { "KO" };
        let _ = write!(line, "[{mark}] {} {}h", worker.name, worker.total_hours);
        if let Some(target) = worker.required_hours.hours() {
            let _ = write!(line, "/{target}h");
        }
        let _ = write!(line, " : {}", format_time_ranges(&worker.assigned_hours));
        line
    }
}
