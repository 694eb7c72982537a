use crate::model::{parse_clock, HoursTarget, StaffRequirement, Worker};
use crate::planner::Allocation;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de personnes depuis CSV: header `name,start,end[,required_hours]`
///
/// Les heures sont au format `H:MM` ; une colonne `required_hours` vide = sans objectif.
pub fn import_workers_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Worker>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid worker row (empty name)");
        }
        let start = rec.get(1).context("missing start")?;
        let end = rec.get(2).context("missing end")?;
        let start = parse_clock(start)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("invalid start for {name}"))?;
        let end = parse_clock(end)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("invalid end for {name}"))?;
        let mut worker = Worker::new(name, start, end)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("invalid availability for {name}"))?;
        if let Some(raw) = rec.get(3) {
            worker.required_hours = parse_target(raw)
                .with_context(|| format!("invalid required_hours for {name}"))?;
        }
        out.push(worker);
    }
    Ok(out)
}

fn parse_target(raw: &str) -> anyhow::Result<HoursTarget> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(HoursTarget::Unconstrained);
    }
    let hours: f64 = raw.parse().context("expected a number of hours")?;
    HoursTarget::targeted(hours).map_err(anyhow::Error::msg)
}

/// Import de besoins: header `start_hour,end_hour,required`
pub fn import_requirements_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<StaffRequirement>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let start: u8 = rec
            .get(0)
            .context("missing start_hour")?
            .trim()
            .parse()
            .context("start_hour")?;
        let end: u8 = rec
            .get(1)
            .context("missing end_hour")?
            .trim()
            .parse()
            .context("end_hour")?;
        let required: u32 = rec
            .get(2)
            .context("missing required")?
            .trim()
            .parse()
            .context("required")?;
        out.push(StaffRequirement::new(start, end, required).map_err(anyhow::Error::msg)?);
    }
    Ok(out)
}

/// Export JSON de l'allocation (jolie mise en forme)
pub fn export_allocation_json<P: AsRef<Path>>(path: P, allocation: &Allocation) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(allocation)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV par créneau: header `hour,required,assigned,workers` (noms séparés par `;`)
pub fn export_hourly_csv<P: AsRef<Path>>(path: P, allocation: &Allocation) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["hour", "required", "assigned", "workers"])?;
    for h in &allocation.hourly {
        let hour = h.hour.to_string();
        let required = h.required.to_string();
        let assigned = h.count().to_string();
        let names = h.workers.join(";");
        w.write_record([
            hour.as_str(),
            required.as_str(),
            assigned.as_str(),
            names.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
