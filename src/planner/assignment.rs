use super::ranking::{rank_candidates, AssignedHours};
use super::types::{AllocOptions, Allocation, HourAssignment, WorkerAssignment};
use super::util::effective_headcount;
use crate::model::{StaffRequirement, Worker};

/// Répartit les personnes sur les créneaux de la journée (glouton, sans retour arrière).
///
/// Les créneaux sont traités dans l'ordre croissant : chaque affectation
/// modifie le classement des heures suivantes. Un créneau sans assez de
/// candidats reste partiellement pourvu.
pub fn allocate(
    workers: &[Worker],
    requirements: &[StaffRequirement],
    opts: AllocOptions,
) -> Allocation {
    let windows: Vec<_> = workers.iter().map(|w| (w, w.hour_window())).collect();
    let mut assigned = AssignedHours::new();
    let mut hourly = Vec::new();

    for hour in opts.hours() {
        let required = effective_headcount(requirements, hour);
        let candidates: Vec<&Worker> = windows
            .iter()
            .filter(|(_, window)| window.contains(hour))
            .map(|(w, _)| *w)
            .collect();
        #[cfg(feature = "logging")]
        let available = candidates.len();

        let chosen: Vec<&Worker> = rank_candidates(candidates, &assigned)
            .into_iter()
            .take(required as usize)
            .collect();
        for w in &chosen {
            assigned.record(&w.id, hour);
        }

        #[cfg(feature = "logging")]
        {
            tracing::debug!(hour, required, available, assigned = chosen.len(), "hour allocated");
            if chosen.len() < required as usize {
                tracing::warn!(hour, required, assigned = chosen.len(), "staffing shortfall");
            }
        }

        hourly.push(HourAssignment {
            hour,
            required,
            worker_ids: chosen.iter().map(|w| w.id.clone()).collect(),
            workers: chosen.iter().map(|w| w.name.clone()).collect(),
        });
    }

    let workers = workers
        .iter()
        .map(|w| {
            let mut hours = assigned.hours(&w.id).to_vec();
            hours.sort_unstable();
            WorkerAssignment {
                id: w.id.clone(),
                name: w.name.clone(),
                total_hours: hours.len() as u32,
                assigned_hours: hours,
                required_hours: w.required_hours,
            }
        })
        .collect();

    Allocation { hourly, workers }
}
