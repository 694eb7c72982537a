use crate::model::{HoursTarget, Worker, WorkerId};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Accumulateur de l'allocation en cours : heures déjà attribuées par personne.
///
/// Le classement d'un créneau dépend de cet état, qui évolue d'heure en heure.
#[derive(Debug, Clone, Default)]
pub struct AssignedHours {
    hours: HashMap<WorkerId, Vec<u8>>,
}

impl AssignedHours {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: &WorkerId, hour: u8) {
        self.hours.entry(id.clone()).or_default().push(hour);
    }

    pub fn count(&self, id: &WorkerId) -> u32 {
        self.hours.get(id).map_or(0, |h| h.len() as u32)
    }

    pub fn hours(&self, id: &WorkerId) -> &[u8] {
        self.hours.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Classe les candidats d'un créneau (tri stable, l'ordre d'entrée départage).
pub fn rank_candidates<'a>(mut candidates: Vec<&'a Worker>, assigned: &AssignedHours) -> Vec<&'a Worker> {
    candidates.sort_by(|a, b| compare_candidates(a, b, assigned));
    candidates
}

/// Une personne avec objectif passe avant une personne sans objectif.
/// Entre deux objectifs : taux de remplissage croissant.
/// Sans objectif des deux côtés : heures déjà attribuées croissantes.
pub fn compare_candidates(a: &Worker, b: &Worker, assigned: &AssignedHours) -> Ordering {
    let a_count = assigned.count(&a.id);
    let b_count = assigned.count(&b.id);
    match (a.required_hours, b.required_hours) {
        (HoursTarget::Targeted(ta), HoursTarget::Targeted(tb)) => {
            fill_ratio(a_count, ta).total_cmp(&fill_ratio(b_count, tb))
        }
        (HoursTarget::Targeted(_), HoursTarget::Unconstrained) => Ordering::Less,
        (HoursTarget::Unconstrained, HoursTarget::Targeted(_)) => Ordering::Greater,
        (HoursTarget::Unconstrained, HoursTarget::Unconstrained) => a_count.cmp(&b_count),
    }
}

/// Objectif nul : considéré comme déjà atteint (taux infini).
pub fn fill_ratio(assigned: u32, target: f64) -> f64 {
    if target == 0.0 {
        return f64::INFINITY;
    }
    f64::from(assigned) / target
}
