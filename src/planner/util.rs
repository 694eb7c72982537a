use crate::model::{RequirementId, StaffRequirement, Worker, WorkerId};

/// Effectif requis pour un créneau : maximum des besoins qui le couvrent, 0 sinon.
/// Les besoins qui se chevauchent ne s'additionnent pas.
pub fn effective_headcount(requirements: &[StaffRequirement], hour: u8) -> u32 {
    requirements
        .iter()
        .filter(|r| r.covers(hour))
        .map(|r| r.required)
        .max()
        .unwrap_or(0)
}

pub(super) fn find_worker_index(workers: &[Worker], id: &WorkerId) -> Option<usize> {
    workers.iter().position(|w| &w.id == id)
}

pub(super) fn find_requirement_index(
    requirements: &[StaffRequirement],
    id: &RequirementId,
) -> Option<usize> {
    requirements.iter().position(|r| &r.id == id)
}
