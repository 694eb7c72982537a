mod assignment;
mod mutate;
mod ranking;
mod types;
mod util;

pub use assignment::allocate;
pub use ranking::{compare_candidates, fill_ratio, rank_candidates, AssignedHours};
pub use types::{
    AllocOptions, Allocation, HourAssignment, PlanError, RequirementPatch, WorkerAssignment,
};
pub use util::effective_headcount;

use crate::model::{Plan, RequirementId, StaffRequirement, Worker, WorkerId};

/// Planner : encapsule un Plan en cours d'édition
#[derive(Debug, Default)]
pub struct Planner {
    plan: Plan,
}

impl Planner {
    pub fn new() -> Self {
        Self {
            plan: Plan::default(),
        }
    }

    pub fn from_plan(plan: Plan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }
    pub fn plan_mut(&mut self) -> &mut Plan {
        &mut self.plan
    }

    pub fn add_worker(&mut self, worker: Worker) -> Result<(), PlanError> {
        mutate::add_worker(self, worker)
    }

    /// Ajout en lot ; s'arrête à la première personne invalide.
    pub fn add_workers(&mut self, workers: Vec<Worker>) -> Result<(), PlanError> {
        for w in workers {
            mutate::add_worker(self, w)?;
        }
        Ok(())
    }

    pub fn remove_worker(&mut self, id: &WorkerId) -> Result<Worker, PlanError> {
        mutate::remove_worker(self, id)
    }

    pub fn add_requirement(&mut self, requirement: StaffRequirement) -> Result<(), PlanError> {
        mutate::add_requirement(self, requirement)
    }

    pub fn update_requirement(
        &mut self,
        id: &RequirementId,
        patch: RequirementPatch,
    ) -> Result<(), PlanError> {
        mutate::update_requirement(self, id, patch)
    }

    pub fn remove_requirement(&mut self, id: &RequirementId) -> Result<StaffRequirement, PlanError> {
        mutate::remove_requirement(self, id)
    }

    /// Lance l'allocation sur le plan courant (sans le modifier).
    pub fn allocate(&self, opts: AllocOptions) -> Allocation {
        assignment::allocate(&self.plan.workers, &self.plan.requirements, opts)
    }
}
