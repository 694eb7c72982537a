use super::{util, PlanError, Planner, RequirementPatch};
use crate::model::{HoursTarget, RequirementId, StaffRequirement, Worker, WorkerId};

pub(super) fn add_worker(planner: &mut Planner, worker: Worker) -> Result<(), PlanError> {
    validate_worker(&worker)?;
    if util::find_worker_index(&planner.plan.workers, &worker.id).is_some() {
        return Err(PlanError::DuplicateWorker(worker.id.as_str().to_string()));
    }
    planner.plan.workers.push(worker);
    Ok(())
}

pub(super) fn remove_worker(planner: &mut Planner, id: &WorkerId) -> Result<Worker, PlanError> {
    let Some(pos) = util::find_worker_index(&planner.plan.workers, id) else {
        return Err(PlanError::UnknownWorker(id.as_str().to_string()));
    };
    Ok(planner.plan.workers.remove(pos))
}

pub(super) fn add_requirement(
    planner: &mut Planner,
    requirement: StaffRequirement,
) -> Result<(), PlanError> {
    validate_requirement(&requirement)?;
    planner.plan.requirements.push(requirement);
    Ok(())
}

pub(super) fn update_requirement(
    planner: &mut Planner,
    id: &RequirementId,
    patch: RequirementPatch,
) -> Result<(), PlanError> {
    let Some(current) = planner.plan.find_requirement_mut(id) else {
        return Err(PlanError::UnknownRequirement(id.as_str().to_string()));
    };

    // fusion puis validation : on ne touche au besoin que si le résultat est valide
    let mut merged = current.clone();
    if let Some(start) = patch.start_hour {
        merged.start_hour = start;
    }
    if let Some(end) = patch.end_hour {
        merged.end_hour = end;
    }
    if let Some(required) = patch.required {
        merged.required = required;
    }
    validate_requirement(&merged)?;
    *current = merged;
    Ok(())
}

pub(super) fn remove_requirement(
    planner: &mut Planner,
    id: &RequirementId,
) -> Result<StaffRequirement, PlanError> {
    let Some(pos) = util::find_requirement_index(&planner.plan.requirements, id) else {
        return Err(PlanError::UnknownRequirement(id.as_str().to_string()));
    };
    if planner.plan.requirements.len() == 1 {
        return Err(PlanError::LastRequirement);
    }
    Ok(planner.plan.requirements.remove(pos))
}

fn validate_worker(worker: &Worker) -> Result<(), PlanError> {
    if worker.name.trim().is_empty() {
        return Err(PlanError::EmptyName);
    }
    if worker.end <= worker.start {
        return Err(PlanError::InvalidTimeRange);
    }
    if let HoursTarget::Targeted(h) = worker.required_hours {
        HoursTarget::targeted(h).map_err(PlanError::InvalidTarget)?;
    }
    Ok(())
}

fn validate_requirement(requirement: &StaffRequirement) -> Result<(), PlanError> {
    if requirement.end_hour <= requirement.start_hour || requirement.end_hour > 24 {
        return Err(PlanError::InvalidHourRange);
    }
    if requirement.required == 0 {
        return Err(PlanError::InvalidHeadcount);
    }
    Ok(())
}
