use crate::model::{HoursTarget, WorkerId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options d'allocation : bornes (incluses) de la journée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocOptions {
    pub first_hour: u8,
    pub last_hour: u8,
}

impl Default for AllocOptions {
    fn default() -> Self {
        Self {
            first_hour: 6,
            last_hour: 22,
        }
    }
}

impl AllocOptions {
    /// Créneaux de la journée, par ordre croissant.
    pub fn hours(&self) -> impl Iterator<Item = u8> {
        self.first_hour..=self.last_hour
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if self.first_hour > self.last_hour || self.last_hour > 23 {
            return Err(PlanError::InvalidHourRange);
        }
        Ok(())
    }
}

/// Personnes affectées à un créneau, dans l'ordre d'affectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourAssignment {
    pub hour: u8,
    pub required: u32,
    pub worker_ids: Vec<WorkerId>,
    pub workers: Vec<String>,
}

impl HourAssignment {
    pub fn count(&self) -> usize {
        self.worker_ids.len()
    }

    pub fn is_short(&self) -> bool {
        (self.count() as u64) < u64::from(self.required)
    }
}

/// Bilan d'une personne après allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerAssignment {
    pub id: WorkerId,
    pub name: String,
    pub assigned_hours: Vec<u8>,
    pub total_hours: u32,
    pub required_hours: HoursTarget,
}

impl WorkerAssignment {
    pub fn target_met(&self) -> bool {
        self.required_hours.is_met_by(self.total_hours)
    }
}

/// Résultat complet d'une allocation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Allocation {
    pub hourly: Vec<HourAssignment>,
    pub workers: Vec<WorkerAssignment>,
}

impl Allocation {
    pub fn hour(&self, hour: u8) -> Option<&HourAssignment> {
        self.hourly.iter().find(|h| h.hour == hour)
    }
    pub fn worker(&self, id: &WorkerId) -> Option<&WorkerAssignment> {
        self.workers.iter().find(|w| &w.id == id)
    }
}

/// Modification partielle d'un besoin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequirementPatch {
    pub start_hour: Option<u8>,
    pub end_hour: Option<u8>,
    pub required: Option<u32>,
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid hour range: end must be after start and within 0..=23")]
    InvalidHourRange,
    #[error("invalid headcount: at least one person is required")]
    InvalidHeadcount,
    #[error("invalid required hours: {0}")]
    InvalidTarget(String),
    #[error("invalid availability: end must be after start")]
    InvalidTimeRange,
    #[error("worker name cannot be empty")]
    EmptyName,
    #[error("duplicate worker id: {0}")]
    DuplicateWorker(String),
    #[error("unknown worker: {0}")]
    UnknownWorker(String),
    #[error("unknown requirement: {0}")]
    UnknownRequirement(String),
    #[error("cannot remove the last staff requirement")]
    LastRequirement,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
