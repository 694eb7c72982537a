#![forbid(unsafe_code)]
//! Créneaux — répartition de personnes sur les heures d'une journée (sans BD).
//!
//! - Besoins en effectif par plage horaire (le maximum s'applique en cas de chevauchement).
//! - Allocation gloutonne heure par heure, objectifs d'heures prioritaires.
//! - Stockage fichiers (JSON/CSV), rendu texte des résultats.

pub mod io;
pub mod model;
pub mod planner;
pub mod report;
pub mod storage;

pub use model::{
    parse_clock, HoursTarget, Plan, RequirementId, StaffRequirement, Worker, WorkerId,
};
pub use planner::{
    allocate, AllocOptions, Allocation, HourAssignment, PlanError, Planner, RequirementPatch,
    WorkerAssignment,
};
pub use report::{shortfalls, AllocationRenderer, Shortfall, TextReport};
pub use storage::{JsonStorage, Storage};
