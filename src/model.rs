use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiant fort pour Worker
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerId(String);

impl WorkerId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Objectif d'heures d'une personne.
///
/// Sérialisé comme `null` (aucun objectif) ou comme un nombre d'heures.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Option<f64>", into = "Option<f64>")]
pub enum HoursTarget {
    #[default]
    Unconstrained,
    Targeted(f64),
}

impl HoursTarget {
    /// Objectif explicite ; refuse les valeurs négatives ou non finies.
    pub fn targeted(hours: f64) -> Result<Self, String> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(format!("required hours must be a non-negative number, got {hours}"));
        }
        Ok(Self::Targeted(hours))
    }

    pub fn hours(&self) -> Option<f64> {
        match self {
            Self::Unconstrained => None,
            Self::Targeted(h) => Some(*h),
        }
    }

    /// Vrai si `total` heures suffisent à atteindre l'objectif.
    pub fn is_met_by(&self, total: u32) -> bool {
        match self {
            Self::Unconstrained => true,
            Self::Targeted(h) => f64::from(total) >= *h,
        }
    }
}

impl TryFrom<Option<f64>> for HoursTarget {
    type Error = String;

    fn try_from(value: Option<f64>) -> Result<Self, Self::Error> {
        match value {
            None => Ok(Self::Unconstrained),
            Some(h) => Self::targeted(h),
        }
    }
}

impl From<HoursTarget> for Option<f64> {
    fn from(value: HoursTarget) -> Self {
        value.hours()
    }
}

/// Personne disponible sur une plage horaire de la journée.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    #[serde(default)]
    pub required_hours: HoursTarget,
}

impl Worker {
    /// Crée une personne en validant que `end > start`.
    pub fn new<N: Into<String>>(name: N, start: NaiveTime, end: NaiveTime) -> Result<Self, String> {
        if end <= start {
            return Err("availability end must be after start".to_string());
        }
        Ok(Self {
            id: WorkerId::random(),
            name: name.into(),
            start,
            end,
            required_hours: HoursTarget::Unconstrained,
        })
    }

    pub fn with_target(mut self, target: HoursTarget) -> Self {
        self.required_hours = target;
        self
    }

    /// Fenêtre en heures entières : `[floor(start), ceil(end))`.
    ///
    /// Une fin à 17:30 rend donc la personne disponible sur tout le créneau de 17h.
    pub fn hour_window(&self) -> HourWindow {
        HourWindow {
            first: fractional_hour(self.start).floor() as u32,
            end: fractional_hour(self.end).ceil() as u32,
        }
    }

    pub fn is_available_at(&self, hour: u8) -> bool {
        self.hour_window().contains(hour)
    }
}

/// Intervalle d'heures entières [first, end).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourWindow {
    pub first: u32,
    pub end: u32,
}

impl HourWindow {
    pub fn contains(&self, hour: u8) -> bool {
        let hour = u32::from(hour);
        hour >= self.first && hour < self.end
    }
}

/// "9:30" -> 9.5
pub fn fractional_hour(t: NaiveTime) -> f64 {
    f64::from(t.hour()) + f64::from(t.minute()) / 60.0 + f64::from(t.second()) / 3600.0
}

/// Parse une heure `H:MM` (ou `HH:MM`).
pub fn parse_clock(raw: &str) -> Result<NaiveTime, String> {
    let raw = raw.trim();
    let (h, m) = raw
        .split_once(':')
        .ok_or_else(|| format!("invalid time {raw:?}: expected H:MM"))?;
    let hour: u32 = h
        .parse()
        .map_err(|_| format!("invalid hour in {raw:?}"))?;
    let minute: u32 = m
        .parse()
        .map_err(|_| format!("invalid minute in {raw:?}"))?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| format!("time out of range: {raw:?}"))
}

/// Identifiant fort pour StaffRequirement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequirementId(String);

impl RequirementId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Besoin en effectif sur la fenêtre [start_hour, end_hour).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRequirement {
    pub id: RequirementId,
    pub start_hour: u8,
    pub end_hour: u8,
    pub required: u32,
}

impl StaffRequirement {
    pub fn new(start_hour: u8, end_hour: u8, required: u32) -> Result<Self, String> {
        if end_hour <= start_hour {
            return Err("requirement end hour must be after start hour".to_string());
        }
        if required == 0 {
            return Err("required headcount must be at least 1".to_string());
        }
        Ok(Self {
            id: RequirementId::random(),
            start_hour,
            end_hour,
            required,
        })
    }

    pub fn covers(&self, hour: u8) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

/// Plan éditable : personnes + besoins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub workers: Vec<Worker>,
    #[serde(default)]
    pub requirements: Vec<StaffRequirement>,
}

impl Default for Plan {
    /// Un plan neuf contient un besoin d'une personne sur toute la journée (6h-22h).
    fn default() -> Self {
        Self {
            workers: Vec::new(),
            requirements: vec![StaffRequirement {
                id: RequirementId::random(),
                start_hour: 6,
                end_hour: 22,
                required: 1,
            }],
        }
    }
}

impl Plan {
    pub fn find_worker_by_id<'a>(&'a self, id: &WorkerId) -> Option<&'a Worker> {
        self.workers.iter().find(|w| &w.id == id)
    }
    pub fn find_worker_by_name<'a>(&'a self, name: &str) -> Option<&'a Worker> {
        self.workers.iter().find(|w| w.name == name)
    }
    pub fn find_requirement_mut(&mut self, id: &RequirementId) -> Option<&mut StaffRequirement> {
        self.requirements.iter_mut().find(|r| &r.id == id)
    }
}
