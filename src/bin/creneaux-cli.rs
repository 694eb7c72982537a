#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use creneaux::{
    io,
    model::{parse_clock, HoursTarget, RequirementId, StaffRequirement, Worker, WorkerId},
    planner::{AllocOptions, Planner, RequirementPatch},
    report::{format_hour, shortfalls, AllocationRenderer, TextReport},
    storage::{JsonStorage, Storage},
};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de répartition des créneaux horaires (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du plan (personnes + besoins)
    #[arg(long, global = true, default_value = "plan.json")]
    plan: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter une personne
    AddWorker {
        #[arg(long)]
        name: String,
        /// H:MM
        #[arg(long, default_value = "9:00")]
        start: String,
        /// H:MM
        #[arg(long, default_value = "17:00")]
        end: String,
        /// Objectif d'heures (optionnel)
        #[arg(long)]
        required_hours: Option<f64>,
    },

    /// Retirer une personne (id ou nom)
    RemoveWorker {
        #[arg(long)]
        worker: String,
    },

    /// Importer des personnes depuis un CSV
    ImportWorkers {
        #[arg(long)]
        csv: String,
    },

    /// Ajouter un besoin en effectif
    AddRequirement {
        #[arg(long, default_value_t = 6)]
        start_hour: u8,
        #[arg(long, default_value_t = 22)]
        end_hour: u8,
        #[arg(long, default_value_t = 1)]
        required: u32,
    },

    /// Modifier un besoin existant
    UpdateRequirement {
        #[arg(long)]
        id: String,
        #[arg(long)]
        start_hour: Option<u8>,
        #[arg(long)]
        end_hour: Option<u8>,
        #[arg(long)]
        required: Option<u32>,
    },

    /// Supprimer un besoin
    RemoveRequirement {
        #[arg(long)]
        id: String,
    },

    /// Importer des besoins depuis un CSV
    ImportRequirements {
        #[arg(long)]
        csv: String,
    },

    /// Lister personnes et besoins
    List,

    /// Calculer la répartition
    Allocate {
        #[arg(long, default_value_t = 6)]
        first_hour: u8,
        #[arg(long, default_value_t = 22)]
        last_hour: u8,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.plan)?;
    let mut planner = if storage.exists() {
        Planner::from_plan(storage.load()?)
    } else {
        Planner::new()
    };

    let code = match cli.cmd {
        Commands::AddWorker {
            name,
            start,
            end,
            required_hours,
        } => {
            let start = parse_clock(&start).map_err(anyhow::Error::msg)?;
            let end = parse_clock(&end).map_err(anyhow::Error::msg)?;
            let target = match required_hours {
                Some(h) => HoursTarget::targeted(h).map_err(anyhow::Error::msg)?,
                None => HoursTarget::Unconstrained,
            };
            let worker = Worker::new(name, start, end)
                .map_err(anyhow::Error::msg)?
                .with_target(target);
            let id = worker.id.clone();
            planner.add_worker(worker)?;
            storage.save(planner.plan())?;
            println!("{}", id.as_str());
            0
        }
        Commands::RemoveWorker { worker } => {
            let id = planner
                .plan()
                .find_worker_by_name(&worker)
                .map(|w| w.id.clone())
                .unwrap_or_else(|| WorkerId::new(&worker));
            planner.remove_worker(&id)?;
            storage.save(planner.plan())?;
            0
        }
        Commands::ImportWorkers { csv } => {
            let workers = io::import_workers_csv(csv)?;
            planner.add_workers(workers)?;
            storage.save(planner.plan())?;
            0
        }
        Commands::AddRequirement {
            start_hour,
            end_hour,
            required,
        } => {
            let req =
                StaffRequirement::new(start_hour, end_hour, required).map_err(anyhow::Error::msg)?;
            let id = req.id.clone();
            planner.add_requirement(req)?;
            storage.save(planner.plan())?;
            println!("{}", id.as_str());
            0
        }
        Commands::UpdateRequirement {
            id,
            start_hour,
            end_hour,
            required,
        } => {
            let patch = RequirementPatch {
                start_hour,
                end_hour,
                required,
            };
            planner.update_requirement(&RequirementId::new(id), patch)?;
            storage.save(planner.plan())?;
            0
        }
        Commands::RemoveRequirement { id } => {
            planner.remove_requirement(&RequirementId::new(id))?;
            storage.save(planner.plan())?;
            0
        }
        Commands::ImportRequirements { csv } => {
            for req in io::import_requirements_csv(csv)? {
                planner.add_requirement(req)?;
            }
            storage.save(planner.plan())?;
            0
        }
        Commands::List => {
            for w in &planner.plan().workers {
                let target = w
                    .required_hours
                    .hours()
                    .map(|h| format!(" (target {h}h)"))
                    .unwrap_or_default();
                println!(
                    "{} | {} | {} - {}{}",
                    w.id.as_str(),
                    w.name,
                    w.start.format("%H:%M"),
                    w.end.format("%H:%M"),
                    target
                );
            }
            for r in &planner.plan().requirements {
                println!(
                    "{} | {} - {} | {}",
                    r.id.as_str(),
                    format_hour(r.start_hour),
                    format_hour(r.end_hour),
                    r.required
                );
            }
            0
        }
        Commands::Allocate {
            first_hour,
            last_hour,
            out_json,
            out_csv,
        } => {
            if planner.plan().workers.is_empty() {
                bail!("aucune personne enregistrée");
            }
            let opts = AllocOptions {
                first_hour,
                last_hour,
            };
            opts.validate()?;
            let allocation = planner.allocate(opts);
            if let Some(path) = out_json {
                io::export_allocation_json(path, &allocation)?;
            }
            if let Some(path) = out_csv {
                io::export_hourly_csv(path, &allocation)?;
            }
            print!("{}", TextReport.render(&allocation));

            let missing = shortfalls(&allocation);
            if missing.is_empty() {
                0
            } else {
                eprintln!("Found {} understaffed hour(s)", missing.len());
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}
