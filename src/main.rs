use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};
use clap::Parser;
use dialoguer::Confirm;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mis_plantas::config::Config;
use mis_plantas::display::PlantCard;
use mis_plantas::models::parse_date;
use mis_plantas::db::{PlantQuery, Removal};
use mis_plantas::{care_advice, FileStore, Garden, PlantError};

mod cli;
use cli::{Cli, Commands};

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::resolve(cli.data_dir);
    debug!(data_dir = %config.data_dir.display(), key = %config.store_key, "using store");

    let today: NaiveDate = match cli.today.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };

    let store = FileStore::new(&config.data_dir);
    let mut garden = Garden::load(store, config.store_key.as_str());

    match cli.command {
        Commands::View {
            search_param,
            id,
            ids,
            favorites,
        } => {
            let plants = garden.select(&PlantQuery {
                search: search_param,
                id,
                favorites_only: favorites,
            });

            if plants.is_empty() {
                println!("No se encontraron plantas");
            }
            for plant in plants {
                if ids {
                    println!("{}, '{}'", plant.id(), plant.name());
                } else {
                    println!("{}\n", PlantCard::from_plant(plant, today).render());
                }
            }
        }
        Commands::Add(args) => {
            let new_plant = args.into_form().validate().map_err(PlantError::Validation)?;
            let plant = garden
                .add(new_plant, Utc::now())
                .context("No se pudo guardar la planta")?;
            println!("Planta agregada, ID: {}", plant.id());
        }
        Commands::Remove { id, yes } => {
            let removal = garden
                .remove_confirmed(&id, |plant| -> Result<bool> {
                    if yes {
                        return Ok(true);
                    }
                    Ok(Confirm::new()
                        .with_prompt(format!("¿Eliminar planta \"{}\"?", plant.name()))
                        .default(false)
                        .interact()?)
                })
                .context("No se pudo remover la planta")?;
            match removal {
                Removal::Removed(_) => println!("Planta ID {} removida", id),
                Removal::Declined => println!("Cancelado"),
                Removal::NotFound => println!("No se encontró planta con ID {}", id),
            }
        }
        Commands::Favorite { id } => match garden.toggle_favorite(&id)? {
            Some(true) => println!("Planta ID {} marcada como favorita", id),
            Some(false) => println!("Planta ID {} ya no es favorita", id),
            None => println!("No se encontró planta con ID {}", id),
        },
        Commands::Advice { name, plant_type } => {
            println!("{}", care_advice(&name, &plant_type));
        }
    }

    Ok(())
}
