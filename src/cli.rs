use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mis-plantas")]
#[command(version, about = "Una CLI para registrar mis plantas y saber cuándo regarlas")]
pub struct Cli {
    /// Directorio donde se guarda la lista de plantas
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Fecha de hoy (AAAA-MM-DD); por defecto la fecha local
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Verbosidad (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ver plantas (con búsqueda por nombre/tipo o ID)
    View {
        /// Buscar por nombre o tipo
        #[arg(long = "search-param", conflicts_with = "id")]
        search_param: Option<String>,
        /// ID de la planta
        #[arg(long = "id")]
        id: Option<String>,
        /// Mostrar solo ID y nombre
        #[arg(long = "ids")]
        ids: bool,
        /// Solo favoritas
        #[arg(long)]
        favorites: bool,
    },
    /// Agregar nueva planta
    Add(AddArgs),
    /// Remover planta
    Remove {
        /// ID de la planta a remover
        #[arg(long)]
        id: String,
        /// No pedir confirmación
        #[arg(short, long)]
        yes: bool,
    },
    /// Marcar o quitar favorita
    Favorite {
        /// ID de la planta
        #[arg(long)]
        id: String,
    },
    /// Consejo de cuidado para un nombre y tipo
    Advice {
        /// Nombre de la planta
        #[arg(short = 'n', long = "name")]
        name: String,
        /// Tipo de planta
        #[arg(short = 't', long = "type", default_value = "")]
        plant_type: String,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Nombre de la planta
    #[arg(short = 'n', long = "name", default_value = "")]
    pub name: String,
    /// Tipo: Interior, Exterior, Suculenta u Ornamental
    #[arg(short = 't', long = "type")]
    pub plant_type: Option<String>,
    /// Dificultad de cuidado: Fácil, Medio o Difícil
    #[arg(short = 'd', long = "difficulty")]
    pub difficulty: Option<String>,
    /// Imagen (ruta, URL o data URI)
    #[arg(long)]
    pub image: Option<String>,
    /// Último riego (AAAA-MM-DD)
    #[arg(long = "last-watered")]
    pub last_watered: Option<String>,
    /// Notas
    #[arg(long)]
    pub notes: Option<String>,
}

impl AddArgs {
    pub fn into_form(self) -> mis_plantas::form::PlantForm {
        mis_plantas::form::PlantForm {
            name: self.name,
            plant_type: self.plant_type,
            difficulty: self.difficulty,
            image: self.image,
            last_watered: self.last_watered,
            notes: self.notes,
        }
    }
}
