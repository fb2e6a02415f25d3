//! `labfacil`, the terminal front end of the LabFácil API.

use clap::{Args, Parser, Subcommand};
use client::{
    api::{ApiClient, DEFAULT_API_URL},
    dashboard::{DashboardStats, upcoming},
    filter::{ReservationFilter, filter_laboratories},
    form::{FormError, FormFields, ReservationForm},
    messages::localize_error,
    render::{self, ViewMode},
    store::LabData,
};
use models::status::ReservationStatus;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[derive(Parser, Debug)]
#[command(name = "labfacil", about = "Laboratory reservations")]
struct Cli {
    /// Base URL of the LabFácil API.
    #[arg(long, env = "LABFACIL_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Totals and the next pending reservations.
    Dashboard,

    /// List laboratories.
    Labs {
        /// Filter by name, specialty or code.
        #[arg(long, short)]
        search: Option<String>,
    },

    /// List reservations.
    Reservations {
        /// Filter by laboratory, professor, discipline or class name.
        #[arg(long, short)]
        search: Option<String>,
        /// Only reservations with this status (PENDENTE, CONCLUIDO, CANCELADO).
        #[arg(long)]
        status: Option<ReservationStatus>,
        #[arg(long, value_enum, default_value_t)]
        view: ViewMode,
    },

    /// Create a reservation.
    New {
        /// Preselect this laboratory.
        #[arg(long)]
        lab: Option<i32>,
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit a reservation; omitted fields keep their current value.
    Edit {
        codigo: i32,
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Cancel a reservation.
    Cancel {
        codigo: i32,
        /// Skip confirmation.
        #[arg(long, short)]
        yes: bool,
    },

    /// Delete a reservation for good.
    Delete {
        codigo: i32,
        /// Skip confirmation.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct FieldArgs {
    /// Start, e.g. 2025-10-22T08:00.
    #[arg(long)]
    inicio: Option<String>,
    /// End, e.g. 2025-10-22T10:00.
    #[arg(long)]
    fim: Option<String>,
    #[arg(long)]
    cpf: Option<String>,
    #[arg(long)]
    disciplina: Option<i32>,
    #[arg(long)]
    turma: Option<i32>,
    #[arg(long)]
    laboratorio: Option<i32>,
}

impl FieldArgs {
    fn apply(self, fields: &mut FormFields) {
        if let Some(inicio) = self.inicio {
            fields.starts_at = inicio;
        }
        if let Some(fim) = self.fim {
            fields.ends_at = fim;
        }
        if let Some(cpf) = self.cpf {
            fields.professor_cpf = cpf;
        }
        if let Some(disciplina) = self.disciplina {
            fields.discipline_code = disciplina;
        }
        if let Some(turma) = self.turma {
            fields.class_code = turma;
        }
        if let Some(laboratorio) = self.laboratorio {
            fields.laboratory_code = laboratorio;
        }
    }
}

fn success(message: &str) {
    println!("✅ {message}");
}

fn failure(message: &str) -> ExitCode {
    eprintln!("{message}");
    ExitCode::FAILURE
}

async fn confirm(question: &str) -> bool {
    let mut stdout = tokio::io::stdout();
    let prompt = format!("{question} [s/N] ");
    if stdout.write_all(prompt.as_bytes()).await.is_err() || stdout.flush().await.is_err() {
        return false;
    }

    let mut answer = String::new();
    let mut stdin = BufReader::new(tokio::io::stdin());
    if stdin.read_line(&mut answer).await.is_err() {
        return false;
    }

    matches!(answer.trim().to_lowercase().as_str(), "s" | "sim" | "y" | "yes")
}

/// Loads every collection, or explains why it could not
async fn load(api: ApiClient) -> Result<LabData, ExitCode> {
    let store = LabData::connect(api).await;
    match store.error() {
        Some(error) => Err(failure(&format!("❌ {error}"))),
        None => Ok(store),
    }
}

async fn submit(form: ReservationForm, api: &ApiClient) -> ExitCode {
    match form.submit(api).await {
        Ok((saved, message)) => {
            success(message);
            println!("Reserva #{}", saved.code);
            ExitCode::SUCCESS
        }
        Err(err @ FormError::Rejected(_)) => failure(&err.to_string()),
        Err(err) => failure(&format!("❌ {err}")),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let api = ApiClient::new(&cli.api_url);

    match cli.command {
        Commands::Dashboard => {
            let store = match load(api).await {
                Ok(store) => store,
                Err(code) => return code,
            };
            let data = store.data();
            let stats = DashboardStats::from_snapshot(data);
            print!("{}", render::dashboard(&stats, &upcoming(&data.reservations)));
            ExitCode::SUCCESS
        }
        Commands::Labs { search } => {
            let store = match load(api).await {
                Ok(store) => store,
                Err(code) => return code,
            };
            let labs = filter_laboratories(&store.data().laboratories, search.as_deref().unwrap_or(""));
            print!("{}", render::laboratories(&labs));
            ExitCode::SUCCESS
        }
        Commands::Reservations {
            search,
            status,
            view,
        } => {
            let store = match load(api).await {
                Ok(store) => store,
                Err(code) => return code,
            };
            let filter = ReservationFilter {
                status,
                search: search.unwrap_or_default(),
            };
            print!(
                "{}",
                render::reservations(&filter.apply(&store.data().reservations), view)
            );
            ExitCode::SUCCESS
        }
        Commands::New { lab, fields } => {
            let store = match load(api).await {
                Ok(store) => store,
                Err(code) => return code,
            };
            let mut form = ReservationForm::create(lab, &store.data().laboratories);
            fields.apply(&mut form.fields);
            submit(form, store.api()).await
        }
        Commands::Edit { codigo, fields } => {
            let store = match load(api).await {
                Ok(store) => store,
                Err(code) => return code,
            };
            let Some(mut form) = ReservationForm::edit(codigo, &store.data().reservations) else {
                return failure("❌ Erro: Reserva não encontrada");
            };
            fields.apply(&mut form.fields);
            submit(form, store.api()).await
        }
        Commands::Cancel { codigo, yes } => {
            if !yes && !confirm("Tem certeza que deseja cancelar esta reserva?").await {
                return ExitCode::SUCCESS;
            }
            match api.cancel_reservation(codigo).await {
                Ok(_) => {
                    success("Reserva cancelada com sucesso!");
                    ExitCode::SUCCESS
                }
                Err(err) => failure(&localize_error(&err.to_string())),
            }
        }
        Commands::Delete { codigo, yes } => {
            if !yes
                && !confirm(
                    "Tem certeza que deseja excluir esta reserva? Esta ação não pode ser desfeita.",
                )
                .await
            {
                return ExitCode::SUCCESS;
            }
            match api.delete_reservation(codigo).await {
                Ok(_) => {
                    success("Reserva excluída com sucesso!");
                    ExitCode::SUCCESS
                }
                Err(err) => failure(&localize_error(&err.to_string())),
            }
        }
    }
}
