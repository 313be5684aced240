use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use bizforge_application::PlanUseCase;
use bizforge_core::generation::{GenerationError, PlanGenerator};
use bizforge_core::language::Language;
use bizforge_core::plan::StartupPlan;
use bizforge_core::user::SignerInfo;
use bizforge_infrastructure::{
    AuthService, ConfigService, LedgerService, LocalStore, LoggerService, SecretServiceImpl,
    VaultService,
};
use bizforge_interaction::{GeminiApiAgent, GeminiImageAgent};

#[derive(Parser)]
#[command(name = "bizforge")]
#[command(about = "BizForge CLI - AI-assisted startup plan generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in (the password doubles as the display name for regular users)
    Login { email: String, password: String },
    /// Clear the resident profile
    Logout,
    /// Show the resident profile
    Whoami,
    /// Rewrite an idea into a one-sentence pitch (never fails)
    Improve {
        idea: String,
        #[arg(long, default_value = "English")]
        language: Language,
    },
    /// Generate a full startup plan and save it into the vault
    Generate {
        idea: String,
        #[arg(long, default_value = "English")]
        language: Language,
    },
    /// Generate a promotional image for a brand name
    Asset { brand_name: String },
    /// List saved projects
    Projects,
    /// Record a simulated deployment of a saved project
    Deploy {
        project_id: String,
        #[arg(long)]
        signer_name: String,
        #[arg(long)]
        gov_id: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
    },
    /// Submit feedback on a project
    Feedback {
        rating: u8,
        comment: String,
        #[arg(long)]
        project: String,
    },
    /// Show the global deployment ledger (admin only)
    Ledger,
    /// Show the audit log (admin only)
    Logs,
}

/// Stands in for the remote generator on commands that never call it, so
/// navigation works with no credential configured. Any accidental generation
/// call fails fast the same way a missing key would.
struct UnconfiguredGenerator;

#[async_trait::async_trait]
impl PlanGenerator for UnconfiguredGenerator {
    async fn generate_plan(
        &self,
        _idea: &str,
        _language: Language,
    ) -> std::result::Result<StartupPlan, GenerationError> {
        Err(GenerationError::MissingCredentials)
    }

    async fn improve_idea(
        &self,
        _idea: &str,
        _language: Language,
    ) -> std::result::Result<String, GenerationError> {
        Err(GenerationError::MissingCredentials)
    }
}

async fn build_usecase(needs_generator: bool) -> Result<PlanUseCase> {
    let store = LocalStore::default_location().context("Failed to open local store")?;
    let logger = LoggerService::new(store.clone());
    let auth = AuthService::new(store.clone(), logger.clone());
    let vault = VaultService::new(store.clone(), logger.clone());
    let ledger = LedgerService::new(store, logger.clone());

    if !needs_generator {
        let generator: Arc<dyn PlanGenerator> = Arc::new(UnconfiguredGenerator);
        return Ok(PlanUseCase::new(generator, auth, vault, ledger, logger));
    }

    let config = ConfigService::new()?.load()?;
    let secrets = SecretServiceImpl::new()?;
    let agent = GeminiApiAgent::from_secret_service(&secrets, &config).await?;
    let image_agent = GeminiImageAgent::from_secret_service(&secrets, &config).await?;

    Ok(
        PlanUseCase::new(Arc::new(agent), auth, vault, ledger, logger)
            .with_asset_generator(Arc::new(image_agent)),
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Login { email, password } => {
            let usecase = build_usecase(false).await?;
            let user = usecase.auth().login(&email, &password)?;
            println!("Signed in as {} (admin: {})", user.name, user.is_admin);
        }
        Commands::Logout => {
            let usecase = build_usecase(false).await?;
            usecase.auth().logout()?;
            println!("Signed out");
        }
        Commands::Whoami => {
            let usecase = build_usecase(false).await?;
            match usecase.auth().current_user() {
                Some(user) => println!("{}", serde_json::to_string_pretty(&user)?),
                None => println!("No user is signed in"),
            }
        }
        Commands::Improve { idea, language } => {
            let usecase = build_usecase(true).await?;
            println!("{}", usecase.improve_idea(&idea, language).await);
        }
        Commands::Generate { idea, language } => {
            let usecase = build_usecase(true).await?;
            let project = usecase.generate(&idea, language).await?;
            println!("{}", serde_json::to_string_pretty(&project)?);
        }
        Commands::Asset { brand_name } => {
            let usecase = build_usecase(true).await?;
            println!("{}", usecase.generate_marketing_asset(&brand_name).await?);
        }
        Commands::Projects => {
            let usecase = build_usecase(false).await?;
            for project in usecase.projects() {
                println!("{}  {}  ({})", project.id, project.name, project.created_at);
            }
        }
        Commands::Deploy {
            project_id,
            signer_name,
            gov_id,
            phone,
            address,
        } => {
            let usecase = build_usecase(false).await?;
            let signer = SignerInfo {
                name: signer_name,
                gov_id,
                phone,
            };
            let record = usecase.deploy(&project_id, &signer, &address)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Feedback {
            rating,
            comment,
            project,
        } => {
            let usecase = build_usecase(false).await?;
            usecase.submit_feedback(rating, &comment, &project)?;
            println!("Feedback recorded");
        }
        Commands::Ledger => {
            let usecase = build_usecase(false).await?;
            let records = usecase.global_ledger()?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Commands::Logs => {
            let usecase = build_usecase(false).await?;
            for entry in usecase.audit_logs()? {
                println!(
                    "{}  [{}]  {}  {}  {}",
                    entry.timestamp, entry.risk_level, entry.user_email, entry.action, entry.details
                );
            }
        }
    }

    Ok(())
}
