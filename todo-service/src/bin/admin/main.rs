use std::sync::Arc;

use anyhow::bail;
use anyhow::Context;
use auth::Authenticator;
use clap::Parser;
use clap::Subcommand;
use sqlx::postgres::PgPoolOptions;
use todo_service::config::Config;
use todo_service::domain::user::models::CreateUserCommand;
use todo_service::domain::user::models::EmailAddress;
use todo_service::domain::user::models::Role;
use todo_service::domain::user::models::UserProfile;
use todo_service::domain::user::models::Username;
use todo_service::domain::user::ports::UserServicePort;
use todo_service::domain::user::service::UserService;
use todo_service::outbound::repositories::PostgresUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Operator tool that talks to the database directly.
///
/// Creating users over HTTP requires a token, so the first account is
/// provisioned here.
#[derive(Parser)]
#[command(name = "todo-admin")]
#[command(about = "Administrative commands for the todo service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a new user
    Create {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        email: String,

        #[arg(long, default_value = "")]
        first_name: String,

        #[arg(long, default_value = "")]
        last_name: String,

        #[arg(short, long, default_value = "admin")]
        role: String,

        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// List all users
    List,
}

fn prompt_new_password() -> anyhow::Result<String> {
    let password = rpassword::prompt_password("Password: ")?;
    let confirm = rpassword::prompt_password("Confirm password: ")?;

    if password != confirm {
        bail!("Passwords do not match");
    }
    if password.is_empty() {
        bail!("Password must not be empty");
    }

    Ok(password)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::load().context("Failed to load configuration")?;
    let authenticator = Arc::new(Authenticator::new(&config.auth_settings()?)?);

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let user_service = UserService::new(
        Arc::new(PostgresUserRepository::new(pool)),
        authenticator,
    );

    match cli.command {
        Commands::User { command } => match command {
            UserCommands::Create {
                username,
                email,
                first_name,
                last_name,
                role,
                password,
            } => {
                let profile = UserProfile {
                    username: Username::new(username)?,
                    email: EmailAddress::new(email)?,
                    first_name,
                    last_name,
                    role: Role::new(role)?,
                };
                let password = match password {
                    Some(password) => password,
                    None => prompt_new_password()?,
                };

                let user = user_service
                    .create_user(CreateUserCommand::new(profile, password))
                    .await
                    .context("Failed to create user")?;

                println!("User created");
                println!("  ID: {}", user.id);
                println!("  Username: {}", user.username);
                println!("  Email: {}", user.email.as_str());
                println!("  Role: {}", user.role);
            }

            UserCommands::List => {
                let users = user_service
                    .list_users()
                    .await
                    .context("Failed to list users")?;

                if users.is_empty() {
                    println!("No users found.");
                } else {
                    println!(
                        "{:<6} {:<32} {:<40} {:<12} {:<8}",
                        "ID", "Username", "Email", "Role", "Active"
                    );
                    println!("{}", "-".repeat(102));
                    for user in users {
                        println!(
                            "{:<6} {:<32} {:<40} {:<12} {:<8}",
                            user.id,
                            user.username,
                            user.email.as_str(),
                            user.role,
                            if user.is_active { "yes" } else { "no" }
                        );
                    }
                }
            }
        },
    }

    Ok(())
}
