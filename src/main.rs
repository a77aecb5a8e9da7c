//! Project Board - Main Entry Point
//!
//! Prints the portal's views from a snapshot of backend records and checks
//! form input against the portal's schemas. The actual implementation is in
//! the `projectboard` library.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use projectboard::mapping::{
    group_tasks_by_status, map_actions_to_columns, map_client_projects_to_list_items,
    map_comments_to_columns, map_payment_request_to_details, map_payment_requests_to_list_items,
    map_pm_projects_to_list_items, map_profile_to_details, map_task_to_details,
};
use projectboard::render;
use projectboard::validation::{
    CreateCommentForm, CreateCommentSchema, CreatePaymentRequestForm, CreatePaymentRequestSchema,
    CreateProjectForm, CreateProjectSchema, CreateTaskForm, CreateTaskSchema, FormSchema,
    InvitePmForm, InvitePmSchema, ValidationErrors,
};
use projectboard::{SnapshotPmDirectory, SnapshotStore, map_pathname_to_location_array};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Project Board - portal views and form checks over recorded API data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the snapshot file (TOML, or JSON with a .json extension)
    snapshot: PathBuf,

    /// Enable debug logging (PROJECTBOARD_LOG overrides)
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project list for a role, plus payments for clients
    Dashboard {
        #[arg(long, value_enum, default_value_t = Role::Client)]
        role: Role,
    },
    /// Task board of a project, one column per status
    Board { project_id: u64 },
    /// Task details, actions and comments
    Task { task_id: u64 },
    /// Payment request list
    Payments,
    /// Payment request details
    Payment { request_id: u64 },
    /// Profile details of a user
    Profile { user_id: u64 },
    /// Breadcrumbs for a URL path
    Breadcrumbs { path: String },
    /// Check create-project form input
    ValidateProject {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        deadline: String,
    },
    /// Check create-task form input
    ValidateTask {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "MEDIUM")]
        priority: String,
        #[arg(long, default_value = "TO_DO")]
        status: String,
        #[arg(long, default_value = "")]
        deadline: String,
    },
    /// Check create-payment-request form input
    ValidatePayment {
        #[arg(long, default_value = "")]
        amount: String,
        #[arg(long, default_value = "")]
        comment: String,
        #[arg(long, default_value = "")]
        start: String,
        #[arg(long, default_value = "")]
        end: String,
    },
    /// Check comment input
    ValidateComment {
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Check a PM invite against the snapshot's project managers
    InvitePm { email: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Client,
    Pm,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        return ExitCode::from(2);
    }

    let args = Args::parse();
    if let Err(error) = init_tracing(args.verbose) {
        eprintln!("projectboard error: {error:#}");
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("projectboard error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("PROJECTBOARD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

async fn run(args: Args) -> Result<ExitCode> {
    let snapshot = SnapshotStore::new(&args.snapshot).load()?;

    match args.command {
        Command::Dashboard { role } => match role {
            Role::Client => {
                let projects = map_client_projects_to_list_items(&snapshot.projects);
                print!("{}", render::format_list("Projects", &projects));
                let payments = snapshot.payment_requests_with_project();
                print!(
                    "{}",
                    render::format_list("Payments", &map_payment_requests_to_list_items(&payments))
                );
            }
            Role::Pm => {
                let projects = map_pm_projects_to_list_items(&snapshot.projects);
                print!("{}", render::format_list("Projects", &projects));
            }
        },
        Command::Board { project_id } => {
            let project = snapshot
                .project(project_id)
                .with_context(|| format!("project {} is not in the snapshot", project_id))?;
            println!("{}", project.title);
            for (status, column) in group_tasks_by_status(&snapshot.project_tasks(project_id)) {
                print!("{}", render::format_column(status.as_str(), &column));
            }
        }
        Command::Task { task_id } => {
            let task = snapshot
                .task(task_id)
                .with_context(|| format!("task {} is not in the snapshot", task_id))?;
            println!("{}", task.title);
            print!("{}", render::format_details(&map_task_to_details(task)));
            let actions = map_actions_to_columns(&snapshot.task_actions(task_id));
            print!("{}", render::format_column("Actions", &actions));
            let comments = map_comments_to_columns(&snapshot.task_comments(task_id));
            print!("{}", render::format_column("Comments", &comments));
        }
        Command::Payments => {
            let payments = snapshot.payment_requests_with_project();
            print!(
                "{}",
                render::format_list("Payments", &map_payment_requests_to_list_items(&payments))
            );
        }
        Command::Payment { request_id } => {
            let request = snapshot
                .payment_request(request_id)
                .with_context(|| format!("payment request {} is not in the snapshot", request_id))?;
            print!("{}", render::format_details(&map_payment_request_to_details(request)));
            if !request.comment.is_empty() {
                println!("Comment: {}", request.comment);
            }
        }
        Command::Profile { user_id } => {
            let user = snapshot
                .user(user_id)
                .with_context(|| format!("user {} is not in the snapshot", user_id))?;
            println!("{}", user.name);
            print!("{}", render::format_details(&map_profile_to_details(user)));
            if !user.description.is_empty() {
                println!("{}", user.description);
            }
        }
        Command::Breadcrumbs { path } => {
            println!("{}", render::format_breadcrumbs(&map_pathname_to_location_array(&path)));
        }
        Command::ValidateProject {
            title,
            description,
            deadline,
        } => {
            let form = CreateProjectForm {
                title,
                description,
                deadline,
            };
            return Ok(report(CreateProjectSchema::default().parse(&form)));
        }
        Command::ValidateTask {
            title,
            description,
            priority,
            status,
            deadline,
        } => {
            let form = CreateTaskForm {
                title,
                description,
                task_priority: priority,
                task_status: status,
                deadline,
            };
            return Ok(report(CreateTaskSchema::default().parse(&form)));
        }
        Command::ValidatePayment {
            amount,
            comment,
            start,
            end,
        } => {
            let form = CreatePaymentRequestForm {
                usd_amount: amount,
                comment,
                start_date: start,
                end_date: end,
            };
            return Ok(report(CreatePaymentRequestSchema::default().parse(&form)));
        }
        Command::ValidateComment { comment } => {
            let form = CreateCommentForm { comment };
            return Ok(report(CreateCommentSchema::default().parse(&form)));
        }
        Command::InvitePm { email } => {
            let directory = Arc::new(SnapshotPmDirectory::from_snapshot(&snapshot));
            let schema = InvitePmSchema::new(directory);
            return Ok(report(schema.parse(&InvitePmForm { email }).await));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print a validation outcome; invalid input exits with status 1
fn report<T: std::fmt::Debug>(outcome: Result<T, ValidationErrors>) -> ExitCode {
    match outcome {
        Ok(values) => {
            println!("Valid: {:?}", values);
            ExitCode::SUCCESS
        }
        Err(errors) => {
            print!("{}", render::format_validation_errors(&errors));
            ExitCode::FAILURE
        }
    }
}
