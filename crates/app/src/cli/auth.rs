//! Auth screen commands: register, login, logout, whoami.

use clap::{Args, Subcommand};

use crate::{
    auth::{AuthServiceError, LoginForm, SignupForm},
    cli::output::mode_label,
    context::AppContext,
};

#[derive(Debug, Args)]
pub(crate) struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Debug, Subcommand)]
enum AuthSubcommand {
    /// Create an account and start a session
    Register(RegisterArgs),
    /// Start a session for an existing account
    Login(LoginArgs),
    /// End the current session
    Logout,
    /// Show the current session
    Whoami,
}

#[derive(Debug, Args)]
struct RegisterArgs {
    /// Full name, 2-50 letters
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    password: String,

    /// Defaults to the password when omitted
    #[arg(long)]
    confirm_password: Option<String>,
}

#[derive(Debug, Args)]
struct LoginArgs {
    #[arg(long)]
    email: String,

    #[arg(long)]
    password: String,
}

pub(crate) fn run(command: AuthCommand, ctx: &AppContext) -> Result<(), String> {
    match command.command {
        AuthSubcommand::Register(args) => register(args, ctx),
        AuthSubcommand::Login(args) => login(args, ctx),
        AuthSubcommand::Logout => logout(ctx),
        AuthSubcommand::Whoami => whoami(ctx),
    }
}

fn register(args: RegisterArgs, ctx: &AppContext) -> Result<(), String> {
    let confirm_password = args.confirm_password.unwrap_or_else(|| args.password.clone());

    let session = ctx
        .auth
        .register(&SignupForm {
            full_name: args.name,
            email: args.email,
            password: args.password,
            confirm_password,
        })
        .map_err(user_message)?;

    println!("Account created. Logged in as {}.", session.email);

    resume_pending_add(ctx)
}

fn login(args: LoginArgs, ctx: &AppContext) -> Result<(), String> {
    let session = ctx
        .auth
        .login(&LoginForm {
            email: args.email,
            password: args.password,
        })
        .map_err(user_message)?;

    println!("Logged in as {}.", session.email);

    resume_pending_add(ctx)
}

fn logout(ctx: &AppContext) -> Result<(), String> {
    ctx.auth.logout().map_err(user_message)?;

    println!("Logged out.");

    Ok(())
}

fn whoami(ctx: &AppContext) -> Result<(), String> {
    match ctx.auth.current_session().map_err(user_message)? {
        Some(session) => println!("Logged in as {} <{}>.", session.full_name, session.email),
        None => {
            println!("Not logged in.");

            if let Some(pending) = ctx.auth.peek_pending_add().map_err(user_message)? {
                println!(
                    "An item is waiting for you: {} x{}. Log in to add it.",
                    pending.line.name, pending.line.qty
                );
            }
        }
    }

    Ok(())
}

/// Replays the stashed add exactly once after a successful login.
fn resume_pending_add(ctx: &AppContext) -> Result<(), String> {
    let Some(pending) = ctx.auth.take_pending_add().map_err(user_message)? else {
        return Ok(());
    };

    let mut cart = ctx.cart.load().map_err(|e| e.to_string())?;
    let line = pending.line;

    println!(
        "Resumed your earlier add: {} x{} ({}).",
        line.name,
        line.qty,
        mode_label(line.mode)
    );

    cart.add(line);
    ctx.cart.save(&cart).map_err(|e| e.to_string())?;

    Ok(())
}

/// Field-level errors print one line per field; everything else uses
/// the error's own message.
fn user_message(error: AuthServiceError) -> String {
    match error {
        AuthServiceError::Validation(fields) => {
            let mut lines = vec!["Please fix the following fields:".to_owned()];
            lines.extend(
                fields
                    .into_iter()
                    .map(|f| format!("  {}: {}", f.field, f.message)),
            );
            lines.join("\n")
        }
        other => other.to_string(),
    }
}
