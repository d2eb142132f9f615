use color_eyre::eyre::Context;
use color_eyre::Result;
use serde_json::json;

use crate::commands::AppContext;
use crate::output::Output;

pub fn run_login(
    ctx: &mut AppContext,
    email: String,
    password: Option<String>,
    output: &Output,
) -> Result<()> {
    let password = prompt_password_if_missing(password)?;
    let profile = ctx.session.login(&email, &password)?;

    output.success(format!("Logged in as {}", profile.email));
    output.json(&json!({ "profile": profile }));
    Ok(())
}

pub fn run_signup(
    ctx: &mut AppContext,
    name: String,
    email: String,
    password: Option<String>,
    output: &Output,
) -> Result<()> {
    let password = prompt_password_if_missing(password)?;
    let profile = ctx.session.signup(&name, &email, &password)?;

    output.success(format!("Welcome, {} <{}>", profile.name, profile.email));
    output.json(&json!({ "profile": profile }));
    Ok(())
}

pub fn run_logout(ctx: &mut AppContext, output: &Output) -> Result<()> {
    let was_authenticated = ctx.session.is_authenticated();
    ctx.session.logout();

    if was_authenticated {
        output.success("Logged out");
    } else {
        output.info("Already logged out");
    }
    Ok(())
}

fn prompt_password_if_missing(password: Option<String>) -> Result<String> {
    match password {
        Some(password) => Ok(password),
        None => rpassword::prompt_password("Password: ").context("read password"),
    }
}
