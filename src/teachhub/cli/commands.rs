use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use colored::Colorize;
use console::style;
use directories::ProjectDirs;
use log::debug;

use teachhub::api::{ConfigAction, HubApi};
use teachhub::calendar;
use teachhub::config::HubConfig;
use teachhub::error::{HubError, Result};
use teachhub::store::TeacherStore;

use super::print;
use super::prompt;
use super::setup::{Cli, Commands, SessionLine};

/// Which teacher and month the session's calendar is pointed at. `show`
/// and `calendar` move it, `next`/`prev` step it.
struct CalendarCursor {
    teacher_id: Option<String>,
    year: i32,
    month: u32,
}

struct AppContext {
    api: HubApi,
    school_name: String,
    cursor: CalendarCursor,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    match cli.command {
        Some(command) => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            dispatch(&mut ctx, command, &mut input)
        }
        None => run_session(&mut ctx),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let proj_dirs =
        ProjectDirs::from("com", "teachhub", "teachhub").expect("Could not determine config dir");
    let config_dir = proj_dirs.config_dir().to_path_buf();
    debug!("Config dir: {}", config_dir.display());

    let config = HubConfig::load(&config_dir).unwrap_or_default();
    let store = if config.seed_roster && !cli.no_seed {
        TeacherStore::with_sample_roster()
    } else {
        TeacherStore::new()
    };

    let today = Local::now().date_naive();
    Ok(AppContext {
        api: HubApi::new(store, config_dir),
        school_name: config.school_name,
        cursor: CalendarCursor {
            teacher_id: None,
            year: today.year(),
            month: today.month(),
        },
    })
}

/// Read-eval-print loop over stdin lines. Command errors are printed and
/// the session continues; only `quit` or the end of input leaves it.
fn run_session(ctx: &mut AppContext) -> Result<()> {
    print::print_banner(&ctx.school_name, ctx.api.teacher_count());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!("{} ", style("teachhub>").bold().cyan());
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        match SessionLine::try_parse_from(tokens.iter().copied()) {
            Ok(parsed) => match parsed.command {
                Commands::Quit => break,
                command => {
                    if let Err(e) = dispatch(ctx, command, &mut input) {
                        println!("{}", e.to_string().red());
                    }
                }
            },
            // clap renders its own usage and help output
            Err(e) => print!("{}", e),
        }
    }
    Ok(())
}

fn dispatch<R: BufRead>(ctx: &mut AppContext, command: Commands, input: &mut R) -> Result<()> {
    match command {
        Commands::List => handle_list(ctx),
        Commands::Show { id } => handle_show(ctx, id),
        Commands::Add => handle_add(ctx, input),
        Commands::Edit { id } => handle_edit(ctx, id, input),
        Commands::Delete { id } => handle_delete(ctx, &id),
        Commands::Calendar { id, month } => handle_calendar(ctx, id, month),
        Commands::Day { id, date } => handle_day(ctx, &id, &date),
        Commands::Next => handle_shift(ctx, 1),
        Commands::Prev => handle_shift(ctx, -1),
        Commands::Export { path } => handle_export(ctx, path),
        Commands::Import { path } => handle_import(ctx, path),
        Commands::Config { key, value } => handle_config(ctx, key, value),
        Commands::Messages => handle_messages(),
        Commands::Quit => Ok(()),
    }
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_teachers()?;
    print::print_roster(&result.listed_teachers);
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, id: String) -> Result<()> {
    let result = ctx.api.view_teacher(&id)?;
    if let Some(teacher) = result.listed_teachers.first() {
        print::print_profile(teacher);
    }
    let (year, month) = (ctx.cursor.year, ctx.cursor.month);
    show_month(ctx, id, year, month, false)
}

fn handle_add<R: BufRead>(ctx: &mut AppContext, input: &mut R) -> Result<()> {
    let draft = prompt::read_teacher_draft(input, &mut io::stdout(), None)?;
    let result = ctx.api.add_teacher(draft)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_edit<R: BufRead>(ctx: &mut AppContext, id: String, input: &mut R) -> Result<()> {
    let current = ctx.api.view_teacher(&id)?;
    let Some(teacher) = current.listed_teachers.into_iter().next() else {
        return Ok(());
    };
    let draft = prompt::read_teacher_draft(input, &mut io::stdout(), Some(&teacher))?;
    let result = ctx.api.update_teacher(&id, draft)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_teacher(id)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_calendar(ctx: &mut AppContext, id: String, month: Option<String>) -> Result<()> {
    let (year, month) = match month {
        Some(raw) => parse_month(&raw)?,
        None => (ctx.cursor.year, ctx.cursor.month),
    };
    show_month(ctx, id, year, month, true)
}

fn handle_day(ctx: &mut AppContext, id: &str, date: &str) -> Result<()> {
    let result = ctx.api.day_schedule(id, date)?;
    let name = result
        .listed_teachers
        .first()
        .map(|t| t.name.clone())
        .unwrap_or_default();
    if let Some(day) = &result.day_schedule {
        print::print_day_schedule(&name, day);
    }
    Ok(())
}

fn handle_shift(ctx: &mut AppContext, delta: i32) -> Result<()> {
    let Some(id) = ctx.cursor.teacher_id.clone() else {
        println!(
            "{}",
            "No calendar open. Run show <id> or calendar <id> first.".yellow()
        );
        return Ok(());
    };
    let (year, month) = calendar::shift_month(ctx.cursor.year, ctx.cursor.month, delta);
    show_month(ctx, id, year, month, true)
}

/// Renders one teacher's month and points the cursor at it.
fn show_month(
    ctx: &mut AppContext,
    id: String,
    year: i32,
    month: u32,
    with_name: bool,
) -> Result<()> {
    let result = ctx.api.calendar_month(&id, year, month)?;
    if with_name {
        if let Some(teacher) = result.listed_teachers.first() {
            println!("{}", teacher.name.bold());
        }
    }
    if let Some(view) = &result.month_view {
        print::print_calendar(view);
    }
    ctx.cursor = CalendarCursor {
        teacher_id: Some(id),
        year,
        month,
    };
    Ok(())
}

fn handle_export(ctx: &mut AppContext, path: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_roster(path)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.import_roster(&path)?;
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Vec<String>) -> Result<()> {
    let action = match key {
        None => ConfigAction::ShowAll,
        Some(key) if value.is_empty() => ConfigAction::ShowKey(key),
        Some(key) => ConfigAction::Set(key, value.join(" ")),
    };
    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print::print_config(config);
        // keep the banner name in step within a session
        ctx.school_name = config.school_name.clone();
    }
    print::print_messages(&result.messages);
    Ok(())
}

fn handle_messages() -> Result<()> {
    println!("{}", "Coming Soon".bold());
    println!("{}", "This page is under construction. Stay tuned!".dimmed());
    Ok(())
}

fn parse_month(raw: &str) -> Result<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d")
        .map_err(|_| HubError::Api(format!("Invalid month (expected YYYY-MM): {}", raw)))?;
    Ok((date.year(), date.month()))
}
