//! quizflow - take a quiz in the terminal
//!
//! Presents the questions one at a time in shuffled order, records answers
//! as they are typed and prints a submission report once the quiz is handed
//! in.

use anyhow::Context;
use clap::Parser;
use libquizflow::{AppState, LoggingMiddleware, QuizError, Store};
use quizflow_tui::{
    app::{EventHandler, QuizApp},
    cli::{Cli, ReportFormat},
    error::{Result, TuiError},
    terminal::{install_panic_hook, TerminalGuard},
    ui::Theme,
};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);

        let code = err
            .downcast_ref::<TuiError>()
            .map(TuiError::exit_code)
            .or_else(|| err.downcast_ref::<QuizError>().map(QuizError::exit_code))
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config().context("Failed to load configuration")?;
    cli.logging(&config)?
        .init()
        .context("Failed to initialize logging")?;

    let setup = config.quiz_setup()?;
    tracing::info!(
        student_id = %setup.student_id,
        questions = setup.catalog.len(),
        policy = ?setup.policy,
        "Starting quiz"
    );

    let store = Store::new(setup, vec![Box::new(LoggingMiddleware::new())]);
    let app = QuizApp::new(
        store,
        Theme {
            colors: config.ui.colors,
        },
    );
    let events = EventHandler::new(config.ui.tick_rate_ms);

    install_panic_hook();
    let mut guard = TerminalGuard::enter()?;
    let outcome = run_app(&mut guard, app, &events);
    guard.restore()?;

    let final_state = outcome?;
    if final_state.submitted() {
        print_report(&final_state, cli.format)?;
    } else {
        tracing::info!("Quit without submitting");
    }

    Ok(())
}

fn run_app(guard: &mut TerminalGuard, mut app: QuizApp, events: &EventHandler) -> Result<AppState> {
    loop {
        app.draw(guard.terminal())?;

        let event = events.next()?;
        app.handle_event(event);

        if app.should_quit() {
            break;
        }
    }

    Ok(app.finish())
}

fn print_report(state: &AppState, format: ReportFormat) -> Result<()> {
    let report = state.report();
    match format {
        ReportFormat::Text => print!("{}", report),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
