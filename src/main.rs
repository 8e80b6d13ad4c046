use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ops_millionaire::config::{self, Command, Config};
use ops_millionaire::constants::INPUT_POLL_MS;
use ops_millionaire::input::map_key;
use ops_millionaire::{build_info, logging, ui};
use ops_millionaire::{InputResult, QuestionStore, QuizController, QuizError};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// How the game loop ended.
enum ExitStatus {
    Clean,
    Failed,
}

fn main() -> io::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = match config::parse_args(std::env::args().skip(1), &cwd) {
        Ok(Command::Play(config)) => config,
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(Command::Help) => {
            println!("{}", config::USAGE);
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'ops-millionaire --help' for usage.");
            std::process::exit(1);
        }
    };

    let log_path = logging::init();
    info!(
        version = %build_info::version_line(),
        log = ?log_path,
        source = %config.source.describe(),
        "starting"
    );

    let mut rng = rand::thread_rng();
    let startup = QuestionStore::open(&config.source)
        .and_then(|store| QuizController::new(store, &mut rng));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = match startup {
        Ok(controller) => run_game(&mut terminal, controller, &mut rng),
        Err(err) => show_fatal_error(&mut terminal, &config, &err),
    };

    // Restore terminal on every path, then report.
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result? {
        ExitStatus::Clean => {
            info!("exiting");
            Ok(())
        }
        ExitStatus::Failed => std::process::exit(1),
    }
}

fn run_game(
    terminal: &mut Term,
    mut controller: QuizController,
    rng: &mut impl rand::Rng,
) -> io::Result<ExitStatus> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &controller))?;

        if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            continue;
        }
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        let input = map_key(key_event, controller.dialog_open());
        match controller.handle_input(input, rng) {
            Ok(InputResult::Continue) => {}
            Ok(InputResult::Exit) => return Ok(ExitStatus::Clean),
            Err(err) => {
                error!(error = %err, "could not start a new round");
                wait_on_error(terminal, &err.to_string())?;
                return Ok(ExitStatus::Failed);
            }
        }
    }
}

fn show_fatal_error(
    terminal: &mut Term,
    config: &Config,
    err: &QuizError,
) -> io::Result<ExitStatus> {
    error!(error = %err, source = %config.source.describe(), "question bank unusable");
    let message = match err {
        QuizError::Io(_) => format!("{} ({})", err, config.source.describe()),
        _ => err.to_string(),
    };
    wait_on_error(terminal, &message)?;
    Ok(ExitStatus::Failed)
}

/// Show the error dialog until any key is pressed.
fn wait_on_error(terminal: &mut Term, message: &str) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw_load_error(frame, message))?;
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}
