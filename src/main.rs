use forkify::cli::{self, Command, HELP};
use forkify::{AppConfig, BookmarkStore, Controller, Event, ForkifyClient, TerminalView};
use log::{debug, info};
use std::env;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

type App = Controller<ForkifyClient, TerminalView<std::io::Stdout>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    debug!("{:?}", config);

    let client = ForkifyClient::new(&config)?;
    let store = BookmarkStore::new(&config.storage_dir);
    let mut app = Controller::with_store(client, TerminalView::stdout(), store).await;

    // Arguments are run as a single command line, e.g. `forkify "#abc; servings 8"`
    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        run_line(&mut app, &args.join(" ")).await;
        return Ok(());
    }

    info!("Starting interactive session against {}", config.api_url);
    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if !run_line(&mut app, &line).await {
            break;
        }
    }

    Ok(())
}

/// Run every command on `line`. Returns `false` once the user asked to quit.
async fn run_line(app: &mut App, line: &str) -> bool {
    let commands = match cli::parse_commands(line) {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("{}", e);
            return true;
        }
    };

    for command in commands {
        match command {
            Command::Event(event) => app.dispatch(event).await,
            Command::Upload(path) => match cli::read_new_recipe(&path).await {
                Ok(form) => app.dispatch(Event::AddRecipe(form)).await,
                Err(e) => app.report_error(&e),
            },
            Command::Help => println!("{}", HELP),
            Command::Quit => return false,
        }
    }
    true
}
