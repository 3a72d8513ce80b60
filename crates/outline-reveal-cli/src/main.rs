mod app;
mod render;
mod slides;

use std::fs;
use std::io::{Stdout, stdout};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use outline_reveal_config::Config;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use app::{App, View};

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Parser)]
#[command(name = "outline-reveal")]
#[command(about = "Present an outline one pause at a time")]
struct Cli {
    /// Outline file to present
    #[arg(required_unless_present = "init_config")]
    file: Option<PathBuf>,

    /// Config file (defaults to ~/.config/outline-reveal/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Slide to start on, counting from 1
    #[arg(long, default_value_t = 1)]
    slide: usize,

    /// Write a config file with the default settings and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if cli.init_config {
        let path = init_config(cli.config.as_deref())?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }
    let config = load_config(cli.config.as_deref())?;

    let Some(file) = cli.file else {
        bail!("No outline file given");
    };
    let file = Config::expand_path(&file).unwrap_or(file);
    let text = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read outline file {}", file.display()))?;
    info!("loaded {}", file.display());

    let mut app = App::new(&text, &config, cli.slide);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);
    app.finish();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            match Config::load_from_path(&path)? {
                Some(config) => Ok(config),
                None => bail!("Config file {} does not exist", path.display()),
            }
        }
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

/// Write the defaults where `load_config` would look, never over an existing file.
fn init_config(explicit: Option<&Path>) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => Config::expand_path(path).unwrap_or_else(|| path.to_path_buf()),
        None => Config::config_path(),
    };
    if path.exists() {
        bail!("Config file {} already exists", path.display());
    }
    Config::default()
        .save_to_path(&path)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    info!("wrote default config to {}", path.display());
    Ok(path)
}

fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, &app.view()))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Char('l') => {
                app.next()
            }
            KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('h') => app.previous(),
            KeyCode::Char('r') => app.restart(),
            KeyCode::Char('e') => paced_jump(terminal, app)?,
            _ => {}
        }
    }
}

/// Reveal the rest of the slide step by step; any key press stops early.
fn paced_jump(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let pace = app.pace();
    let mut failure: Option<anyhow::Error> = None;

    app.jump_to_end_with(|view| {
        match draw_and_wait(terminal, &view, pace) {
            Ok(false) => ControlFlow::Continue(()),
            Ok(true) => ControlFlow::Break(()),
            Err(err) => {
                failure = Some(err);
                ControlFlow::Break(())
            }
        }
    });

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Draw one frame, then wait up to `pace` for a key. True when interrupted.
fn draw_and_wait(terminal: &mut Tui, view: &View<'_>, pace: Duration) -> Result<bool> {
    terminal.draw(|f| ui(f, view))?;
    if event::poll(pace)? {
        event::read()?;
        return Ok(true);
    }
    Ok(false)
}

fn ui(f: &mut Frame, view: &View<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let title = format!(" Slide {}/{} ", view.slide_number, view.slide_count);
    let content = Paragraph::new(render::render(view.slide, view.display))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[0]);

    let (revealed, total) = view.progress;
    let help_text = Line::from(vec![
        Span::styled(
            format!("{revealed}/{total} "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("→/Space: Next | "),
        Span::raw("←: Previous | "),
        Span::raw("e: Reveal all | "),
        Span::raw("r: Restart | "),
        Span::raw("q: Quit"),
    ]);

    f.render_widget(Paragraph::new(vec![help_text]), chunks[1]);
}
