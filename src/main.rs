//! navspy: a terminal browser for scroll-spy landing pages.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use navspy::{
    app_state, config, formats::html::HtmlFormat, input, logging, menu, report, ui, window, Error,
};
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect as Area, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing::warn;

#[derive(Parser)]
#[command(name = "navspy")]
#[command(about = "Scroll-spy navigation for landing pages", long_about = None)]
struct Args {
    /// HTML page to open
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Print the generated menu markup and exit
    #[arg(long)]
    print_menu: bool,

    /// Replay scroll notifications at these offsets and print a JSON report for each
    #[arg(long, value_name = "PX")]
    at: Vec<f64>,

    /// Distance units per terminal row
    #[arg(long, value_name = "PX")]
    row_height: Option<f64>,

    /// Layout width in columns for headless runs
    #[arg(long, default_value_t = 80)]
    width: usize,

    /// Viewport height in rows for headless runs
    #[arg(long, default_value_t = 24)]
    height: usize,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Idle poll interval when nothing is animating.
const IDLE_MILLIS: u64 = 250;
/// Rows moved per mouse wheel notch.
const WHEEL_STEPS: isize = 3;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(row_height) = args.row_height {
        cfg.row_height = row_height;
    }
    if let Some(log_file) = &args.log_file {
        cfg.log_file = log_file.display().to_string();
    }
    cfg.validate()?;

    let headless = args.print_menu || !args.at.is_empty();
    if !cfg.log_file.is_empty() {
        logging::init_file(Path::new(&cfg.log_file), args.verbose)?;
    } else if headless {
        logging::init_stderr(args.verbose);
    }

    let format = HtmlFormat;
    if !input::matches_format(&args.path, &format) {
        warn!(path = %args.path.display(), "file does not look like HTML, parsing anyway");
    }
    let document = input::load_page(&args.path, &format)?;

    if headless {
        let viewport = window::Viewport {
            width: args.width.max(1),
            height: args.height.max(1),
            row_height: cfg.row_height,
        };
        return run_headless(&args, window::Window::new(document, viewport));
    }

    run_tui(document, &cfg)
}

fn run_headless(args: &Args, mut win: window::Window) -> Result<(), Error> {
    if args.print_menu {
        print!("{}", menu::render_markup(&menu::links(&win)));
    }
    for &y in &args.at {
        let report = report::replay(&mut win, y)?;
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}

fn viewport_for(area: Area, cfg: &config::Config) -> window::Viewport {
    let (width, height) = ui::Regions::split(area).page_text_size();
    window::Viewport {
        width: width.max(1),
        height: height.max(1),
        row_height: cfg.row_height,
    }
}

fn run_tui(document: navspy::dom::Document, cfg: &config::Config) -> Result<(), Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = terminal
        .size()
        .map_err(Error::from)
        .and_then(|size| {
            let area = Area::new(0, 0, size.width, size.height);
            app_state::AppState::new(document, viewport_for(area, cfg), cfg)
        })
        .and_then(|mut app| run_app(&mut terminal, &mut app, cfg));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    cfg: &config::Config,
) -> Result<(), Error> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = if app.window.is_smooth_scrolling() {
            Duration::from_millis(cfg.frame_millis)
        } else {
            Duration::from_millis(IDLE_MILLIS)
        };

        if !event::poll(timeout)? {
            app.tick();
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.message = None;
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Up | KeyCode::Char('k') => app.scroll_steps(-1),
                    KeyCode::Down | KeyCode::Char('j') => app.scroll_steps(1),
                    KeyCode::PageUp => app.scroll_pages(-1),
                    KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_pages(1),
                    KeyCode::Home => app.scroll_home(),
                    KeyCode::End => app.scroll_end(),
                    KeyCode::Tab => app.select_next_link(),
                    KeyCode::BackTab => app.select_prev_link(),
                    KeyCode::Enter => {
                        app.click_selected();
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => app.scroll_steps(WHEEL_STEPS),
                MouseEventKind::ScrollUp => app.scroll_steps(-WHEEL_STEPS),
                MouseEventKind::Down(MouseButton::Left) => {
                    let size = terminal.size()?;
                    let menu = ui::Regions::split(Area::new(0, 0, size.width, size.height))
                        .menu_inner();
                    if mouse.column >= menu.x
                        && mouse.column < menu.x + menu.width
                        && mouse.row >= menu.y
                        && mouse.row < menu.y + menu.height
                    {
                        app.click_menu_at(
                            usize::from(mouse.row - menu.y),
                            usize::from(mouse.column - menu.x),
                        );
                    }
                }
                _ => {}
            },
            Event::Resize(width, height) => {
                let viewport = viewport_for(Area::new(0, 0, width, height), cfg);
                app.resize(viewport.width, viewport.height);
            }
            _ => {}
        }

        // Keep animating between input events.
        if app.window.is_smooth_scrolling() {
            app.tick();
        }
    }
}
