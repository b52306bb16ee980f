use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_config::{Config, resolve_posts_path};
use folio_engine::{catalog, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

mod app;
mod new_post;

use app::{App, Mode};

const USAGE: &str = "[new] [posts-folder-path]";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let mut args: Vec<String> = env::args().collect();
    let program = args.remove(0);
    let scaffold = args.first().is_some_and(|a| a == "new");
    if scaffold {
        args.remove(0);
    }
    if args.len() > 1 {
        eprintln!("Usage: {program} {USAGE}");
        process::exit(1);
    }

    let posts_path = posts_path_or_exit(&program, args.first().map(String::as_str));

    if scaffold {
        let stdin = std::io::stdin();
        let details = new_post::ask_details(&mut stdin.lock(), &mut stdout())?;
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let path = new_post::create_post(&details, &posts_path, &date)?;
        println!("\nCreated new post: {}", path.display());
        return Ok(());
    }

    let posts = catalog::load_catalog(&posts_path)?;
    let mut app = App::new(posts);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Resolve and validate the posts directory, exiting with usage on failure.
fn posts_path_or_exit(program: &str, cli_arg: Option<&str>) -> PathBuf {
    let config_path = Config::config_path();
    let posts_path = match resolve_posts_path(cli_arg, &config_path) {
        Ok(Some(path)) => path,
        Ok(None) => {
            eprintln!("Error: No posts path provided and no config file found");
            eprintln!("Usage: {program} {USAGE}");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_posts_dir(&posts_path) {
        let source = if cli_arg.is_none() {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Posts path '{}'{source} is invalid: {e}",
            posts_path.display()
        );
        process::exit(1);
    }
    posts_path
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(f.area());
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[0]);

    // Post list panel
    let items: Vec<ListItem> = app
        .visible()
        .iter()
        .map(|post| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<12}", post.date), Style::default().fg(Color::DarkGray)),
                Span::raw(post.title.clone()),
            ]))
        })
        .collect();

    let list_title = match app.category() {
        Some(category) => format!("Posts ({}, {category})", app.sort().label()),
        None => format!("Posts ({})", app.sort().label()),
    };
    let posts_list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(list_title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(posts_list, panes[0], &mut app.list_state);

    // Detail panel
    let detail: Vec<Line> = app
        .detail_lines()
        .into_iter()
        .enumerate()
        .map(|(i, line)| match i {
            0 => Line::from(Span::styled(
                line,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            _ => Line::from(line),
        })
        .collect();

    let content = Paragraph::new(detail)
        .block(Block::default().borders(Borders::ALL).title("Post"))
        .wrap(Wrap { trim: false });

    f.render_widget(content, panes[1]);

    // Search line or key help
    let footer = match app.mode() {
        Mode::Search => Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Yellow)),
            Span::raw(app.search().to_string()),
            Span::raw("_"),
        ]),
        Mode::Browse => Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k ↓/j: Move | "),
            Span::raw("s: Sort | c: Category | "),
            Span::raw(if app.search().is_empty() {
                "/: Search".to_string()
            } else {
                format!("/: Search [{}]", app.search())
            }),
        ]),
    };

    f.render_widget(Paragraph::new(footer), rows[1]);
}
