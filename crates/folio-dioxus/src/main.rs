use dioxus::prelude::*;
use folio_config::{Config, resolve_posts_path};
use folio_engine::io;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use ui::App;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("folio starting up!");

    let args: Vec<String> = env::args().collect();
    let program_name = args.first().cloned().unwrap_or_else(|| "folio".to_string());
    if args.len() > 2 {
        eprintln!("Usage: {program_name} [posts-folder-path]");
        process::exit(1);
    }
    let cli_arg = args.get(1).map(String::as_str);

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    let posts_path = match resolve_posts_path(cli_arg, &config_path) {
        Ok(Some(path)) => path,
        Ok(None) => {
            eprintln!("Error: No posts path provided and no config file found");
            eprintln!("Usage: {program_name} <posts-folder-path>");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {program_name} <posts-folder-path>");
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

    log::info!("Using posts path: {}", posts_path.display());
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(PostsPath(posts_path))
        .launch(app_root);
}

/// Validated posts directory, handed to the root component as context.
#[derive(Clone)]
struct PostsPath(PathBuf);

fn app_root() -> Element {
    let PostsPath(posts_path) = use_context::<PostsPath>();

    rsx! {
        App { posts_path }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("folio")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
