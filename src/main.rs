// SPDX-License-Identifier: MPL-2.0
use health_portal::app::{paths, Flags, Message, Portal, Services};
use health_portal::application::port::Storage;
use health_portal::config;
use health_portal::domain::Role;
use health_portal::i18n::DictionaryStore;
use health_portal::infrastructure::{FileStorage, LucideIcons, MemoryStorage};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const HELP: &str = "\
health-portal: render a portal page

USAGE:
  health-portal [OPTIONS]

OPTIONS:
  --page NAME         landing | registration | dashboard (default: landing)
  --lang CODE         en | as | bn | hi, for this run only
  --theme-toggle      toggle the stored theme before rendering
  --login-role ROLE   open the login modal for asha | volunteer | admin | patient
  --check             validate the dictionaries and exit
  --config-dir DIR    directory holding settings.toml
  --data-dir DIR      directory holding preferences.cbor
  -h, --help          print this help
";

struct Args {
    flags: Flags,
    theme_toggle: bool,
    login_role: Option<Role>,
    check: bool,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut parser = pico_args::Arguments::from_env();

    let args = Args {
        theme_toggle: parser.contains("--theme-toggle"),
        check: parser.contains("--check"),
        login_role: parser.opt_value_from_str("--login-role")?,
        flags: Flags {
            page: parser.opt_value_from_str("--page")?.unwrap_or_default(),
            lang: parser.opt_value_from_str("--lang")?,
            data_dir: parser.opt_value_from_str("--data-dir")?,
            config_dir: parser.opt_value_from_str("--config-dir")?,
        },
    };

    let rest = parser.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }
    Ok(args)
}

fn main() -> ExitCode {
    // Stdout carries the rendered page; diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(args.flags.data_dir.clone(), args.flags.config_dir.clone());

    let (dictionaries, report) = match DictionaryStore::load_embedded_checked() {
        Ok(loaded) => loaded,
        Err(err) => {
            tracing::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    if args.check {
        if report.is_complete() {
            tracing::info!("all dictionaries complete");
            return ExitCode::SUCCESS;
        }
        // Each defect was already logged while loading.
        tracing::error!(defects = report.defects.len(), "dictionaries incomplete");
        return ExitCode::FAILURE;
    }

    let (config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!("{}", warning);
    }

    let persistent: Box<dyn Storage> = match FileStorage::open_default() {
        Some((storage, warning)) => {
            if let Some(warning) = warning {
                tracing::warn!("{}", warning);
            }
            tracing::debug!(path = %storage.path().display(), "preferences file");
            Box::new(storage)
        }
        None => {
            tracing::warn!("no data directory available, preferences will not persist");
            Box::new(MemoryStorage::new())
        }
    };
    let services = Services {
        persistent,
        session: Box::new(MemoryStorage::new()),
        icons: Box::new(LucideIcons::new()),
    };

    let mut portal = Portal::boot(&args.flags, &config, dictionaries, services);
    if args.theme_toggle {
        portal.update(Message::ThemeToggleClicked);
    }
    if let Some(role) = args.login_role {
        portal.update(Message::RoleCardClicked(role));
    }
    // Stands in for the page's timer: wait out each deferred icon attempt.
    while let Some(delay) = portal.pending_icon_retry() {
        std::thread::sleep(delay);
        portal.update(Message::IconRetryDue);
    }
    if let Some(destination) = portal.navigation() {
        tracing::info!(destination, "page requests navigation");
    }

    println!("{}", portal.to_html());
    ExitCode::SUCCESS
}
