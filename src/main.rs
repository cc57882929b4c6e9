use std::process::ExitCode;

use clap::Parser;
use hsu_performance::i18n::{self, keys, Translator};
use hsu_performance::ui_cli::Cli;
use hsu_performance::{app, config};
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!(%err, "config unavailable, using defaults");
            config::Config::default()
        }
    };
    let lang = i18n::resolve_language(cli.lang.as_deref(), &cfg.language);
    let tr = Translator::new_with_pack(&lang, std::path::Path::new("locales"));

    match app::run(&cli, &cfg, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

/// RUST_LOG가 있으면 따르고, 없으면 -v 횟수로 레벨을 정한다.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
