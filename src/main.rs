use clap::Parser;
use roma_tours::{cli, config, error, load_catalog, session, terminal};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use roma_tours_common::{compute_visibility, CategoryFilter, LandingPage, RenderPayload};
use std::io::Write;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,roma_tours=debug,roma_tours_common=debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::List { json } => {
            let catalog = load_catalog(cli.data.as_deref(), &config)?;

            if json {
                println!("{}", serde_json::to_string_pretty(catalog.summaries())?);
            } else {
                println!("🏛  roma-tours - 観光地一覧 ({}件)\n", catalog.len());
                let mut out = std::io::stdout().lock();
                for summary in catalog.summaries() {
                    terminal::write_summary(&mut out, summary)?;
                }
                out.flush()?;
            }
        }

        Commands::Search { query, category, json } => {
            let catalog = load_catalog(cli.data.as_deref(), &config)?;
            // CLIでは不明カテゴリをエラーにする
            let filter = CategoryFilter::parse_strict(&category)?;
            let result = compute_visibility(&query, &filter, catalog.summaries());

            if json {
                println!("{}", serde_json::to_string_pretty(&result.visible)?);
            } else {
                println!("🔎 {} ({}/{})\n", result.message(), result.count, result.total);
                let mut out = std::io::stdout().lock();
                for key in &result.visible {
                    if let Some(summary) = catalog.summary(key) {
                        terminal::write_summary(&mut out, summary)?;
                    }
                }
                out.flush()?;
            }
        }

        Commands::Show { key, json } => {
            let catalog = load_catalog(cli.data.as_deref(), &config)?;
            let detail = catalog
                .detail(&key)
                .ok_or_else(|| roma_tours_common::Error::LocationNotFound(key.clone()))?;
            let payload = RenderPayload::from(detail);

            if json {
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                let mut out = std::io::stdout().lock();
                terminal::write_detail(&mut out, &payload)?;
                out.flush()?;
            }
        }

        Commands::Browse => {
            let catalog = load_catalog(cli.data.as_deref(), &config)?;
            println!("🏛  roma-tours - 対話モード (:help でコマンド一覧)\n");

            let mut view = terminal::TerminalView::new(std::io::stdout(), catalog.summaries());
            let mut page = LandingPage::new(catalog, config.debounce_ms);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());

            session::run(&mut page, stdin, &mut view).await?;
            view.finish()?;
        }

        Commands::Config { show, theme, toggle_theme, data_file, debounce_ms } => {
            let mut config = config;
            let mut changed = false;

            if let Some(theme) = theme {
                config.set_theme(theme.0);
                println!("✔ テーマを設定しました: {}", theme.0);
                changed = true;
            }

            if toggle_theme {
                let next = config.toggle_theme();
                println!("✔ テーマを切り替えました: {}", next);
                changed = true;
            }

            if let Some(path) = data_file {
                config.data_file = Some(path);
                changed = true;
            }

            if let Some(ms) = debounce_ms {
                config.debounce_ms = ms;
                changed = true;
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  テーマ: {}", config.effective_theme());
                println!(
                    "  カタログ: {}",
                    config
                        .data_file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込みデータ".to_string())
                );
                println!("  デバウンス: {}ms", config.debounce_ms);
            }
        }
    }

    Ok(())
}
