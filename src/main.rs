use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use folio::albums::{list_albums, CoverMode, DriveClient, ImageTransform, LoadOptions};
use folio::config::{SiteConfig, DEFAULT_CONFIG_PATH};
use folio::{render, site};

#[derive(Parser)]
#[command(name = "folio", version, about = "Prerender portfolio cards, writing and albums")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every configured container into HTML fragments.
    Build {
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Overrides `site.output_dir`.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the albums under a Drive folder as JSON.
    Albums {
        #[arg(long)]
        folder: String,
        #[arg(long, env = "FOLIO_DRIVE_KEY")]
        key: String,
        #[arg(long, default_value = "first")]
        cover: String,
        #[arg(long)]
        transform_base: Option<String>,
    },
    /// Print the label a card link would get.
    Label { url: String },
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Build { config, out } => {
            let site_config = SiteConfig::load(&config)?;
            let out_dir = out.unwrap_or_else(|| site_config.site.output_dir.clone());
            let drive = DriveClient::new().map_err(|e| e.to_string())?;

            let fragments = site::build_site(&site_config, &drive);
            let stuck = fragments.iter().filter(|f| !f.loaded).count();
            let written = site::write_fragments(&out_dir, &fragments)?;
            log::info!("Wrote {} fragment(s) to {}", written, out_dir.display());
            if stuck > 0 {
                log::warn!("{} container(s) left on their loading placeholder", stuck);
            }
            Ok(())
        }
        Command::Albums {
            folder,
            key,
            cover,
            transform_base,
        } => {
            let drive = DriveClient::new().map_err(|e| e.to_string())?;
            let options = LoadOptions {
                cover_mode: CoverMode::parse(&cover),
                transform: transform_base
                    .map(|b| ImageTransform::new(&b))
                    .unwrap_or_default(),
            };
            let albums = list_albums(&drive, &folder, &key, &options, &mut rand::thread_rng())
                .map_err(|e| format!("Failed to load albums from Google Drive: {}", e))?;
            let json = serde_json::to_string_pretty(&albums).map_err(|e| e.to_string())?;
            println!("{}", json);
            Ok(())
        }
        Command::Label { url } => {
            println!("{}", render::link_label(&url));
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
