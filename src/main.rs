use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use tokio::net::TcpListener;

use lanshare::logger::Logger;
use lanshare::net::{discovery, qr};
use lanshare::{AppState, Config, ShareError};

#[derive(Parser)]
#[command(name = "lanshare", version, about = "Share files with phones on the local network")]
struct Cli {
    /// Directory to share (default: ~/lan-offline-share)
    #[arg(short, long)]
    dir: Option<PathBuf>,
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
    /// Address to bind
    #[arg(long)]
    host: Option<IpAddr>,
    /// Wireless interface to advertise (auto-detected via `iw dev`)
    #[arg(short, long)]
    interface: Option<String>,
    /// Maximum upload request size in bytes
    #[arg(long)]
    max_upload: Option<usize>,
    /// Do not print the QR code
    #[arg(long)]
    no_qr: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = Logger::init() {
        eprintln!("Failed to initialise logger: {}", e);
    }

    if let Err(e) = run(cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ShareError> {
    let config = Config::with_custom(cli.dir, cli.port, cli.host, cli.interface, cli.max_upload);

    std::fs::create_dir_all(config.share_dir.as_ref())?;

    let iface = match &config.interface {
        Some(iface) => iface.clone(),
        None => discovery::wifi_interface()?,
    };
    info!("Using interface {}", iface);
    let ip = discovery::wait_for_ipv4(
        &iface,
        discovery::DEFAULT_ATTEMPTS,
        discovery::DEFAULT_RETRY_DELAY,
    )
    .await?;

    let url = config.display_url(ip);
    println!("[READY] Share dir : {}", config.share_dir.display());
    println!("[READY] URL       : {}", url);

    if !cli.no_qr {
        match qr::render_terminal(&url) {
            Ok(code) => println!("\n📱 Scan from your phone:\n\n{}", code),
            Err(e) => log::warn!("Could not render QR code: {}", e),
        }
    }

    let state = AppState { share_dir: config.share_dir.clone() };
    let app = lanshare::app(state, config.max_upload_bytes);

    let listener = TcpListener::bind(config.socket_addr()).await?;
    println!("[SERVER] Listening on {}", config.socket_addr());
    axum::serve(listener, app).await.map_err(ShareError::from)
}
