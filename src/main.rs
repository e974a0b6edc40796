use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

mod browser;
mod config;
mod handler;
mod http;
mod logger;
mod server;

/// Browse and download the contents of a directory over HTTP
#[derive(Parser, Debug)]
#[command(name = "filewalker", version, about, long_about = None)]
struct Cli {
    /// Root directory to serve
    #[arg(value_name = "ROOT")]
    root: PathBuf,

    /// Configuration file (extension optional)
    #[arg(short, long, value_name = "FILE", default_value = config::DEFAULT_CONFIG_PATH)]
    config: String,

    /// Bind address
    #[arg(long)]
    host: Option<String>,

    /// Listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory listing format
    #[arg(short, long, value_enum)]
    render: Option<browser::RenderMode>,
}

impl Cli {
    fn overrides(&self) -> config::Overrides {
        config::Overrides {
            host: self.host.clone(),
            port: self.port,
            render: self.render,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let root = browser::validate_root(&cli.root)?;
    let cfg = config::Config::load_from(&cli.config, &cli.overrides())?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg, root))
}

async fn async_main(cfg: config::Config, root: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let state = Arc::new(config::AppState::new(&cfg, root));
    logger::log_server_start(&addr, state.join.root(), &cfg);

    let signals = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals));

    server::start_server_loop(listener, state, Arc::new(AtomicUsize::new(0)), signals).await;
    Ok(())
}
