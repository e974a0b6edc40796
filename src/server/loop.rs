// Server loop module
// Accepts connections until a shutdown signal arrives, then drains them

use hyper_util::server::graceful::GracefulShutdown;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use super::signal::SignalHandler;
use crate::config::AppState;
use crate::logger;

/// Accept connections on `listener` until `signals` requests shutdown
///
/// After the signal the listener is closed and open connections get up to
/// `performance.shutdown_timeout` seconds to finish their current response.
/// Returns the number of connections still active when the wait ended.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    active_connections: Arc<AtomicUsize>,
    signals: Arc<SignalHandler>,
) -> usize {
    let graceful = GracefulShutdown::new();

    while !signals.is_shutdown_requested() {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections, &graceful);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = signals.shutdown.notified() => {
                break;
            }
        }
    }

    drop(listener);
    logger::log_shutdown(active_connections.load(Ordering::SeqCst));

    let timeout = Duration::from_secs(state.config.performance.shutdown_timeout);
    if tokio::time::timeout(timeout, graceful.shutdown()).await.is_err() {
        logger::log_warning(&format!(
            "Connections still open after {}s, closing them",
            timeout.as_secs()
        ));
    }

    let remaining = active_connections.load(Ordering::SeqCst);
    logger::log_drained(remaining);
    remaining
}
