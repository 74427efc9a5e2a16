use chessington::board::Board;
use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn setup_logger() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt::Subscriber::builder()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .finish()
        .init();
}

fn main() {
    setup_logger();

    let fen = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let board = if fen.is_empty() {
        Board::at_starting_position()
    } else {
        match Board::from_fen(&fen) {
            Ok(board) => board,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(2);
            }
        }
    };

    log::info!("Chessington - {} to move", board.current_player());
    chessington::console::run_interactive_terminal(board);
}
