use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod canvas;
mod command;

use command::{Command, SampleRing};

/// Telnet server collecting samples into a shared e-ring window
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(short, long, env = "E_RING_BIND", default_value = "127.0.0.1:2323")]
    bind: SocketAddr,

    /// Height in rows of the histogram sent by `hist`
    #[arg(
        long,
        env = "E_RING_HIST_HEIGHT",
        default_value_t = 8,
        value_parser = clap::value_parser!(u32).range(1..=256)
    )]
    height: u32,
}

type SharedRing = Arc<Mutex<SampleRing>>;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let listener = TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    info!(address = %args.bind, ring_size = command::RING_SIZE, "e-ring server listening");

    let ring = Arc::new(Mutex::new(SampleRing::new()));
    serve(listener, ring, args.height).await
}

async fn serve(listener: TcpListener, ring: SharedRing, hist_height: u32) -> Result<()> {
    loop {
        let (socket, addr) = listener
            .accept()
            .await
            .context("failed to accept connection")?;
        info!(%addr, "new connection");

        let ring = Arc::clone(&ring);
        tokio::spawn(async move {
            match handle_client(socket, ring, hist_height).await {
                Ok(()) => info!(%addr, "connection closed"),
                Err(err) => error!(%addr, error = %err, "error handling client"),
            }
        });
    }
}

async fn handle_client(mut socket: TcpStream, ring: SharedRing, hist_height: u32) -> Result<()> {
    let (reader, mut writer) = socket.split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    writer.write_all(b"Welcome to e-ring!\r\n").await?;
    writer
        .write_all(b"Type 'help' for available commands or 'quit' to exit.\r\n")
        .await?;
    writer.write_all(b"> ").await?;

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            break;
        }

        let response = match Command::parse(&line) {
            Ok(Command::Empty) => continue,
            Ok(Command::Quit) => {
                writer.write_all(b"Goodbye!\r\n").await?;
                break;
            }
            Ok(command) => {
                debug!(?command, "executing");
                let mut ring = ring.lock().await;
                command::execute(&command, &mut ring, hist_height)
            }
            Err(err) => {
                warn!(line = line.trim(), error = %err, "rejected line");
                let mut ring = ring.lock().await;
                command::reject(&err, &mut ring)
            }
        };

        writer.write_all(response.as_bytes()).await?;
        writer.write_all(b"> ").await?;
    }

    Ok(())
}
