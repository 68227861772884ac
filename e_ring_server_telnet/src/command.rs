use std::num::ParseIntError;

use e_ring::hist::{self, Hist};
use e_ring::{FindRange, Ring};
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::BinaryColor;

use crate::canvas::TextCanvas;

/// Number of samples kept by the server, one histogram column each.
pub const RING_SIZE: usize = 32;

/// The ring shared by every client.
pub type SampleRing = Ring<i16, RING_SIZE>;

/// A parsed client line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Push(Vec<i16>),
    Last,
    Stats,
    Hist,
    Quit,
    Empty,
}

/// A line the server does not understand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for available commands.")]
    Unknown(String),
    #[error("Usage: push <value> [value...]")]
    MissingValues,
    /// `push` stops at the first invalid token, samples before it are kept
    #[error("Invalid sample '{token}': {reason}")]
    InvalidValue {
        parsed: Vec<i16>,
        token: String,
        #[source]
        reason: ParseIntError,
    },
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Command::Empty);
        };
        match name {
            "help" => Ok(Command::Help),
            "last" => Ok(Command::Last),
            "stats" => Ok(Command::Stats),
            "hist" => Ok(Command::Hist),
            "quit" | "exit" => Ok(Command::Quit),
            "push" => {
                let mut parsed = Vec::new();
                for token in words {
                    match token.parse::<i16>() {
                        Ok(value) => parsed.push(value),
                        Err(reason) => {
                            return Err(CommandError::InvalidValue {
                                parsed,
                                token: token.to_string(),
                                reason,
                            })
                        }
                    }
                }
                if parsed.is_empty() {
                    return Err(CommandError::MissingValues);
                }
                Ok(Command::Push(parsed))
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Runs a command against the ring and returns the text to send back, CRLF terminated.
pub fn execute(command: &Command, ring: &mut SampleRing, hist_height: u32) -> String {
    match command {
        Command::Help => [
            "Available commands:",
            "  help - Show this help message",
            "  push <value> [value...] - Append samples (-32768..=32767)",
            "  last - Show the newest sample",
            "  stats - Show window statistics",
            "  hist - Draw the window as a histogram",
            "  quit - Close the connection",
        ]
        .iter()
        .map(|line| format!("{}\r\n", line))
        .collect(),
        Command::Push(values) => store(values, ring),
        Command::Last => match ring.last() {
            Some(last) => format!("last={}\r\n", last),
            None => "empty\r\n".to_string(),
        },
        Command::Stats => stats(ring),
        Command::Hist => match render_hist(ring, hist_height) {
            Ok(text) => text,
            Err(err) => format!("Cannot draw hist: {}\r\n", err),
        },
        Command::Quit => "Goodbye!\r\n".to_string(),
        Command::Empty => String::new(),
    }
}

/// Answers a rejected line. The samples a `push` parsed before its invalid token are
/// stored and acknowledged ahead of the error.
pub fn reject(err: &CommandError, ring: &mut SampleRing) -> String {
    match err {
        CommandError::InvalidValue { parsed, .. } if !parsed.is_empty() => {
            format!("{}{}\r\n", store(parsed, ring), err)
        }
        _ => format!("{}\r\n", err),
    }
}

fn store(values: &[i16], ring: &mut SampleRing) -> String {
    ring.extend(values.iter().copied());
    format!(
        "Stored {} sample(s), {}/{}\r\n",
        values.len(),
        ring.len(),
        ring.size()
    )
}

fn stats(ring: &SampleRing) -> String {
    let (Some(range), Some(last), Some(avg)) = (ring.range(), ring.last(), ring.avg()) else {
        return "empty\r\n".to_string();
    };
    let mut out = format!(
        "len={}/{} last={} min={} max={} avg={:.2}",
        ring.len(),
        ring.size(),
        last,
        range.min,
        range.max,
        avg,
    );
    if let (Some(var), Some(std_dev)) = (ring.var(Some(avg)), ring.std_dev(Some(avg))) {
        out.push_str(&format!(" var={:.2} std_dev={:.2}", var, std_dev));
    }
    out.push_str("\r\n");
    out
}

/// Draws the ring on a text canvas, one row per line.
pub fn render_hist(ring: &SampleRing, height: u32) -> Result<String, hist::Error> {
    if ring.is_empty() {
        return Ok("empty\r\n".to_string());
    }
    let size = Size::new(RING_SIZE as u32, height);
    let mut canvas = TextCanvas::new(size);
    let hist = Hist::new(Point::zero(), size);
    hist.draw(ring, &mut canvas, BinaryColor::On, BinaryColor::Off)?;
    Ok(canvas.render("\r\n"))
}
