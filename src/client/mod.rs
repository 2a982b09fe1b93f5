//! Client Module
//!
//! The dispatch engine, the command surface built on top of it, and the
//! TCP-backed client.
//!
//! ## Architecture
//! - [`Session`] owns the stream halves and the session mode
//!   (idle / transaction / pipeline)
//! - The command surface lives in `commands` as thin wrappers over
//!   [`Session::run`]
//! - [`Client`] pins the stream halves to a buffered [`TcpStream`]

mod session;
mod commands;
mod sort;

pub use session::Session;
pub use sort::{Aggregate, SortOptions};

use std::io::{BufReader, BufWriter};
use std::net::TcpStream;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{CrimsonError, Result};
use crate::protocol::Reply;

/// A session over a buffered TCP stream
pub type Client = Session<BufReader<TcpStream>, BufWriter<TcpStream>>;

impl Client {
    /// Connect to a server and prepare the session
    ///
    /// Applies the socket options from the config, then performs the
    /// optional AUTH and SELECT handshake through the ordinary command
    /// path — connection setup is layered on the same primitives every
    /// other command uses.
    pub fn connect(config: &ClientConfig) -> Result<Client> {
        config.validate()?;

        let stream = TcpStream::connect(&config.addr)?;

        // Request/reply traffic is latency-bound
        stream.set_nodelay(config.nodelay)?;

        if config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
        }
        if config.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))?;
        }

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Clone the stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let mut client = Session::new(BufReader::new(read_stream), BufWriter::new(stream));

        tracing::debug!("connected to {}", peer_addr);

        if let Some(password) = &config.password {
            let reply = client.auth(password.as_str())?;
            if let Reply::Error(msg) = reply {
                return Err(CrimsonError::Config(format!("AUTH failed: {}", msg)));
            }
        }

        if let Some(index) = config.database {
            let reply = client.select(index)?;
            if let Reply::Error(msg) = reply {
                return Err(CrimsonError::Config(format!(
                    "SELECT {} failed: {}",
                    index, msg
                )));
            }
        }

        Ok(client)
    }
}
