//! AMI client
//!
//! One short-lived manager session per announcement: connect, read
//! the protocol banner, log in, originate the playback call, log off.
//! The socket lives inside a single function scope and is dropped on
//! every exit path.

use async_trait::async_trait;
use application::{AnnouncePort, ApplicationError};
use domain::NodeId;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::TcpStream,
};
use tracing::{debug, error, instrument, trace};

use crate::action::{AmiAction, AmiResponse};

/// AMI client errors
#[derive(Debug, Error)]
pub enum AmiError {
    /// TCP connection to the manager port failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The manager rejected the login credentials
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The manager rejected the originate command
    #[error("Command rejected: {0}")]
    CommandRejected(String),

    /// The peer did not speak the manager protocol
    #[error("Protocol error: {0}")]
    ProtocolError(String),
}

/// AMI connection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmiConfig {
    /// Manager host (default: localhost)
    #[serde(default = "default_host")]
    pub host: String,

    /// Manager port (default: 5038)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Manager username
    pub username: String,

    /// Manager secret
    pub secret: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

const fn default_port() -> u16 {
    5038
}

/// Caller id presented on the originated announcement call
const ANNOUNCE_CALLER_ID: &str = "Weather Service <1000>";

/// Sound sequence the dialplan plays before the announcement
const ANNOUNCE_PLAYBACK: &str = "silence/1&weather-announcement";

/// Originate timeout in milliseconds
const ORIGINATE_TIMEOUT_MS: u32 = 30_000;

/// Minimal Asterisk Manager Interface client
#[derive(Debug, Clone)]
pub struct AmiClient {
    config: AmiConfig,
}

impl AmiClient {
    /// Creates a new client with the given configuration
    pub const fn new(config: AmiConfig) -> Self {
        Self { config }
    }

    /// Build the originate action that plays the announcement
    fn originate_action(node: &NodeId, text: &str) -> AmiAction {
        AmiAction::new("Originate")
            .field("Channel", format!("Local/{node}@from-internal"))
            .field("Application", "Playback")
            .field("Data", ANNOUNCE_PLAYBACK)
            .field("Priority", "1")
            .field("Timeout", ORIGINATE_TIMEOUT_MS.to_string())
            .field("CallerID", ANNOUNCE_CALLER_ID)
            .field("Variable", format!("ANNOUNCE_TEXT={text}"))
    }

    /// Run one full announce session against the manager
    ///
    /// The connection is scoped to this call; dropping the stream on
    /// any early return closes it.
    #[instrument(skip(self, text), fields(host = %self.config.host, node = %node))]
    pub async fn play_announcement(&self, node: &NodeId, text: &str) -> Result<(), AmiError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let stream = TcpStream::connect(&addr).await.map_err(|e| {
            error!(error = %e, "Failed to connect to manager");
            AmiError::ConnectionFailed(format!("connect {addr}: {e}"))
        })?;

        let (reader, mut writer) = tokio::io::split(stream);
        let mut reader = BufReader::new(reader);

        // Banner, e.g. "Asterisk Call Manager/5.0"
        let banner = read_line(&mut reader).await?;
        if !banner.starts_with("Asterisk Call Manager") {
            return Err(AmiError::ProtocolError(format!(
                "unexpected banner: {banner}"
            )));
        }
        debug!(banner = %banner, "Manager session opened");

        // Login with events suppressed so only response frames follow
        let login = AmiAction::new("Login")
            .field("Username", &self.config.username)
            .field("Secret", &self.config.secret)
            .field("Events", "off");
        send_action(&mut writer, &login).await?;

        let response = read_response(&mut reader).await?;
        if !response.is_success() {
            return Err(AmiError::AuthenticationFailed(
                response.message().to_string(),
            ));
        }
        debug!("Manager login accepted");

        // Originate the playback call
        let originate = Self::originate_action(node, text);
        send_action(&mut writer, &originate).await?;

        let response = read_response(&mut reader).await?;
        if !response.is_success() {
            return Err(AmiError::CommandRejected(response.message().to_string()));
        }
        debug!(node = %node, "Originate accepted");

        // Logoff; the server closes the connection after this, so its
        // response is best-effort
        send_action(&mut writer, &AmiAction::new("Logoff")).await?;
        let _ = read_response(&mut reader).await;

        Ok(())
    }
}

#[async_trait]
impl AnnouncePort for AmiClient {
    async fn announce(&self, node: &NodeId, text: &str) -> Result<(), ApplicationError> {
        self.play_announcement(node, text)
            .await
            .map_err(|e| match e {
                AmiError::CommandRejected(reason) => ApplicationError::AnnounceCommand(reason),
                other => ApplicationError::AnnounceConnection(other.to_string()),
            })
    }
}

/// Write one action frame
async fn send_action<W>(writer: &mut W, action: &AmiAction) -> Result<(), AmiError>
where
    W: tokio::io::AsyncWrite + Unpin,
{
    trace!(action = %action, "Sending action");
    writer
        .write_all(action.to_wire().as_bytes())
        .await
        .map_err(|e| AmiError::ConnectionFailed(format!("send {action}: {e}")))?;
    writer.flush().await.ok();
    Ok(())
}

/// Read one line, without its terminator
async fn read_line<R>(reader: &mut BufReader<R>) -> Result<String, AmiError>
where
    R: tokio::io::AsyncRead + Unpin,
{
    let mut line = String::new();
    let n = reader
        .read_line(&mut line)
        .await
        .map_err(|e| AmiError::ConnectionFailed(format!("read: {e}")))?;
    if n == 0 {
        return Err(AmiError::ProtocolError(
            "connection closed by peer".to_string(),
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Read frames until a response arrives, skipping event frames
async fn read_response<R>(reader: &mut BufReader<R>) -> Result<AmiResponse, AmiError>
where
    R: tokio::io::AsyncRead + Unpin,
{
    loop {
        let mut lines = Vec::new();
        loop {
            let line = read_line(reader).await?;
            trace!(line = %line, "Manager frame line");
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }

        if lines.is_empty() {
            // Stray blank line between frames
            continue;
        }

        let frame = AmiResponse::parse(lines.iter().map(String::as_str));
        if frame.is_event() {
            debug!(event = ?frame.get("Event"), "Skipping event frame");
            continue;
        }
        return Ok(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> NodeId {
        NodeId::new("1999").unwrap()
    }

    #[test]
    fn originate_action_targets_the_node_channel() {
        let wire = AmiClient::originate_action(&node(), "Sunny, 20 degrees.").to_wire();

        assert!(wire.starts_with("Action: Originate\r\n"));
        assert!(wire.contains("Channel: Local/1999@from-internal\r\n"));
        assert!(wire.contains("Application: Playback\r\n"));
        assert!(wire.contains("Data: silence/1&weather-announcement\r\n"));
        assert!(wire.contains("Priority: 1\r\n"));
        assert!(wire.contains("Timeout: 30000\r\n"));
        assert!(wire.contains("CallerID: Weather Service <1000>\r\n"));
        assert!(wire.contains("Variable: ANNOUNCE_TEXT=Sunny, 20 degrees.\r\n"));
    }

    #[test]
    fn announcement_text_cannot_smuggle_headers() {
        let wire =
            AmiClient::originate_action(&node(), "hi\r\nAction: Command\r\n\r\n").to_wire();

        assert_eq!(wire.matches("Action:").count(), 2); // Originate + flattened text
        assert!(wire.ends_with("\r\n\r\n"));
        assert_eq!(wire.matches("\r\n\r\n").count(), 1);
    }

    #[test]
    fn config_defaults() {
        let config: AmiConfig =
            serde_json::from_str(r#"{"username":"u","secret":"s"}"#).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5038);
    }

    #[tokio::test]
    async fn connect_failure_is_connection_error() {
        let client = AmiClient::new(AmiConfig {
            host: "127.0.0.1".to_string(),
            port: 9, // discard port, nothing listens there
            username: "u".to_string(),
            secret: "s".to_string(),
        });

        let result = client.play_announcement(&node(), "text").await;
        assert!(matches!(result, Err(AmiError::ConnectionFailed(_))));
    }
}
