use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4030";
const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;
const DEFAULT_SSE_RETRY_SECS: u64 = 3;

#[derive(Parser, Debug)]
#[command(name = "tabular-mcpd", version, about = "CSV analytics MCP daemon.")]
struct CliArgs {
    #[arg(
        long = "stdio",
        env = "TABULAR_ENABLE_STDIO",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "TABULAR_MCP_SERVE",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    mcp_serve: bool,

    #[arg(long, env = "TABULAR_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(
        long,
        env = "TABULAR_SSE_KEEP_ALIVE_SECS",
        default_value_t = DEFAULT_SSE_KEEP_ALIVE_SECS
    )]
    sse_keep_alive_secs: u64,

    #[arg(
        long,
        env = "TABULAR_SSE_RETRY_SECS",
        default_value_t = DEFAULT_SSE_RETRY_SECS
    )]
    sse_retry_secs: u64,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Clone, Debug)]
pub struct TabularConfig {
    pub enable_stdio: bool,
    pub mcp_serve: bool,
    pub mcp_http_addr: SocketAddr,
    pub sse_keep_alive: Option<Duration>,
    pub sse_retry: Option<Duration>,
}

#[derive(Debug)]
pub enum ConfigError {
    NoTransport,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTransport => {
                write!(f, "no transport enabled: set --stdio and/or --mcp-serve")
            }
        }
    }
}

impl Error for ConfigError {}

impl TabularConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for TabularConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if !args.enable_stdio && !args.mcp_serve {
            return Err(ConfigError::NoTransport);
        }

        // Zero disables the corresponding SSE behavior.
        let sse_keep_alive = (args.sse_keep_alive_secs > 0)
            .then(|| Duration::from_secs(args.sse_keep_alive_secs));
        let sse_retry = (args.sse_retry_secs > 0).then(|| Duration::from_secs(args.sse_retry_secs));

        Ok(Self {
            enable_stdio: args.enable_stdio,
            mcp_serve: args.mcp_serve,
            mcp_http_addr: args.mcp_http_addr,
            sse_keep_alive,
            sse_retry,
        })
    }
}
