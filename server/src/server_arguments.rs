use std::io;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[clap(about = "Artwork search UI and API proxy")]
pub struct ServerArguments {
    #[clap(short = 'a', long = "addr", default_value = "127.0.0.1")]
    pub addr: String,
    #[clap(short = 'p', long = "port", default_value_t = 3000)]
    pub port: u16,
    /// Directory holding the built client (index.html, wasm, js)
    #[clap(long = "static-dir", default_value = "target/client/dist")]
    pub static_dir: String,
    /// Bearer token attached to every upstream request
    #[clap(long = "api-token", env = "ARTIC_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,
}

impl ServerArguments {
    pub fn get_socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        Ok(SocketAddr::new(self.addr.parse()?, self.port))
    }

    pub fn shellexpand_static_dir(&self) -> io::Result<PathBuf> {
        expanduser::expanduser(&self.static_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = ServerArguments::try_parse_from(["artwork-search"]).unwrap();
        assert_eq!(args.get_socket_addr().unwrap().to_string(), "127.0.0.1:3000");
        assert_eq!(args.static_dir, "target/client/dist");
    }

    #[test]
    fn explicit_token_and_address() {
        let args = ServerArguments::try_parse_from([
            "artwork-search",
            "-a",
            "0.0.0.0",
            "-p",
            "8080",
            "--api-token",
            "secret",
        ])
        .unwrap();
        assert_eq!(args.get_socket_addr().unwrap().port(), 8080);
        assert_eq!(args.api_token.as_deref(), Some("secret"));
    }

    #[test]
    fn bad_address_is_an_error() {
        let args = ServerArguments::try_parse_from(["artwork-search", "-a", "nowhere"]).unwrap();
        assert!(args.get_socket_addr().is_err());
    }
}
