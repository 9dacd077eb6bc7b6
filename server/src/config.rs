use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "client/dist";

pub const INDEX_FILE: &str = "index.html";
pub const SHELL_CACHE_CONTROL: &str = "no-cache";
pub const HASHED_ASSET_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

pub fn bind_addr() -> IpAddr {
    std::env::var("BIND_ADDR")
        .ok()
        .and_then(|value| value.trim().parse::<IpAddr>().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Directory holding the built client bundle.
pub fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset_or_invalid() {
        temp_env::with_var_unset("PORT", || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
        temp_env::with_var("PORT", Some("0"), || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
        temp_env::with_var("PORT", Some("http"), || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
        temp_env::with_var("PORT", Some("8080"), || {
            assert_eq!(server_port(), 8080);
        });
    }

    #[test]
    fn bind_addr_parses_ip_or_falls_back() {
        temp_env::with_var_unset("BIND_ADDR", || {
            assert_eq!(bind_addr().to_string(), "0.0.0.0");
        });
        temp_env::with_var("BIND_ADDR", Some(" 127.0.0.1 "), || {
            assert_eq!(bind_addr().to_string(), "127.0.0.1");
        });
        temp_env::with_var("BIND_ADDR", Some("localhost"), || {
            assert_eq!(bind_addr().to_string(), "0.0.0.0");
        });
    }

    #[test]
    fn static_dir_ignores_blank_values() {
        temp_env::with_var("STATIC_DIR", Some("   "), || {
            assert_eq!(static_dir(), PathBuf::from(DEFAULT_STATIC_DIR));
        });
        temp_env::with_var("STATIC_DIR", Some("/srv/crime-hotspots"), || {
            assert_eq!(static_dir(), PathBuf::from("/srv/crime-hotspots"));
        });
    }
}
