use std::net::SocketAddr;
use std::path::PathBuf;

pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub users_path: PathBuf,
    pub catalog_path: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".parse().unwrap(),
            users_path: PathBuf::from("users.json"),
            catalog_path: PathBuf::from("catalog.json"),
        }
    }
}
