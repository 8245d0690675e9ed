use std::fmt;

use crate::format;

/// Port a server is assumed to listen on when none is given.
pub const DEFAULT_SERVER_PORT: u16 = 80;

/// A host that generates load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDescriptor {
    host: String,
    use_controller_vm: bool,
    max_users: u32,
}

impl ClientDescriptor {
    pub(crate) fn new(host: &str, use_controller_vm: bool, max_users: u32) -> Self {
        Self {
            host: host.to_string(),
            use_controller_vm,
            max_users,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Whether users are started inside the controller's own VM rather than a remote one.
    pub fn use_controller_vm(&self) -> bool {
        self.use_controller_vm
    }

    pub fn max_users(&self) -> u32 {
        self.max_users
    }
}

impl fmt::Display for ClientDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<client host="{}" use_controller_vm="{}" maxusers="{}" />"#,
            format::attr(&self.host),
            format::boolean(self.use_controller_vm),
            self.max_users
        )
    }
}

/// A server under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDescriptor {
    host: String,
    port: u16,
}

impl ServerDescriptor {
    pub(crate) fn new(host: &str, port: Option<u16>) -> Self {
        Self {
            host: host.to_string(),
            port: port.unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for ServerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<server host="{}" port="{}" type="tcp" />"#,
            format::attr(&self.host),
            self.port
        )
    }
}
