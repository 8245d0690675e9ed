use std::fmt;
use std::io::Write;

use crate::format;
use crate::host::{ClientDescriptor, ServerDescriptor};
use crate::options::GlobalOptions;
use crate::phase::{Phase, TimeUnit};
use crate::session::Session;

/// Location of the DTD the rendered document declares.
pub const DTD_PATH: &str = "/opt/local/share/tsung/tsung-1.0.dtd";

/// User agents announced by every simulated user, with the percentage of users using each.
const USER_AGENTS: [(u8, &str); 2] = [
    (
        80,
        "Mozilla/5.0 (X11; U; Linux i686; en-US; rv:1.7.8) Gecko/20050513 Galeon/1.3.21",
    ),
    (
        20,
        "Mozilla/5.0 (Windows; U; Windows NT 5.2; fr-FR; rv:1.7.8) Gecko/20050511 Firefox/1.0.4",
    ),
];

/// The complete description of a load test.
///
/// Build it up with the `add_*` methods, then call [ScenarioDocument::serialize] to get the
/// configuration document. Every collection renders in the order it was added to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioDocument {
    options: GlobalOptions,
    clients: Vec<ClientDescriptor>,
    servers: Vec<ServerDescriptor>,
    phases: Vec<Phase>,
    sessions: Vec<Session>,
}

impl ScenarioDocument {
    pub fn new(options: GlobalOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Add a client that will be used to drive traffic from.
    ///
    /// `max_users` is the maximum number of users this client will create.
    pub fn add_client(&mut self, host: &str, use_controller_vm: bool, max_users: u32) {
        log::trace!("Adding client {host}");
        self.clients
            .push(ClientDescriptor::new(host, use_controller_vm, max_users));
    }

    /// Add a server under test. The port defaults to 80.
    pub fn add_server(&mut self, host: &str, port: Option<u16>) {
        log::trace!("Adding server {host}:{port:?}");
        self.servers.push(ServerDescriptor::new(host, port));
    }

    /// Add an arrival phase. Phases are numbered from 1 in the order they are added.
    pub fn add_phase(
        &mut self,
        duration: f64,
        duration_unit: TimeUnit,
        arrival_rate: f64,
        arrival_rate_unit: TimeUnit,
    ) {
        let ordinal = self.phases.len() + 1;
        log::trace!("Adding phase {ordinal}");
        self.phases.push(Phase::new(
            ordinal,
            duration,
            duration_unit,
            arrival_rate,
            arrival_rate_unit,
        ));
    }

    /// Add a session and return it for further building. The probability defaults to 100.
    pub fn add_session(&mut self, name: &str, probability: Option<u8>) -> &mut Session {
        log::trace!("Adding session {name}");
        self.sessions.push(Session::new(name, probability));
        let index = self.sessions.len() - 1;
        &mut self.sessions[index]
    }

    pub fn options(&self) -> &GlobalOptions {
        &self.options
    }

    pub fn clients(&self) -> &[ClientDescriptor] {
        &self.clients
    }

    pub fn servers(&self) -> &[ServerDescriptor] {
        &self.servers
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Render the configuration document.
    ///
    /// Rendering does not touch the scenario, so repeated calls give identical output.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Write exactly the output of [ScenarioDocument::serialize] to a writer.
    pub fn write<W>(&self, mut writer: W) -> std::io::Result<()>
    where
        W: Write,
    {
        writer.write_all(self.serialize().as_bytes())?;
        writer.flush()
    }
}

impl fmt::Display for ScenarioDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(r#"<?xml version="1.0"?>"#)?;
        write!(f, r#"<!DOCTYPE tsung SYSTEM "{DTD_PATH}" []>"#)?;
        write!(
            f,
            r#"<tsung loglevel="{}" version="{}" dumptraffic="{}">"#,
            self.options.log_level,
            format::attr(&self.options.version),
            format::boolean(self.options.dump_traffic)
        )?;

        f.write_str("<clients>")?;
        for client in &self.clients {
            write!(f, "{client}")?;
        }
        f.write_str("</clients>")?;

        f.write_str("<servers>")?;
        for server in &self.servers {
            write!(f, "{server}")?;
        }
        f.write_str("</servers>")?;

        f.write_str("<load>")?;
        for phase in &self.phases {
            write!(f, "{phase}")?;
        }
        f.write_str("</load>")?;

        f.write_str("<options>")?;
        f.write_str(r#"<option type="ts_http" name="user_agent">"#)?;
        for (probability, agent) in USER_AGENTS {
            write!(
                f,
                r#"<user_agent probability="{probability}">{agent}</user_agent>"#
            )?;
        }
        f.write_str("</option>")?;
        f.write_str("</options>")?;

        f.write_str("<sessions>")?;
        for session in &self.sessions {
            write!(f, "{session}")?;
        }
        f.write_str("</sessions>")?;

        f.write_str("</tsung>")
    }
}
