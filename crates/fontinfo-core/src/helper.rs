//! Runs the external XSETTINGS dump program

use std::process::{Command, Stdio};

use crate::error::HelperUnavailable;
use crate::reporters::xsettings::parse_settings_dump;
use crate::traits::XSettingsHelper;

/// `dump_xsettings` (from xsettingsd) run to completion with its output
/// captured.
#[derive(Debug, Clone)]
pub struct DumpXSettings {
    program: String,
}

impl DumpXSettings {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl XSettingsHelper for DumpXSettings {
    fn run(&self) -> Result<Vec<(String, String)>, HelperUnavailable> {
        tracing::debug!("Running {}", self.program);
        let output = Command::new(&self.program)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| HelperUnavailable::SpawnFailed {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(match output.status.code() {
                Some(status) => HelperUnavailable::ExitStatus {
                    program: self.program.clone(),
                    status,
                },
                None => HelperUnavailable::Terminated {
                    program: self.program.clone(),
                },
            });
        }

        // An empty filtered dump counts as a failure, like a grep that
        // selects nothing.
        let settings = parse_settings_dump(&String::from_utf8_lossy(&output.stdout));
        if settings.is_empty() {
            return Err(HelperUnavailable::NoMatchingKeys {
                program: self.program.clone(),
            });
        }
        Ok(settings)
    }
}
