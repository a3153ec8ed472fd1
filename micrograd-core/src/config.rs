//! Boundary configuration.
//!
//! This is the only place that reads process state. Callers build a
//! [`BackendConfig`] once, resolve it to a [`Device`], and hand the result to
//! [`crate::backend::dispatch`]; nothing inside the engine consults the
//! environment.

use crate::device::{resolve_preferred_backend, Device, DeviceProbe};
use crate::error::MicrogradError;
use log::debug;
use std::env::VarError;

/// Environment variable holding the preferred device (`cpu`, `cuda` or `hpu`).
pub const PREFERRED_DEVICE_VAR: &str = "PREFERRED_DEVICE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackendConfig {
    /// `None` lets the resolver pick the best available device.
    pub preferred_device: Option<Device>,
}

impl BackendConfig {
    pub fn new(preferred_device: Option<Device>) -> Self {
        BackendConfig { preferred_device }
    }

    /// Reads [`PREFERRED_DEVICE_VAR`] from the process environment.
    ///
    /// # Errors
    /// Returns [`MicrogradError::UnknownDevice`] if the variable is set to
    /// something other than a known device name, or to a value that is not
    /// valid Unicode.
    pub fn from_env() -> Result<Self, MicrogradError> {
        let raw = env_value(std::env::var(PREFERRED_DEVICE_VAR))?;
        Self::from_lookup(|_| raw.clone())
    }

    /// Builds the config from an arbitrary key lookup. An unset or blank
    /// value means "no preference".
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MicrogradError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let preferred_device = match lookup(PREFERRED_DEVICE_VAR) {
            Some(raw) if !raw.trim().is_empty() => Some(raw.parse::<Device>()?),
            _ => None,
        };
        debug!("Loaded backend config: preferred_device={:?}", preferred_device);
        Ok(BackendConfig { preferred_device })
    }

    /// Resolves the preference against what `probe` reports.
    pub fn resolve(&self, probe: &dyn DeviceProbe) -> Result<Device, MicrogradError> {
        resolve_preferred_backend(self.preferred_device, probe)
    }
}

fn env_value(var: Result<String, VarError>) -> Result<Option<String>, MicrogradError> {
    match var {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(MicrogradError::UnknownDevice(
            raw.to_string_lossy().into_owned(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{HostProbe, StaticProbe};

    fn lookup_with(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| {
            assert_eq!(key, PREFERRED_DEVICE_VAR);
            value.map(str::to_string)
        }
    }

    #[test]
    fn test_unset_means_no_preference() {
        let config = BackendConfig::from_lookup(lookup_with(None)).unwrap();
        assert_eq!(config.preferred_device, None);
        let blank = BackendConfig::from_lookup(lookup_with(Some("  "))).unwrap();
        assert_eq!(blank.preferred_device, None);
    }

    #[test]
    fn test_parses_device_name() {
        let config = BackendConfig::from_lookup(lookup_with(Some("hpu"))).unwrap();
        assert_eq!(config.preferred_device, Some(Device::Hpu));
    }

    #[test]
    fn test_rejects_unknown_device() {
        let result = BackendConfig::from_lookup(lookup_with(Some("quantum")));
        assert_eq!(
            result,
            Err(MicrogradError::UnknownDevice("quantum".to_string()))
        );
    }

    #[test]
    fn test_env_value_reports_non_unicode() {
        use std::ffi::OsString;

        assert_eq!(env_value(Err(VarError::NotPresent)), Ok(None));
        assert_eq!(
            env_value(Ok("cpu".to_string())),
            Ok(Some("cpu".to_string()))
        );
        let bad = env_value(Err(VarError::NotUnicode(OsString::from("cu?da"))));
        assert!(matches!(bad, Err(MicrogradError::UnknownDevice(_))));
    }

    #[test]
    fn test_resolve_delegates_to_probe() {
        let config = BackendConfig::new(Some(Device::Cuda));
        assert!(config.resolve(&HostProbe).is_err());
        assert_eq!(
            config.resolve(&StaticProbe::new([Device::Cuda])),
            Ok(Device::Cuda)
        );
        assert_eq!(BackendConfig::default().resolve(&HostProbe), Ok(Device::Cpu));
    }
}
