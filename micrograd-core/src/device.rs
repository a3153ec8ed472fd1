use crate::error::MicrogradError;
use log::{debug, info};
use std::fmt;
use std::str::FromStr;

/// Represents the place where scalar arithmetic is executed.
///
/// The engine itself never looks at this value; it is resolved once at the
/// boundary and turned into a backend type (see [`crate::backend::dispatch`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Device {
    /// Plain host scalars. Always available.
    #[default]
    Cpu,
    /// NVIDIA GPU, scalars wrapped as rank-0 tensors.
    Cuda,
    /// Habana Gaudi HPU, scalars wrapped as rank-0 tensors.
    Hpu,
}

impl Device {
    /// Accelerators in the order they are preferred when no device is requested.
    pub const ACCELERATORS: [Device; 2] = [Device::Hpu, Device::Cuda];

    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Cpu => "cpu",
            Device::Cuda => "cuda",
            Device::Hpu => "hpu",
        }
    }

    pub fn is_accelerator(&self) -> bool {
        !matches!(self, Device::Cpu)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Device {
    type Err = MicrogradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(Device::Cpu),
            "cuda" | "gpu" => Ok(Device::Cuda),
            "hpu" => Ok(Device::Hpu),
            _ => Err(MicrogradError::UnknownDevice(s.to_string())),
        }
    }
}

/// Answers whether a device can be used on this machine.
pub trait DeviceProbe {
    fn is_available(&self, device: Device) -> bool;
}

/// Probe for a plain host build: only the CPU is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl DeviceProbe for HostProbe {
    fn is_available(&self, device: Device) -> bool {
        device == Device::Cpu
    }
}

/// Probe backed by a fixed list of devices. The CPU is always available.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    available: Vec<Device>,
}

impl StaticProbe {
    pub fn new(available: impl IntoIterator<Item = Device>) -> Self {
        StaticProbe {
            available: available.into_iter().collect(),
        }
    }
}

impl DeviceProbe for StaticProbe {
    fn is_available(&self, device: Device) -> bool {
        device == Device::Cpu || self.available.contains(&device)
    }
}

/// Resolves the device the engine should run on.
///
/// * `None` picks the first available accelerator (HPU, then CUDA) and falls
///   back to the CPU.
/// * `Some(Device::Cpu)` always succeeds.
/// * `Some(accelerator)` succeeds only if the probe reports it.
///
/// # Errors
/// Returns [`MicrogradError::UnavailableBackend`] when an explicitly requested
/// accelerator is not present.
pub fn resolve_preferred_backend(
    preference: Option<Device>,
    probe: &dyn DeviceProbe,
) -> Result<Device, MicrogradError> {
    let resolved = match preference {
        None => Device::ACCELERATORS
            .into_iter()
            .find(|d| probe.is_available(*d))
            .unwrap_or(Device::Cpu),
        Some(Device::Cpu) => Device::Cpu,
        Some(device) => {
            if !probe.is_available(device) {
                return Err(MicrogradError::UnavailableBackend {
                    device,
                    reason: format!("{} was requested but no such device was detected", device),
                });
            }
            device
        }
    };
    debug!("Device preference {:?} resolved to {}", preference, resolved);
    if resolved == Device::Cpu && preference.is_none() {
        info!("No accelerator detected, running on cpu");
    }
    Ok(resolved)
}

#[cfg(test)]
#[path = "device_test.rs"]
mod tests;
