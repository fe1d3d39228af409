use crate::{Result, TensorError};
use std::fmt;
use std::str::FromStr;

/// Kind of the execution target backing a tensor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    #[default]
    Cpu,
    Cuda,
}

/// Execution target of a tensor: a device kind plus an ordinal, e.g. `CPU:0` or `CUDA:1`.
///
/// Storage of every device is host-resident in this crate. The device acts as a compatibility tag: operations
/// combining tensors of different devices are rejected instead of transferring data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Device {
    kind: DeviceKind,
    id: usize,
}

impl Device {
    pub fn new(kind: DeviceKind, id: usize) -> Self {
        Self { kind, id }
    }

    /// Returns the first host device, `CPU:0`.
    pub fn cpu() -> Self {
        Self::new(DeviceKind::Cpu, 0)
    }

    pub fn cuda(id: usize) -> Self {
        Self::new(DeviceKind::Cuda, id)
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Fails with [`TensorError::DeviceMismatch`] unless `other` is the same device.
    pub(crate) fn ensure_same(&self, other: &Device) -> Result<()> {
        if self != other {
            return Err(TensorError::DeviceMismatch {
                expected: *self,
                actual: *other,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            DeviceKind::Cpu => "CPU",
            DeviceKind::Cuda => "CUDA",
        };
        write!(f, "{kind}:{}", self.id)
    }
}

impl FromStr for Device {
    type Err = TensorError;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, id) = s
            .split_once(':')
            .ok_or_else(|| TensorError::InvalidDevice(format!("expected `<kind>:<id>`, got `{s}`")))?;

        let kind = match kind.to_ascii_uppercase().as_str() {
            "CPU" => DeviceKind::Cpu,
            "CUDA" => DeviceKind::Cuda,
            _ => return Err(TensorError::InvalidDevice(format!("unknown device kind `{kind}`"))),
        };
        let id = id
            .parse::<usize>()
            .map_err(|_| TensorError::InvalidDevice(format!("invalid device id `{id}`")))?;

        Ok(Device::new(kind, id))
    }
}
