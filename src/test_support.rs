//! Scripted bus used by the sensor client tests.

use crate::{
    bus, bus_async,
    registers::{MemoryAddress, Register},
};
use std::collections::VecDeque;

/// A transaction as seen by the bus: the register and, for writes, the data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Read(MemoryAddress),
    Write(MemoryAddress, Register),
}

/// Replays scripted results in order and records every call it receives.
/// A write with no scripted result echoes its data.
#[derive(Default)]
pub(crate) struct RecordingBus {
    responses: VecDeque<Option<Register>>,
    failing: bool,
    pub(crate) calls: Vec<Call>,
}

impl RecordingBus {
    pub(crate) fn replying(responses: &[Option<Register>]) -> Self {
        Self {
            responses: responses.iter().copied().collect(),
            failing: false,
            calls: Vec::new(),
        }
    }

    /// A bus on which every transaction fails.
    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }
}

impl bus::Tc74Bus for RecordingBus {
    fn read(&mut self, memory_address: MemoryAddress) -> Option<Register> {
        self.calls.push(Call::Read(memory_address));
        if self.failing {
            return None;
        }
        self.responses.pop_front().flatten()
    }

    fn write(&mut self, memory_address: MemoryAddress, data: Register) -> Option<Register> {
        self.calls.push(Call::Write(memory_address, data));
        if self.failing {
            return None;
        }
        self.responses.pop_front().unwrap_or(Some(data))
    }
}

impl bus_async::Tc74Bus for RecordingBus {
    async fn read(&mut self, memory_address: MemoryAddress) -> Option<Register> {
        bus::Tc74Bus::read(self, memory_address)
    }

    async fn write(&mut self, memory_address: MemoryAddress, data: Register) -> Option<Register> {
        bus::Tc74Bus::write(self, memory_address, data)
    }
}
