#![doc = r#"
nescore library crate.

A cycle-counted NES 6502 CPU interpreter and the 64 KiB memory bus it owns.

Modules:
- bus: flat 64 KiB memory with the 2 KiB RAM window mirrored through $1FFF
- cpu: 6502 CPU core (facade + state + opcode table + dispatch + execute modules)

Logging goes through the `log` facade; the crate never installs a logger.
Enable the `trace` feature for one `log::trace!` line per instruction.

In tests, CPU builders are available under `crate::test_utils`.
"#]

// Core modules
pub mod bus;
pub mod cpu;

// Re-export commonly used types at the crate root for convenience.
pub use bus::Memory;
pub use cpu::{Cpu, CpuError, InterruptKind};

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
