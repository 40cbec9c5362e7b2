/*!
cpu::mod - Public façade for the 6502 CPU core.

Layout:

```text
    state.rs        - Architectural registers + flag masks (`CpuState`).
    regs.rs         - `CpuRegs` trait the handlers are written against.
    arith.rs        - Pure carry / overflow predicates.
    addressing.rs   - Addressing modes, effective-address resolution, word reads.
    context.rs      - Per-step `CycleContext`.
    execute.rs      - Instruction semantic helpers (ALU, stack, RMW, branch).
    interrupt.rs    - NMI / IRQ latch, vectors and entry sequence.
    table.rs        - 256-entry opcode metadata + handler table.
    dispatch/       - Step orchestrator and per-family opcode handlers.
    core/           - `Cpu` façade owning state, memory and counters.
    error.rs        - `CpuError` for the strict stepping API.
```

The public surface is the `Cpu` façade plus the metadata types. Internal
organization may change without notice.

Feature flags:
    trace           - One `log::trace!` line per executed instruction.

Usage:
```rust
use nescore::cpu::Cpu;

let mut cpu = Cpu::new();
cpu.load(0x8000, &[0xA9, 0x42]); // LDA #$42
cpu.load(0xFFFC, &[0x00, 0x80]); // reset vector
cpu.reset();
assert_eq!(cpu.step(), 2);
assert_eq!(cpu.a(), 0x42);
```
*/

pub mod addressing;
pub mod arith;
pub mod context;
pub mod core;
pub(crate) mod dispatch;
pub mod error;
pub(crate) mod execute;
pub mod interrupt;
pub mod regs;
pub mod state;
pub mod table;

// Re-exports:
// - Cpu (facade over CpuState + Memory)
// - CpuState (raw state; exposed for tests, snapshots, trait impls)
// - Flag constants (canonical bit masks)
pub use crate::cpu::addressing::AddressingMode;
pub use crate::cpu::context::CycleContext;
pub use crate::cpu::core::Cpu;
pub use crate::cpu::error::CpuError;
pub use crate::cpu::interrupt::{InterruptKind, InterruptRequest, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
pub use crate::cpu::table::{OpInfo, OpcodeKind, opcode_info};
