#![doc = r#"
Bus module: the CPU-visible memory façade and its storage blocks.

Modules and responsibilities
- memory: `Memory`, the 64 KiB address space owned by the CPU (`get`/`set`).
- ram: the 2 KiB internal RAM and its four-way mirroring below $2000.

The CPU is the only reader and writer of `Memory`. Devices that live above
$2000 on real hardware (PPU, APU, cartridge) are not modeled here; they would
intercept `Memory::get`/`Memory::set` in a fuller system.
"#]

pub mod memory;
pub mod ram;

pub use memory::{ADDRESS_SPACE_SIZE, Memory};
pub use ram::{CPU_RAM_SIZE, RAM_WINDOW_END, Ram};
