/*!
CPU-visible memory: the 64 KiB address space the 6502 core reads and writes.

Address map (as modeled by this core):
- $0000-$07FF: 2 KiB internal RAM
- $0800-$1FFF: three mirrors of $0000-$07FF
- $2000-$FFFF: flat, unmirrored storage

On real hardware $2000-$401F holds PPU/APU/IO registers and $4020-$FFFF is
cartridge space. Those devices are external collaborators; a fuller system
intercepts `get`/`set` for addresses at or above $2000. This core keeps the
whole region as plain bytes so programs and vectors can live anywhere.

Every access is total: addresses are `u16` and values `u8`, so no access can
fall outside the 64 KiB space and there are no error paths.
*/

use crate::bus::ram::{RAM_WINDOW_END, Ram};

/// Size of the CPU address space in bytes.
pub const ADDRESS_SPACE_SIZE: usize = 0x1_0000;

/// The byte-addressable bus owned by the CPU.
#[derive(Clone)]
pub struct Memory {
    ram: Ram,
    // Indexed by the full CPU address; cells below $2000 are never touched.
    flat: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("ram", &self.ram)
            .field("size", &ADDRESS_SPACE_SIZE)
            .finish()
    }
}

impl Memory {
    /// Create a zero-filled address space.
    pub fn new() -> Self {
        Self {
            ram: Ram::new(),
            flat: vec![0u8; ADDRESS_SPACE_SIZE].into_boxed_slice(),
        }
    }

    /// Read the byte visible at `address`.
    #[inline]
    pub fn get(&self, address: u16) -> u8 {
        if address < RAM_WINDOW_END {
            self.ram.read(address)
        } else {
            self.flat[address as usize]
        }
    }

    /// Store `value` at `address`.
    #[inline]
    pub fn set(&mut self, address: u16, value: u8) {
        if address < RAM_WINDOW_END {
            self.ram.write(address, value);
        } else {
            self.flat[address as usize] = value;
        }
    }

    /// Copy `bytes` into consecutive addresses starting at `start`.
    /// The destination address wraps from $FFFF to $0000.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &b in bytes {
            self.set(addr, b);
            addr = addr.wrapping_add(1);
        }
    }

    /// Reset every cell to 0.
    pub fn clear(&mut self) {
        self.ram.clear();
        self.flat.fill(0);
    }

    /// Read-only access to the internal RAM block.
    pub fn ram(&self) -> &Ram {
        &self.ram
    }
}
