use nescore::Cpu;
use nescore::cpu::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};

const PROGRAM_START: u16 = 0x8000;

fn demo_program() -> Vec<u8> {
    vec![
        0xA9, 0x10, // LDA #$10
        0x69, 0x05, // ADC #$05 => A = 0x15
        0x8D, 0x00, 0x02, // STA $0200
        0xE8, // INX
        0xD0, 0xFD, // BNE -3 -> loop until X wraps to 0
        0x02, // KIL: stops the strict run loop
    ]
}

fn main() {
    let mut cpu = Cpu::new();
    cpu.load(PROGRAM_START, &demo_program());

    // Vectors (NMI, RESET, IRQ/BRK) all point at the program start
    for vector in [NMI_VECTOR, RESET_VECTOR, IRQ_VECTOR] {
        cpu.load(vector, &PROGRAM_START.to_le_bytes());
    }
    cpu.reset();

    // Run until the KIL opcode halts the CPU (with a safety cap)
    let max_instr: usize = 1_000_000;
    match cpu.run(max_instr) {
        Ok(cycles) => println!("Stopped after step cap ({} cycles)", cycles),
        Err(err) => println!("Stopped: {}", err),
    }

    // Inspect state
    let m0200 = cpu.memory().get(0x0200);
    println!("A: 0x{:02X}", cpu.a());
    println!("X: 0x{:02X}", cpu.x());
    println!("Y: 0x{:02X}", cpu.y());
    println!("SP: 0x{:02X}", cpu.sp());
    println!("PC: 0x{:04X}", cpu.pc());
    println!("P (flags): 0b{:08b}", cpu.status());
    println!("cycles: {}", cpu.cycles());
    println!("mem[0x0200]: 0x{:02X}", m0200);
}
