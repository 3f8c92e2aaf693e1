//! Load/store width, extension, and UART carve-out tests.

use pretty_assertions::assert_eq;

use rv32ref_core::common::{ExecError, MemoryError};
use rv32ref_core::isa::decode::decode;
use rv32ref_core::soc::uart::{RX_EMPTY, UART_RX_ADDR, UART_TX_ADDR};
use rv32ref_core::{Config, Cpu};

use crate::common::builder::*;

fn cpu() -> Cpu {
    Cpu::new(&Config::default())
}

fn exec(cpu: &mut Cpu, word: u32) {
    cpu.step(&decode(word)).unwrap();
}

#[test]
fn store_word_then_load_word() {
    let mut c = cpu();
    c.regs.write(1, 0x100);
    c.regs.write(2, 0x1234_5678);
    exec(&mut c, sw(1, 2, 0));
    exec(&mut c, lw(3, 1, 0));
    assert_eq!(c.regs.read(3), 0x1234_5678);
}

#[test]
fn words_are_stored_little_endian() {
    let mut c = cpu();
    c.regs.write(1, 0x100);
    c.regs.write(2, 0x1234_5678);
    exec(&mut c, sw(1, 2, 0));
    assert_eq!(c.mem.read_bytes(0x100, 4).unwrap(), &[0x78, 0x56, 0x34, 0x12]);
}

#[test]
fn sub_word_stores_keep_only_the_low_bytes() {
    let mut c = cpu();
    c.regs.write(1, 0x100);
    c.regs.write(2, 0xAABB_CCDD);
    exec(&mut c, sb(1, 2, 0));
    exec(&mut c, sh(1, 2, 4));
    assert_eq!(c.mem.read_bytes(0x100, 1).unwrap(), &[0xDD]);
    assert_eq!(c.mem.read_bytes(0x104, 2).unwrap(), &[0xDD, 0xCC]);
    // Neighbours untouched.
    assert_eq!(c.mem.read_bytes(0x101, 1).unwrap(), &[0x00]);
}

#[test]
fn byte_load_sign_vs_zero_extends() {
    let mut c = cpu();
    c.regs.write(1, 0x100);
    c.regs.write(2, 0x80);
    exec(&mut c, sb(1, 2, 0));
    exec(&mut c, lb(3, 1, 0));
    exec(&mut c, lbu(4, 1, 0));
    assert_eq!(c.regs.read(3), 0xFFFF_FF80);
    assert_eq!(c.regs.read(4), 0x0000_0080);
}

#[test]
fn half_load_sign_vs_zero_extends() {
    let mut c = cpu();
    c.regs.write(1, 0x100);
    c.regs.write(2, 0x8001);
    exec(&mut c, sh(1, 2, 0));
    exec(&mut c, lh(3, 1, 0));
    exec(&mut c, lhu(4, 1, 0));
    assert_eq!(c.regs.read(3), 0xFFFF_8001);
    assert_eq!(c.regs.read(4), 0x0000_8001);
}

#[test]
fn negative_offset_addressing() {
    let mut c = cpu();
    c.regs.write(1, 0x108);
    c.regs.write(2, 0x55);
    exec(&mut c, sb(1, 2, -8));
    exec(&mut c, lbu(3, 1, -8));
    assert_eq!(c.regs.read(3), 0x55);
}

#[test]
fn unaligned_word_access_is_allowed() {
    let mut c = cpu();
    c.regs.write(1, 0x101);
    c.regs.write(2, 0xCAFE_F00D);
    exec(&mut c, sw(1, 2, 0));
    exec(&mut c, lw(3, 1, 0));
    assert_eq!(c.regs.read(3), 0xCAFE_F00D);
}

#[test]
fn load_past_the_end_of_memory_is_fatal() {
    let mut c = cpu();
    // Default memory is 1024 bytes; a word load at 1021 spans past the end.
    c.regs.write(1, 1021);
    let err = c.step(&decode(lw(2, 1, 0))).unwrap_err();
    assert!(matches!(err, ExecError::Memory(MemoryError::OutOfRange { .. })));
}

#[test]
fn store_past_the_end_of_memory_is_fatal() {
    let mut c = cpu();
    c.regs.write(1, 1023);
    c.regs.write(2, 0xFFFF);
    let err = c.step(&decode(sh(1, 2, 0))).unwrap_err();
    assert!(matches!(err, ExecError::Memory(MemoryError::OutOfRange { .. })));
    // A byte store at the same address is still in range.
    exec(&mut c, sb(1, 2, 0));
    assert_eq!(c.mem.read_bytes(1023, 1).unwrap(), &[0xFF]);
}

#[test]
fn failed_load_leaves_the_destination_untouched() {
    let mut c = cpu();
    c.regs.write(2, 0x77);
    c.regs.write(1, 4096);
    let _ = c.step(&decode(lw(2, 1, 0))).unwrap_err();
    assert_eq!(c.regs.read(2), 0x77);
}

#[test]
fn uart_tx_store_emits_but_does_not_touch_memory() {
    // Widen memory so the byte behind the TX address is inspectable.
    let mut cfg = Config::default();
    cfg.memory.size = 8192;
    let mut c = Cpu::new(&cfg);
    c.regs.write(1, UART_TX_ADDR);
    c.regs.write(2, 0x0000_0148); // low byte 'H'
    exec(&mut c, sb(1, 2, 0));
    c.regs.write(2, u32::from(b'i'));
    exec(&mut c, sb(1, 2, 0));
    assert_eq!(c.uart.output(), b"Hi");
    // The backing byte behind the TX address stays zero.
    assert_eq!(c.mem.read_bytes(UART_TX_ADDR, 1).unwrap(), &[0x00]);
}

#[test]
fn uart_tx_word_store_emits_only_the_low_byte() {
    let mut c = cpu();
    c.regs.write(1, UART_TX_ADDR);
    c.regs.write(2, 0xAABB_CC21);
    exec(&mut c, sw(1, 2, 0));
    assert_eq!(c.uart.output(), b"!");
}

#[test]
fn uart_rx_load_returns_the_empty_sentinel() {
    let mut c = cpu();
    c.regs.write(1, UART_RX_ADDR);
    exec(&mut c, lw(2, 1, 0));
    assert_eq!(c.regs.read(2), RX_EMPTY);
}

#[test]
fn store_width_selects_on_the_low_funct3_bits() {
    // funct3 4 has low bits 0: a 1-byte store, same class as SB.
    let mut c = cpu();
    c.regs.write(1, 0x100);
    c.regs.write(2, 0xFFFF_FFAB);
    exec(&mut c, s_type(rv32ref_core::isa::opcodes::OP_STORE, 0b100, 1, 2, 0));
    assert_eq!(c.mem.read_bytes(0x100, 4).unwrap(), &[0xAB, 0, 0, 0]);
}

#[test]
fn load_width_selects_on_the_low_funct3_bits() {
    // funct3 6 has low bits 2: a full word load, no extension applied.
    let mut c = cpu();
    c.regs.write(1, 0x100);
    c.regs.write(2, 0x8000_0001);
    exec(&mut c, sw(1, 2, 0));
    exec(&mut c, i_type(rv32ref_core::isa::opcodes::OP_LOAD, 3, 0b110, 1, 0));
    assert_eq!(c.regs.read(3), 0x8000_0001);
}

#[test]
fn unmatched_load_width_is_fatal() {
    let mut c = cpu();
    let word = i_type(rv32ref_core::isa::opcodes::OP_LOAD, 2, 0b011, 1, 0);
    let err = c.step(&decode(word)).unwrap_err();
    assert!(matches!(err, ExecError::UnsupportedVariant { .. }));
}

#[test]
fn unmatched_store_width_is_fatal() {
    let mut c = cpu();
    let word = s_type(rv32ref_core::isa::opcodes::OP_STORE, 0b011, 1, 2, 0);
    let err = c.step(&decode(word)).unwrap_err();
    assert!(matches!(err, ExecError::UnsupportedVariant { .. }));
}
