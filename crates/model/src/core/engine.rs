//! Architectural step function.
//!
//! Applies one decoded instruction to the architectural state: register
//! file, program counter, byte-addressable memory, and the UART carve-outs.
//! All arithmetic is on 32-bit values; every register result is masked to
//! 32 bits by construction (`u32` wrapping operations) and lane 0 writes
//! are discarded by the register file.
//!
//! Dispatch is an exhaustive match keyed by `(inst_type, funct3, funct7)`
//! with an explicit unmatched-combination error arm — an `Unknown`
//! instruction or an unrecognized function-select combination is fatal to
//! the run, never silently skipped.

use tracing::debug;

use crate::common::error::ExecError;
use crate::config::Config;
use crate::core::gpr::Gpr;
use crate::isa::instruction::{Decoded, InstType};
use crate::isa::{funct3, funct7};
use crate::soc::memory::ByteMemory;
use crate::soc::uart::{UART_RX_ADDR, UART_TX_ADDR, Uart};

/// Mask limiting shift amounts to 0-31.
const SHAMT_MASK: u32 = 0x1F;

/// Mask selecting the load/store width class from the low funct3 bits.
const WIDTH_MASK: u32 = 0b11;

/// Mask clearing bit 0 of a JALR target address.
const JALR_ALIGN_MASK: u32 = !1;

/// Architectural state of the reference model.
///
/// Created once per simulated program run and mutated instruction by
/// instruction; there is exactly one active instruction stream per run, so
/// no sharing or locking is involved.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose register file (x0 hardwired to zero).
    pub regs: Gpr,
    /// Program counter; always a masked 32-bit value.
    pub pc: u32,
    /// Byte-addressable data memory.
    pub mem: ByteMemory,
    /// Memory-mapped UART.
    pub uart: Uart,
}

impl Cpu {
    /// Creates a CPU with zeroed registers, PC 0, and zero-filled memory of
    /// the configured capacity.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            pc: 0,
            mem: ByteMemory::new(config.memory.size),
            uart: Uart::new(),
        }
    }

    /// Executes one decoded instruction, committing its effects to the
    /// architectural state.
    ///
    /// The default next PC is `pc + 4` (wrapping, so the PC stays masked to
    /// 32 bits); taken branches, JAL, and JALR override it.
    ///
    /// # Errors
    ///
    /// Fatal to the run: [`ExecError::UnknownInstruction`] for an `Unknown`
    /// type, [`ExecError::UnsupportedVariant`] for an unmatched
    /// `(funct3, funct7)` combination, and [`ExecError::Memory`] for a
    /// load/store outside memory that matches neither UART address.
    pub fn step(&mut self, inst: &Decoded) -> Result<(), ExecError> {
        let rv1 = self.regs.read(inst.rs1);
        let rv2 = self.regs.read(inst.rs2);
        let mut next_pc = self.pc.wrapping_add(4);

        debug!(
            pc = format_args!("{:#010x}", self.pc),
            raw = format_args!("{:#010x}", inst.raw),
            ty = ?inst.inst_type,
            "step"
        );

        match inst.inst_type {
            InstType::R => {
                let res = self.alu_reg(inst, rv1, rv2)?;
                self.regs.write(inst.rd, res);
            }
            InstType::I => {
                let res = self.alu_imm(inst, rv1)?;
                self.regs.write(inst.rd, res);
            }
            InstType::Load => {
                let addr = rv1.wrapping_add(inst.imm as u32);
                let val = self.load(inst, addr)?;
                self.regs.write(inst.rd, val);
            }
            InstType::Store => {
                let addr = rv1.wrapping_add(inst.imm as u32);
                self.store(inst, addr, rv2)?;
            }
            InstType::Branch => {
                if self.branch_taken(inst, rv1, rv2)? {
                    next_pc = self.pc.wrapping_add(inst.imm as u32);
                }
            }
            InstType::Jal => {
                self.regs.write(inst.rd, self.pc.wrapping_add(4));
                next_pc = self.pc.wrapping_add(inst.imm as u32);
            }
            InstType::Jalr => {
                self.regs.write(inst.rd, self.pc.wrapping_add(4));
                next_pc = rv1.wrapping_add(inst.imm as u32) & JALR_ALIGN_MASK;
            }
            InstType::Lui => {
                self.regs.write(inst.rd, inst.imm as u32);
            }
            InstType::Auipc => {
                self.regs.write(inst.rd, self.pc.wrapping_add(inst.imm as u32));
            }
            InstType::Unknown => {
                return Err(ExecError::UnknownInstruction {
                    raw: inst.raw,
                    opcode: inst.opcode,
                    pc: self.pc,
                });
            }
        }

        self.pc = next_pc;
        Ok(())
    }

    /// Register-register ALU operations, keyed on `(funct3, funct7)`.
    ///
    /// The `(SLL, 0x20)` slot is the design's nonstandard bitwise NOT of
    /// `rs1`; it must be matched before the generic shift-left arm.
    fn alu_reg(&self, inst: &Decoded, rv1: u32, rv2: u32) -> Result<u32, ExecError> {
        let res = match (inst.funct3, inst.funct7) {
            (funct3::SLL, funct7::NOT) => !rv1,
            (funct3::ADD_SUB, funct7::DEFAULT) => rv1.wrapping_add(rv2),
            (funct3::ADD_SUB, funct7::SUB) => rv1.wrapping_sub(rv2),
            (funct3::AND, _) => rv1 & rv2,
            (funct3::OR, _) => rv1 | rv2,
            (funct3::XOR, _) => rv1 ^ rv2,
            (funct3::SLL, _) => rv1 << (rv2 & SHAMT_MASK),
            (funct3::SRL_SRA, funct7::DEFAULT) => rv1 >> (rv2 & SHAMT_MASK),
            (funct3::SRL_SRA, funct7::SRA) => ((rv1 as i32) >> (rv2 & SHAMT_MASK)) as u32,
            (funct3::SLT, _) => ((rv1 as i32) < (rv2 as i32)) as u32,
            (funct3::SLTU, _) => (rv1 < rv2) as u32,
            _ => return Err(self.unsupported(inst)),
        };
        Ok(res)
    }

    /// Register-immediate ALU operations, keyed on `funct3`.
    ///
    /// For right shifts (`funct3 = 5`), bit 30 of the original word — the
    /// funct7 field — selects logical vs arithmetic.
    fn alu_imm(&self, inst: &Decoded, rv1: u32) -> Result<u32, ExecError> {
        let imm = inst.imm;
        let res = match inst.funct3 {
            funct3::ADD_SUB => rv1.wrapping_add(imm as u32),
            funct3::AND => rv1 & imm as u32,
            funct3::OR => rv1 | imm as u32,
            funct3::XOR => rv1 ^ imm as u32,
            funct3::SLT => ((rv1 as i32) < imm) as u32,
            funct3::SLTU => (rv1 < imm as u32) as u32,
            funct3::SLL => rv1 << ((imm as u32) & SHAMT_MASK),
            funct3::SRL_SRA => {
                let shamt = (imm as u32) & SHAMT_MASK;
                if inst.funct7 & funct7::SRA != 0 {
                    ((rv1 as i32) >> shamt) as u32
                } else {
                    rv1 >> shamt
                }
            }
            _ => return Err(self.unsupported(inst)),
        };
        Ok(res)
    }

    /// Services a load: UART receive carve-out, else a bounds-checked
    /// memory read with width and sign/zero extension from `funct3`.
    fn load(&self, inst: &Decoded, addr: u32) -> Result<u32, ExecError> {
        if addr == UART_RX_ADDR {
            return Ok(self.uart.receive());
        }

        let width = load_width(inst, self.pc)?;
        let bytes = self.mem.read_bytes(addr, width)?;
        let mut word = [0u8; 4];
        word[..width].copy_from_slice(bytes);
        let raw = u32::from_le_bytes(word);

        let val = match inst.funct3 {
            funct3::LB => (raw as u8) as i8 as i32 as u32,
            funct3::LH => (raw as u16) as i16 as i32 as u32,
            _ => raw,
        };
        Ok(val)
    }

    /// Services a store: UART transmit carve-out, else a bounds-checked
    /// write of the low `width` bytes of `rv2`.
    fn store(&mut self, inst: &Decoded, addr: u32, rv2: u32) -> Result<(), ExecError> {
        if addr == UART_TX_ADDR {
            self.uart.transmit((rv2 & 0xFF) as u8);
            return Ok(());
        }

        let width = match inst.funct3 & WIDTH_MASK {
            funct3::SB => 1,
            funct3::SH => 2,
            funct3::SW => 4,
            _ => return Err(self.unsupported(inst)),
        };
        self.mem.write_bytes(addr, &rv2.to_le_bytes()[..width])?;
        Ok(())
    }

    /// Evaluates the branch comparator selected by `funct3`.
    fn branch_taken(&self, inst: &Decoded, rv1: u32, rv2: u32) -> Result<bool, ExecError> {
        let taken = match inst.funct3 {
            funct3::BEQ => rv1 == rv2,
            funct3::BNE => rv1 != rv2,
            funct3::BLT => (rv1 as i32) < (rv2 as i32),
            funct3::BGE => (rv1 as i32) >= (rv2 as i32),
            funct3::BLTU => rv1 < rv2,
            funct3::BGEU => rv1 >= rv2,
            _ => return Err(self.unsupported(inst)),
        };
        Ok(taken)
    }

    /// Builds the unmatched-combination error for `inst` at the current PC.
    fn unsupported(&self, inst: &Decoded) -> ExecError {
        ExecError::UnsupportedVariant {
            inst_type: inst.inst_type,
            funct3: inst.funct3,
            funct7: inst.funct7,
            pc: self.pc,
        }
    }
}

/// Access width in bytes for a load, from the low two bits of `funct3`.
///
/// Low bits 0 select one byte, 1 two bytes, 2 four bytes; the unmapped
/// value 3 is an unmatched combination.
fn load_width(inst: &Decoded, pc: u32) -> Result<usize, ExecError> {
    match inst.funct3 & WIDTH_MASK {
        funct3::LB => Ok(1),
        funct3::LH => Ok(2),
        funct3::LW => Ok(4),
        _ => Err(ExecError::UnsupportedVariant {
            inst_type: inst.inst_type,
            funct3: inst.funct3,
            funct7: inst.funct7,
            pc,
        }),
    }
}
