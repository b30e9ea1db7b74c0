//! ELF32 program loader (spec.md §6's loader contract).
//!
//! Grounded in `elf_utils.rs`'s use of the `elf` crate, corrected to
//! load `PT_LOAD` program-header segments rather than `SHF_ALLOC`
//! sections: a statically-linked executable's runtime image is defined
//! by its program header table, and no loader source survived into
//! `original_source/` to check section-based loading against.

use elf::abi::PT_LOAD;
use elf::endian::AnyEndian;
use elf::ElfBytes;

use log::debug;

use crate::error::LoadError;
use crate::interpreter::Interpreter;

/// Top of the reserved stack region; chosen to leave headroom below
/// the top of the 32-bit address space for the argv/envp/auxv block.
const STACK_TOP: u32 = 0x7fff_fff0;

/// Load `path` into `interp`'s memory, set `pc` to the entry point,
/// and arrange the initial stack per the minimal RISC-V/Linux startup
/// convention the sample guest programs expect: `argc`, `argv[..]`,
/// a NULL terminator, an empty envp, and an empty auxv.
pub fn load(interp: &mut Interpreter, path: &str, args: &[String]) -> Result<(), LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;

    let file = ElfBytes::<AnyEndian>::minimal_parse(&bytes)?;
    let segments = file.segments().ok_or(LoadError::NoLoadableSegments)?;

    let mut loaded_any = false;
    for phdr in segments.iter() {
        if phdr.p_type != PT_LOAD {
            continue;
        }
        loaded_any = true;
        let start = phdr.p_offset as usize;
        let filesz = phdr.p_filesz as usize;
        let data = &bytes[start..start + filesz];
        debug!(
            "loading segment vaddr={:#010x} filesz={:#x} memsz={:#x}",
            phdr.p_vaddr, phdr.p_filesz, phdr.p_memsz
        );
        interp.memory.write_bytes(phdr.p_vaddr as u32, data);
        // memsz - filesz bytes of .bss: the sparse store already reads
        // unwritten bytes as zero, so no explicit store is needed.
    }

    if !loaded_any {
        return Err(LoadError::NoLoadableSegments);
    }

    interp.pc = file.ehdr.e_entry as u32;
    setup_stack(interp, args)?;
    Ok(())
}

fn setup_stack(interp: &mut Interpreter, args: &[String]) -> Result<(), LoadError> {
    let mut cursor = STACK_TOP;
    let mut arg_ptrs = Vec::with_capacity(args.len());

    for arg in args {
        let bytes = arg.as_bytes();
        cursor = cursor
            .checked_sub(bytes.len() as u32 + 1)
            .ok_or(LoadError::ArgumentsTooLarge)?;
        cursor &= !0x3;
        interp.memory.write_bytes(cursor, bytes);
        interp.memory.store_u8(cursor + bytes.len() as u32, 0);
        arg_ptrs.push(cursor);
    }

    // argc, argv[0..argc], NULL, envp (empty, single NULL), auxv (AT_NULL).
    let word_count = 1 + arg_ptrs.len() + 1 + 1 + 2;
    cursor = cursor
        .checked_sub(word_count as u32 * 4)
        .ok_or(LoadError::ArgumentsTooLarge)?;
    cursor &= !0xf;

    let sp = cursor;
    interp.memory.store_u32(cursor, arg_ptrs.len() as u32);
    cursor += 4;
    for ptr in &arg_ptrs {
        interp.memory.store_u32(cursor, *ptr);
        cursor += 4;
    }
    interp.memory.store_u32(cursor, 0); // argv NULL terminator
    cursor += 4;
    interp.memory.store_u32(cursor, 0); // envp: empty, single NULL
    cursor += 4;
    interp.memory.store_u32(cursor, 0); // auxv: AT_NULL (type)
    cursor += 4;
    interp.memory.store_u32(cursor, 0); // auxv: AT_NULL (value)

    interp.regs.set_x(2, sp);
    Ok(())
}
