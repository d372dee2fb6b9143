//! Section Header Parsing Benchmarks
//!
//! **Purpose:** Measure performance of parsing `objdump -h --wide` output and
//! diffing the resulting tables
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench section_parsing
//! cargo bench --bench section_parsing -- --save-baseline main
//! cargo bench --bench section_parsing -- --baseline main
//! ```
//!
//! **What's Being Measured:**
//! 1. `parse small object` - Typical relocatable object (~15 sections)
//! 2. `parse large binary` - Synthetic stress test (2000 sections, e.g. -ffunction-sections)
//! 3. `diff large tables` - Diffing two 2000-section tables with every third section changed
//!
//! **Performance Notes:**
//! - Parsing is dominated by the per-line regex match
//! - Hex conversion and map insertion are a small share of total time

use criterion::{criterion_group, criterion_main, Criterion};
use std::fmt::Write as _;
use std::hint::black_box;

use exesizecmp::diff::diff_tables;
use exesizecmp::extractor::parse_section_headers;

const SMALL_OBJECT: &str = "
hello.o:     file format elf64-x86-64

Sections:
Idx Name          Size      VMA               LMA               File off  Algn  Flags
  0 .text         00000017  0000000000000000  0000000000000000  00000040  2**0  CONTENTS, ALLOC, LOAD, RELOC, READONLY, CODE
  1 .data         00000000  0000000000000000  0000000000000000  00000057  2**0  CONTENTS, ALLOC, LOAD, DATA
  2 .bss          00000000  0000000000000000  0000000000000000  00000057  2**0  ALLOC
  3 .rodata       0000000d  0000000000000000  0000000000000000  00000057  2**0  CONTENTS, ALLOC, LOAD, READONLY, DATA
  4 .comment      0000002c  0000000000000000  0000000000000000  00000064  2**0  CONTENTS, READONLY
  5 .note.GNU-stack 00000000  0000000000000000  0000000000000000  00000090  2**0  CONTENTS, READONLY
  6 .note.gnu.property 00000020  0000000000000000  0000000000000000  00000090  2**3  CONTENTS, ALLOC, LOAD, READONLY, DATA
  7 .eh_frame     00000038  0000000000000000  0000000000000000  000000b0  2**3  CONTENTS, ALLOC, LOAD, RELOC, READONLY, DATA
  8 .debug_info   000000a1  0000000000000000  0000000000000000  000000e8  2**0  CONTENTS, RELOC, READONLY, DEBUGGING, OCTETS
  9 .debug_abbrev 0000006b  0000000000000000  0000000000000000  00000189  2**0  CONTENTS, READONLY, DEBUGGING, OCTETS
 10 .debug_aranges 00000030  0000000000000000  0000000000000000  000001f4  2**0  CONTENTS, RELOC, READONLY, DEBUGGING, OCTETS
 11 .debug_line   00000054  0000000000000000  0000000000000000  00000224  2**0  CONTENTS, RELOC, READONLY, DEBUGGING, OCTETS
 12 .debug_str    000000d2  0000000000000000  0000000000000000  00000278  2**0  CONTENTS, READONLY, DEBUGGING, OCTETS
 13 .debug_line_str 00000041  0000000000000000  0000000000000000  0000034a  2**0  CONTENTS, READONLY, DEBUGGING, OCTETS
";

fn synthetic_report(sections: usize, grow_every: usize) -> String {
    let mut out = String::from(
        "a.out:     file format elf64-x86-64\n\nSections:\n\
         Idx Name          Size      VMA               LMA               File off  Algn  Flags\n",
    );
    for i in 0..sections {
        let size = 0x100 + i as u64 + if grow_every > 0 && i % grow_every == 0 { 8 } else { 0 };
        let _ = writeln!(
            out,
            " {:>4} .text.fn_{:<6} {:08x}  0000000000000000  0000000000000000  00000040  2**4  CONTENTS, ALLOC, LOAD, READONLY, CODE",
            i, i, size
        );
    }
    out
}

fn bench_parse_small(c: &mut Criterion) {
    c.bench_function("parse small object", |b| {
        b.iter(|| parse_section_headers(black_box(SMALL_OBJECT)))
    });
}

fn bench_parse_large(c: &mut Criterion) {
    let report = synthetic_report(2000, 0);
    c.bench_function("parse large binary", |b| {
        b.iter(|| parse_section_headers(black_box(&report)))
    });
}

fn bench_diff_large(c: &mut Criterion) {
    let (Ok(before), Ok(after)) = (
        parse_section_headers(&synthetic_report(2000, 0)),
        parse_section_headers(&synthetic_report(2000, 3)),
    ) else {
        panic!("synthetic reports must parse");
    };

    c.bench_function("diff large tables", |b| {
        b.iter(|| diff_tables(black_box(&before), black_box(&after)))
    });
}

criterion_group!(benches, bench_parse_small, bench_parse_large, bench_diff_large);
criterion_main!(benches);
