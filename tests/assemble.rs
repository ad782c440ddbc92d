use mips_asm::{assemble, AsmError, Assembler, Catalog, FormatKind};
use pretty_assertions::assert_eq;

#[test]
fn add_three_registers() {
    assert_eq!(assemble("add $t0, $t1, $t2").unwrap(), "012a4020");
}

#[test]
fn syscall_without_operands() {
    assert_eq!(assemble("syscall").unwrap(), "0000000c");
}

#[test]
fn jump_regression_fixture() {
    // opcode 000010, rd = $t0, rs = rt = 0
    assert_eq!(assemble("j $t0").unwrap(), "08004000");
}

#[test]
fn unknown_mnemonic_fails() {
    let err = assemble("foo $t0").unwrap_err();
    assert!(matches!(err, AsmError::UnsupportedInstruction(ref m) if m == "foo"));
    assert_eq!(err.to_string(), "Unsupported instruction : foo");
}

#[test]
fn unknown_register_defaults_to_zero() {
    assert_eq!(assemble("add $t0, $bogus, $t2").unwrap(), "000a4020");
}

#[test]
fn numeric_aliases_match_names() {
    assert_eq!(assemble("add $8, $9, $10").unwrap(), assemble("add $t0, $t1, $t2").unwrap());
}

#[test]
fn immediate_and_memory_forms() {
    assert_eq!(assemble("addi $t0, $t1, $t2").unwrap(), "212a4000");
    assert_eq!(assemble("lw $t0, $t1").unwrap(), "8d204000");
    // non-register operands degrade to register 0
    assert_eq!(assemble("ori $t0, $t1, 42").unwrap(), "35204000");
}

#[test]
fn output_is_always_eight_hex_digits() {
    for line in ["add", "sub $ra, $ra, $ra", "beq $s0, $s1, $s2", "sw $sp", "j", "lui $31"] {
        let hex = assemble(line).unwrap();
        assert_eq!(hex.len(), 8, "{line}");
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()), "{line}");
    }
    assert_eq!(assemble("and").unwrap(), "00000024");
}

#[test]
fn assemble_is_pure() {
    let line = "slt $v0, $a0, $a1";
    assert_eq!(assemble(line).unwrap(), assemble(line).unwrap());
}

#[test]
fn whitespace_is_ignored_around_operands() {
    assert_eq!(assemble("  add\t$t0 ,$t1 ,  $t2 ").unwrap(), "012a4020");
}

#[test]
fn encoding_report_fields() {
    let enc = Assembler::default().encode("or $s0, $s1, $s2").unwrap();
    assert_eq!(enc.kind, FormatKind::Register);
    assert_eq!((enc.operands.rd, enc.operands.rs, enc.operands.rt), (16, 17, 18));
    assert_eq!(enc.fields.funct, 0b100101);
    assert_eq!(enc.binary, "000000 10001 10010 10000 00000 100101");
    let json = serde_json::to_value(&enc).unwrap();
    assert_eq!(json["word"], "02328025");
    assert_eq!(json["kind"], "Register");
}

#[test]
fn custom_catalog_entries() {
    let cat = Catalog::from_json(
        r#"[{"mnemonic":"nor","opcode":"000000","funct":"100111","kind":"R"}]"#,
    )
    .unwrap();
    let asm = Assembler::new(&cat);
    assert_eq!(asm.assemble("nor $t0, $t1, $t2").unwrap(), "012a4027");
    assert_eq!(asm.assemble("add $t0, $t1, $t2").unwrap(), "012a4020");
    assert!(assemble("nor $t0, $t1, $t2").is_err());
}

#[test]
fn custom_catalog_cannot_redefine_builtins() {
    let err = Catalog::from_json(r#"[{"mnemonic":"add","opcode":"111111","kind":"J"}]"#)
        .unwrap_err();
    assert!(matches!(err, AsmError::InvalidCatalogEntry { ref mnemonic, .. } if mnemonic == "add"));
    assert_eq!(assemble("add $t0, $t1, $t2").unwrap(), "012a4020");
}

#[test]
fn empty_line_is_unsupported() {
    for line in ["", "   ", "\t\n"] {
        let err = assemble(line).unwrap_err();
        assert!(matches!(err, AsmError::UnsupportedInstruction(ref m) if m.is_empty()), "{line:?}");
    }
}

#[test]
fn non_ascii_whitespace_does_not_separate() {
    let err = assemble("add\u{a0}$t0,$t1,$t2").unwrap_err();
    assert!(matches!(err, AsmError::UnsupportedInstruction(_)));
    assert_eq!(assemble("\u{1}add $t0, $t1, $t2").unwrap(), "012a4020");
}

#[test]
fn concurrent_assemble_agrees() {
    let lines = [
        "add $t0, $t1, $t2",
        "syscall",
        "j $t0",
        "add $t0, $bogus, $t2",
        "lw $t0, $t1",
        "or $s0, $s1, $s2",
    ];
    let expected: Vec<String> = lines.iter().map(|l| assemble(l).unwrap()).collect();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    (0..100)
                        .flat_map(|_| lines.iter().map(|l| assemble(l).unwrap()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for h in handles {
            let got = h.join().unwrap();
            for chunk in got.chunks(lines.len()) {
                assert_eq!(chunk, expected.as_slice());
            }
        }
    });
}
