use std::collections::HashMap;
use std::sync::OnceLock;

/// Canonical register names, indexed by register number.
pub const REGISTER_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3",
    "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7",
    "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7",
    "t8", "t9", "k0", "k1", "gp", "sp", "fp", "ra",
];

fn table() -> &'static HashMap<String, u8> {
    static TABLE: OnceLock<HashMap<String, u8>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut map = HashMap::with_capacity(REGISTER_NAMES.len() * 2);
        for (i, name) in REGISTER_NAMES.iter().enumerate() {
            map.insert(format!("${name}"), i as u8);
            map.insert(format!("${i}"), i as u8);
        }
        map
    })
}

/// Strict lookup: `$t0`, `$8`, ... Exact match only.
pub fn lookup(token: &str) -> Option<u8> {
    table().get(token).copied()
}

/// Permissive lookup; unknown tokens fall back to `$zero`.
pub fn resolve(token: &str) -> u8 {
    match lookup(token) {
        Some(n) => n,
        None => {
            tracing::debug!(token, "unknown register, defaulting to $zero");
            0
        }
    }
}

/// Canonical `$name` for a register number (low 5 bits).
pub fn name_of(num: u8) -> String {
    format!("${}", REGISTER_NAMES[(num & 0x1F) as usize])
}
