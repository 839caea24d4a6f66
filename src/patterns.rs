//! Pattern composition: decorate variants with numbers and symbols.

use std::collections::HashSet;

/// Symbol alphabet used for decoration.
pub const SYMBOLS: [char; 6] = ['!', '@', '#', '$', '_', '.'];

/// Insert `candidate` unless it exceeds `max_len` or the set already holds
/// `cap` entries. Over-length strings are dropped immediately; nothing
/// downstream can shrink them back into bounds. Returns false once the cap
/// is hit so callers can stop composing.
fn admit(set: &mut HashSet<String>, candidate: String, max_len: usize, cap: usize) -> bool {
    if set.len() >= cap {
        return false;
    }
    if candidate.chars().count() <= max_len {
        set.insert(candidate);
    }
    true
}

/// Combine every variant with number tokens and symbol decorations.
///
/// For each variant `v` the plain form always survives; per number `n` we add
/// `v+n`, `v_n`, `n+v`; per symbol `s` we add `v+s`, `s+v`, `v+s+s`; and when
/// numbers exist, `v+s+n` and `s+v+n`. Output is deduplicated by set
/// membership and bounded by `max_len` (per entry) and `cap` (set size).
pub fn compose(
    variants: &HashSet<String>,
    numbers: &[String],
    max_len: usize,
    cap: usize,
) -> HashSet<String> {
    let mut out: HashSet<String> = HashSet::new();

    'outer: for v in variants {
        if v.is_empty() {
            continue;
        }
        if !admit(&mut out, v.clone(), max_len, cap) {
            break;
        }

        for n in numbers {
            if n.is_empty() {
                continue;
            }
            let ok = admit(&mut out, format!("{v}{n}"), max_len, cap)
                && admit(&mut out, format!("{v}_{n}"), max_len, cap)
                && admit(&mut out, format!("{n}{v}"), max_len, cap);
            if !ok {
                break 'outer;
            }
        }

        for s in SYMBOLS {
            let ok = admit(&mut out, format!("{v}{s}"), max_len, cap)
                && admit(&mut out, format!("{s}{v}"), max_len, cap)
                && admit(&mut out, format!("{v}{s}{s}"), max_len, cap);
            if !ok {
                break 'outer;
            }
            for n in numbers {
                if n.is_empty() {
                    continue;
                }
                let ok = admit(&mut out, format!("{v}{s}{n}"), max_len, cap)
                    && admit(&mut out, format!("{s}{v}{n}"), max_len, cap);
                if !ok {
                    break 'outer;
                }
            }
        }
    }

    if out.len() >= cap {
        log::warn!("pattern composition reached cap ({cap}); output truncated");
    }
    out
}
