//! The 6×3 operation table, indexed by hue/lightness cycle deltas
//! (spec §4.6). Closed and exhaustive: every `(hue_delta, lightness_delta)`
//! pair either names an operation or is the `(0, 0)` identity transition,
//! which the caller never dispatches (entering a same-coloured block
//! isn't a block-step at all).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Push,
    Pop,
    Add,
    Subtract,
    Multiply,
    Divide,
    Mod,
    Not,
    Greater,
    Pointer,
    Switch,
    Duplicate,
    Roll,
    InNumber,
    InChar,
    OutNumber,
    OutChar,
}

/// Looks up the operation for a hue/lightness transition. `hue_delta` and
/// `lightness_delta` are normalised mod 6 and mod 3 respectively before
/// lookup, so callers may pass raw signed differences.
///
/// `(0, 0)` returns `None` — there is no operation for "no change", and
/// it's the one cell of the table spec labels `(none)`.
pub fn operation_for(hue_delta: i32, lightness_delta: i32) -> Option<Operation> {
    use Operation::*;

    let hue = hue_delta.rem_euclid(6);
    let lightness = lightness_delta.rem_euclid(3);

    match (hue, lightness) {
        (0, 0) => None,
        (0, 1) => Some(Push),
        (0, 2) => Some(Pop),
        (1, 0) => Some(Add),
        (1, 1) => Some(Subtract),
        (1, 2) => Some(Multiply),
        (2, 0) => Some(Divide),
        (2, 1) => Some(Mod),
        (2, 2) => Some(Not),
        (3, 0) => Some(Greater),
        (3, 1) => Some(Pointer),
        (3, 2) => Some(Switch),
        (4, 0) => Some(Duplicate),
        (4, 1) => Some(Roll),
        (4, 2) => Some(InNumber),
        (5, 0) => Some(InChar),
        (5, 1) => Some(OutNumber),
        (5, 2) => Some(OutChar),
        _ => unreachable!("hue and lightness are reduced mod 6 and mod 3"),
    }
}
