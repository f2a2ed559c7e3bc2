//! Static Helvetica metrics for line wrapping.
//!
//! Widths are the standard base-14 Helvetica AFM advance widths in
//! thousandths of an em, covering ASCII 0x20..=0x7E (95 printable
//! characters). Index = (byte as usize) - 32. Bytes outside the table
//! (WinAnsi upper half) use [`FALLBACK_WIDTH`].

/// Width used for characters the table does not cover.
pub const FALLBACK_WIDTH: u16 = 556;

/// Millimetres per PDF point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space  !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0    1    2    3    4    5    6    7    8    9    :    ;    <    =    >    ?
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // @     A    B    C    D    E    F    G    H    I    J    K    L    M    N    O
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    // P    Q    R    S    T    U    V    W    X    Y    Z    [    \    ]    ^    _
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // `    a    b    c    d    e    f    g    h    i    j    k    l    m    n    o
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // p    q    r    s    t    u    v    w    x    y    z    {    |    }    ~
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Advance width of one WinAnsi byte, in thousandths of an em.
pub fn byte_width(b: u8) -> u16 {
    match b {
        0x20..=0x7E => HELVETICA[(b - 0x20) as usize],
        _ => FALLBACK_WIDTH,
    }
}

/// Width of `text` set at `size_pt`, in millimetres.
pub fn text_width_mm(text: &str, size_pt: f32) -> f32 {
    let units: u32 = encode_win_ansi(text)
        .into_iter()
        .map(|b| byte_width(b) as u32)
        .sum();
    units as f32 / 1000.0 * size_pt * MM_PER_PT
}

/// Encode text for a WinAnsiEncoding base-14 font.
///
/// Latin-1 maps through directly, a handful of common typographic
/// characters map to their cp1252 slots, everything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\t' => b' ',
            ' '..='~' => c as u8,
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ => b'?',
        })
        .collect()
}
