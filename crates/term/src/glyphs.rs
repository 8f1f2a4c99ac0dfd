//! Symbol faces for the terminal.
//!
//! The engine deals in opaque `SymbolId`s; this table decides what each one
//! looks like. All glyphs are single-width so tile layout stays aligned.

use crate::fb::Rgb;
use crate::types::SymbolId;

pub const SYMBOL_GLYPHS: [(char, Rgb); 20] = [
    ('♠', Rgb::new(120, 200, 255)),
    ('♥', Rgb::new(235, 80, 90)),
    ('♦', Rgb::new(255, 165, 0)),
    ('♣', Rgb::new(100, 220, 120)),
    ('★', Rgb::new(240, 220, 80)),
    ('●', Rgb::new(200, 120, 220)),
    ('■', Rgb::new(80, 220, 220)),
    ('▲', Rgb::new(250, 130, 180)),
    ('◆', Rgb::new(150, 150, 255)),
    ('▼', Rgb::new(180, 230, 90)),
    ('♪', Rgb::new(255, 200, 140)),
    ('♫', Rgb::new(140, 180, 200)),
    ('☼', Rgb::new(255, 230, 120)),
    ('Ω', Rgb::new(210, 160, 110)),
    ('§', Rgb::new(160, 220, 200)),
    ('¤', Rgb::new(230, 140, 240)),
    ('@', Rgb::new(255, 110, 60)),
    ('#', Rgb::new(120, 255, 180)),
    ('%', Rgb::new(190, 190, 190)),
    ('&', Rgb::new(100, 160, 255)),
];

/// Glyph and colour for a symbol. Unknown symbols render as `?`.
pub fn glyph_for(symbol: SymbolId) -> (char, Rgb) {
    SYMBOL_GLYPHS
        .get(symbol.0 as usize)
        .copied()
        .unwrap_or(('?', Rgb::new(255, 255, 255)))
}

/// The pool handed to the engine: one id per glyph, in table order.
pub fn symbol_pool() -> Vec<SymbolId> {
    (0..SYMBOL_GLYPHS.len() as u16).map(SymbolId).collect()
}
