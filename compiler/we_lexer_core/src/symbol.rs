//! Single-byte punctuation rules.

use crate::byte_at;

/// Match exactly `byte` at `start`.
#[inline]
pub fn symbol(source: &str, start: usize, byte: u8) -> usize {
    if byte_at(source, start) == Some(byte) {
        start + 1
    } else {
        start
    }
}

macro_rules! symbol_rules {
    ($($(#[$attr:meta])* $name:ident => $byte:literal,)*) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $name(source: &str, start: usize) -> usize {
                symbol(source, start, $byte)
            }
        )*

        /// Every punctuation byte the language reserves.
        pub const SYMBOL_BYTES: &[u8] = &[$($byte),*];
    };
}

symbol_rules! {
    /// `[`
    list_start => b'[',
    /// `]`
    list_end => b']',
    /// `{`
    map_start => b'{',
    /// `}`
    map_end => b'}',
    /// `(`
    function_start => b'(',
    /// `)`
    function_end => b')',
    /// `<`
    type_parameter_start => b'<',
    /// `>`
    type_parameter_end => b'>',
    /// `'`
    type_alias => b'\'',
    /// `*`
    type_identity => b'*',
    /// `;`
    clause_separator => b';',
    /// `,`
    list_separator => b',',
    /// `.`
    identifier_separator => b'.',
    /// `:`
    define => b':',
    /// `@`
    macro_symbol => b'@',
    /// `_`
    discard => b'_',
}
