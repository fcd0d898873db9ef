//! External token scanner for the Lustre V6 grammar.
//!
//! The grammar-driven parser handles almost every token on its own. A few
//! tokens need more than a regular expression can give it: whitespace-sensitive
//! lookahead across `::`, negative lookahead after `12.`, block comments that
//! must not swallow `(*@` pragmas, and the free-form payload of a pragma. The
//! parser hands those positions to [`Scanner::scan`] together with the set of
//! token kinds it would currently accept.
//!
//! # Layers
//!
//! - [`Scanner`], [`TokenKind`], [`ValidSymbols`]: the recognizers themselves,
//!   generic over any host cursor implementing [`Lexer`].
//! - [`SourceBuffer`], [`Cursor`], [`SourceLexer`]: a reference host cursor over
//!   an in-memory source, with explicit commit/abandon semantics.
//! - [`Session`]: drives a scanner across a buffer, with checkpoints for
//!   resumable scanning.

mod chars;
mod cursor;
mod kind;
mod lexer;
mod scanner;
mod session;
mod source_buffer;
mod source_lexer;
mod span;
mod state;

pub use cursor::Cursor;
pub use kind::{TokenKind, ValidSymbols};
pub use lexer::Lexer;
pub use scanner::Scanner;
pub use session::{Checkpoint, ScanOutcome, Session, Token};
pub use source_buffer::SourceBuffer;
pub use source_lexer::SourceLexer;
pub use span::Span;
pub use state::{PragmaMode, StateError, SERIALIZED_LEN};
