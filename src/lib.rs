pub mod assembler;
pub mod encoder;
pub mod error;
pub mod instructions;
pub mod parser;
pub mod registers;

pub use assembler::{assemble, Assembler, Encoding};
pub use encoder::{EncodedWord, Operands};
pub use error::AsmError;
pub use instructions::{Catalog, FormatKind, InstructionFormat};
