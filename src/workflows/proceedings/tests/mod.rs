mod assembler;
mod common;
mod party;
