/// Raw format encoders and mnemonic constructors.
pub mod instruction;
