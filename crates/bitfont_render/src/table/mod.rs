pub mod charset;
pub mod coe;
pub mod packer;
