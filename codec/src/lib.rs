//! # codec
//!
//! Conversion traits shared by the workspace.
//!
//! This crate defines the `Decoder` and `Encoder` traits that give every
//! conversion in the workspace the same type-safe shape.
//!
//! ## Overview
//!
//! The conversions flow like this:
//! ```text
//! [u8] / [u16] / [u32] / [i64] --decode--> Text --encode--> Vec<u8> / Vec<u16> / ...
//! ```
//!
//! The destination of a conversion is picked by the type the caller asks
//! for, so the same text can be encoded into different containers without
//! passing any runtime switch.
//!
//! ## Type Safety
//!
//! The traits use marker traits (`DecodableFrom` and `EncodableTo`) so that
//! only conversions that were explicitly declared compile.
//!
//! ## Example
//!
//! Concrete implementations live in the `utf16` crate:
//!
//! ```ignore
//! use codec::decoder::Decoder;
//! use codec::encoder::Encoder;
//! use utf16::Text;
//!
//! let units = vec![97u16, 115, 100, 102];
//! let text: Text = units.decode().unwrap();
//!
//! let bytes: Vec<u8> = text.encode().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
