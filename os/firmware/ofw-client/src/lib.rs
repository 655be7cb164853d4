//! # Open Firmware Property Access
//!
//! This crate defines the contract through which boot code queries an
//! Open Firmware (IEEE 1275) device tree. It does not talk to firmware
//! itself; the embedding bootloader implements [`PropertyAccessor`] on top of
//! its client-interface binding and hands it to consumers such as the memory
//! map enumerator in `ofw-mmap`.
//!
//! ## Overview
//!
//! Open Firmware exposes hardware as a tree of nodes addressed by path
//! (`/`, `/memory`, `/cpus/cpu@0`, ...). Every node carries named
//! properties whose values are raw byte strings. Most properties are either
//! text (NUL-terminated) or arrays of big-endian 32-bit *cells*.
//!
//! ```text
//! Bootloader
//!     ↓  PropertyAccessor (this crate)
//! Client Interface binding (finddevice, getprop, ...)
//!     ↓
//! Open Firmware
//! ```
//!
//! ## Key Components
//!
//! ### Node Handles ([`PHandle`])
//! Opaque package handles returned by `finddevice`. They are owned by the
//! firmware session and only ever borrowed by callers.
//!
//! ### Property Access ([`PropertyAccessor`])
//! * **Device lookup**: resolve a node path to a [`PHandle`]
//! * **Integer properties**: single-cell values such as `#address-cells`
//! * **Raw properties**: text values such as `copyright`
//! * **Integer arrays**: packed cell arrays such as `/memory/available`
//!
//! Copies follow `getprop` semantics: at most `buf.len()` bytes are copied
//! and the *full* property length is returned, so callers can detect
//! truncation by comparing the two. Bindings that cannot report the length
//! of an oversized value fill the buffer with its prefix and return
//! [`PropertyError::BufferTooSmall`].
//!
//! ### Errors ([`PropertyError`])
//! Absence is reported as [`PropertyError::NotFound`] so that callers can
//! treat optional properties as defaults rather than failures.
//!
//! ## Usage Patterns
//!
//! ```rust,ignore
//! use ofw_client::PropertyAccessor;
//!
//! let root = firmware.find_device("/")?;
//! let address_cells = firmware.integer_property_or(root, "#address-cells", 1)?;
//! ```
//!
//! ## Injection
//!
//! The accessor is always passed explicitly. There is no global firmware
//! session, which lets tests substitute an in-memory device tree.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![deny(unsafe_code)]

mod accessor;
mod error;
mod phandle;

pub use accessor::PropertyAccessor;
pub use error::PropertyError;
pub use phandle::PHandle;
