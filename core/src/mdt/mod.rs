//! Mythic Dungeon Tool import strings.
//!
//! The importer validates a fixed header before reading a Lua-style keyed
//! table holding the pulls and route metadata. The whole payload must be a
//! single line.

mod encoder;

pub use encoder::{
    HEADER_PADDING, HEADER_PADDING_REPEAT, HEADER_PREFIX, MdtPreset, PRESET_NAME, PRESET_VERSION,
    PRESET_WEEK, encode, header,
};
