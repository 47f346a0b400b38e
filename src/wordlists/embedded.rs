//! Word lists compiled into the binary by the build script

include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
include!(concat!(env!("OUT_DIR"), "/common_words.rs"));
