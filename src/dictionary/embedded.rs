//! Embedded dictionary sources
//!
//! Default affix ruleset and base lexicon compiled into the binary at
//! build time.

// Include generated resources from build script
include!(concat!(env!("OUT_DIR"), "/en_aff.rs"));
include!(concat!(env!("OUT_DIR"), "/en_dic.rs"));
