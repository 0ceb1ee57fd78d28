//! Embedded wordlist
//!
//! Wordlist compiled into the binary at build time.

// Include generated wordlist from build script
include!(concat!(env!("OUT_DIR"), "/wordlist.rs"));
