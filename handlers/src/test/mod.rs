//! Unit test module
//!
//! Handler tests live here, separate from source files. Gateways are replaced by the in-memory
//! doubles in [`support`]; persistence uses in-memory SQLite.

mod support;

mod chat_reply_test;
mod contact_test;
