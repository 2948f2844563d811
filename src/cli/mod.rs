//! Command layer shared by the binary and integration tests

pub mod orchestration;

pub use orchestration::{
    parse_host, run_bump, run_compare, run_show, BumpArgs, BumpOutcome, CompareArgs, ShowArgs,
};
