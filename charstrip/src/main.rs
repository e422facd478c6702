//! Main binary entry point for `charstrip`.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()` function
//! so that it behaves exactly like `charstrip-cli`.

use anyhow::Result;

fn main() -> Result<()> {
    // Raw OS args: the deletion set may not be valid UTF-8
    let code = charstrip::entry_point::run_with_args(std::env::args_os().skip(1).collect())?;
    std::process::exit(code);
}
