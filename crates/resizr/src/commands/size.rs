use clap::Args;

use resizr_core::{WindowHandle, geometry};

/// Arguments for the `size` subcommand.
#[derive(Args)]
pub struct SizeArgs {
    /// Window handle (decimal or hex with 0x prefix)
    #[arg(long)]
    hwnd: WindowHandle,
}

pub fn execute(args: &SizeArgs) {
    let desktop = super::open_desktop();

    match geometry::current_rect(desktop.as_ref(), args.hwnd) {
        Ok(rect) => println!("Current window size: {rect}"),
        Err(e) => super::fail(e),
    }
}
