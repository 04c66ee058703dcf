use clap::Args;
use tracing::warn;

use resizr_core::{GeometryRequest, Session, WindowHandle};

/// Arguments for the `resize` subcommand.
///
/// Omitted values keep the window's current value.
#[derive(Args)]
pub struct ResizeArgs {
    /// Window handle (decimal or hex with 0x prefix)
    #[arg(long)]
    hwnd: WindowHandle,
    /// Width in pixels
    #[arg(long)]
    width: Option<i32>,
    /// Height in pixels
    #[arg(long)]
    height: Option<i32>,
    /// X position in pixels
    #[arg(long, allow_negative_numbers = true)]
    x: Option<i32>,
    /// Y position in pixels
    #[arg(long, allow_negative_numbers = true)]
    y: Option<i32>,
    /// Apply the remembered width and height from preferences
    #[arg(long, conflicts_with_all = ["width", "height"])]
    remembered: bool,
}

impl ResizeArgs {
    fn request(&self, remembered: GeometryRequest) -> GeometryRequest {
        let (width, height) = if self.remembered {
            (remembered.width, remembered.height)
        } else {
            (self.width, self.height)
        };
        GeometryRequest {
            width,
            height,
            x: self.x,
            y: self.y,
        }
    }
}

pub fn execute(args: &ResizeArgs) {
    let store = super::preference_store();
    let request = args.request(store.get().remembered_size());

    // Bad input is rejected before touching the desktop.
    if request.is_empty() {
        super::fail("nothing to change: pass --width, --height, --x, --y or --remembered");
    }
    if let Err(e) = request.validate() {
        super::fail(e);
    }

    let mut session = Session::new(super::open_desktop(), store);
    let result = session.apply(args.hwnd, &request);
    session.close();

    match result {
        Ok(rect) => println!("Window resized successfully to {rect}"),
        Err(e) => {
            warn!(hwnd = %args.hwnd, error = %e, "resize failed");
            eprintln!("{}", super::describe_failure(&e));
            std::process::exit(1);
        }
    }
}
