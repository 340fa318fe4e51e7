// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};

const HELP: &str = "\
Usage: iced_gallery [OPTIONS] [DIRECTORY]

Options:
  --lang <code>       Interface language (e.g. en-US, fr)
  --fade-ms <millis>  Delay between fade-out and image swap
  --cancel-pending    Cancel in-flight swaps on new selection
  -h, --help          Print this help
";

fn main() -> iced::Result {
    if let Err(err) = iced_gallery::logging::init() {
        eprintln!("{err}");
    }

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match Flags::from_args(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
