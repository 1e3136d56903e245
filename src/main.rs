// SPDX-License-Identifier: MPL-2.0
use iced_badges::app::{self, Flags};

const HELP: &str = "\
Badge module demo

USAGE:
  iced_badges [OPTIONS]

OPTIONS:
  --platform <NAME>   Badge metrics to use: iphone, ipad, android, mobileweb
  --config-dir <DIR>  Directory holding settings.toml
  -h, --help          Print this help

ENVIRONMENT:
  ICED_BADGES_CONFIG_DIR  Same as --config-dir
  RUST_LOG                Log filter, e.g. `iced_badges=debug`
";

fn main() -> iced::Result {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        platform: args.opt_value_from_str("--platform")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
