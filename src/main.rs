// SPDX-License-Identifier: MPL-2.0
use chopexpress::app::{self, Flags};
use tracing::error;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
ChopExpress

USAGE:
  chopexpress [OPTIONS]

OPTIONS:
  -h, --help              Print help information
  --lang <code>           Document language hint (fr, en, en-US, ...)
  --url <url>             Initial location, e.g. http://localhost:3000/menu
  --config-dir <dir>      Directory holding settings.toml
  --data-dir <dir>        Directory holding state.cbor
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        url: args.opt_value_from_str("--url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }
    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chopexpress=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(error) => {
            error!(%error, "invalid command line");
            eprint!("{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
