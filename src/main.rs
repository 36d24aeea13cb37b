// SPDX-License-Identifier: MPL-2.0
use evergreen_storefront::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Evergreen Decor storefront

USAGE:
  evergreen_storefront [OPTIONS]

OPTIONS:
  --catalog <PATH>     Catalog file to display (TOML)
  --config-dir <DIR>   Directory holding settings.toml
  --data-dir <DIR>     Directory holding the default catalog and images
  --admin              Start on the admin screen
  -v, --verbose        Log at debug level
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    install_tracing(verbose);

    let parsed = (|| -> Result<Flags, pico_args::Error> {
        Ok(Flags {
            catalog: args.opt_value_from_str("--catalog")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
            data_dir: args.opt_value_from_str("--data-dir")?,
            admin: args.contains("--admin"),
        })
    })();

    let flags = match parsed {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting storefront");
    app::run(flags)
}

/// `RUST_LOG` wins over the `--verbose` default.
fn install_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
