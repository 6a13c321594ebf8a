// SPDX-License-Identifier: MPL-2.0
use floorpin::app::{self, paths, Flags};

const HELP: &str = "\
FloorPin - place and annotate markers on a floor plan

USAGE:
  floorpin [OPTIONS] [IMAGE]

OPTIONS:
  --config-dir DIR    Directory containing settings.toml
  --marker-size PX    Marker diameter in pixels
  -h, --help          Print this help

ENVIRONMENT:
  FLOORPIN_CONFIG_DIR  Config directory (overridden by --config-dir)
  RUST_LOG             Log filter (default: warn)
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("ignoring --config-dir: {err}");
        None
    });
    let marker_size: Option<f32> = args.opt_value_from_str("--marker-size").unwrap_or_else(|err| {
        log::warn!("ignoring --marker-size: {err}");
        None
    });
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_override(config_dir.clone());

    app::run(Flags {
        file_path,
        config_dir,
        marker_size,
    })
}
