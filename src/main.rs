// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_toast=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = pico_args::Arguments::from_env();
    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring invalid --config-dir");
            None
        }
    };

    app::run(Flags { config_dir })
}
