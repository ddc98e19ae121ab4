// SPDX-License-Identifier: MPL-2.0
use cabinet::app::{self, Flags};

fn main() -> iced::Result {
    cabinet::logging::init();

    let mut args = pico_args::Arguments::from_env();
    let lang = optional_arg(&mut args, "--lang");
    let data_dir = optional_arg(&mut args, "--data-dir");
    let config_dir = optional_arg(&mut args, "--config-dir");

    let flags = Flags {
        lang,
        data_dir,
        config_dir,
        slug: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}

fn optional_arg(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%key, error = %err, "ignoring malformed argument");
            None
        }
    }
}
