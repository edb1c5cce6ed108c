// SPDX-License-Identifier: MPL-2.0
use bookstand::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        config_path: args.opt_value_from_str::<_, PathBuf>("--config").unwrap(),
    };

    app::run(flags)
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("bookstand=info".parse().expect("directive is valid"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Panics in the Iced runtime otherwise vanish with the window.
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("unhandled panic: {info}");
        previous(info);
    }));
}
