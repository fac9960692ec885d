// SPDX-License-Identifier: MPL-2.0
use iced_chronicle::app::{self, Flags};
use iced_chronicle::config;
use iced_chronicle::i18n::fluent::I18n;
use iced_chronicle::timeline::dataset;
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap();
    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config-dir").unwrap();
    let dataset_path = args.finish().into_iter().next().map(PathBuf::from);

    // A broken dataset is a startup error, not something to render.
    let timelines = match &dataset_path {
        Some(path) => match dataset::load_from_path(path) {
            Ok(set) => set,
            Err(err) => {
                let i18n = I18n::new(lang.clone(), &config::load().unwrap_or_default());
                eprintln!("{}: {} ({err})", path.display(), i18n.tr(err.i18n_key()));
                std::process::exit(1);
            }
        },
        None => dataset::load_embedded(),
    };

    app::run(Flags {
        timelines,
        lang,
        config_dir,
    })
}
