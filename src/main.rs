use std::rc::Rc;

mod browser;
mod components;
mod config;
mod model;
mod palette;
mod state;
mod util;

use components::app::{App, AppProps};
use components::load_error::{LoadError, LoadErrorProps};
use config::ShellConfig;
use model::Dataset;

fn main() {
    util::init_logging();
    let config = ShellConfig::from_document();
    match Dataset::load() {
        Ok(dataset) => {
            log::info!("loaded {} elements", dataset.len());
            yew::Renderer::<App>::with_props(AppProps {
                dataset: Rc::new(dataset),
                config,
            })
            .render();
        }
        Err(err) => {
            log::error!("element dataset rejected: {err}");
            yew::Renderer::<LoadError>::with_props(LoadErrorProps {
                message: err.to_string().into(),
            })
            .render();
        }
    }
}
