use std::rc::Rc;
use yew::prelude::*;

use super::{
    element_detail::ElementDetail, footer::Footer, legend_panel::LegendPanel,
    periodic_table::PeriodicTable, welcome_overlay::WelcomeOverlay,
};
use crate::browser::{self, KeyListener, ScrollDriver};
use crate::config::ShellConfig;
use crate::model::Dataset;
use crate::state::{InteractionAction, InteractionContext, InteractionState};

#[derive(Properties, Clone)]
pub struct AppProps {
    pub dataset: Rc<Dataset>,
    pub config: ShellConfig,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dataset, &other.dataset) && self.config == other.config
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = {
        let dataset = props.dataset.clone();
        use_reducer(move || InteractionState::new(dataset))
    };
    let show_welcome = use_state(|| props.config.show_welcome);

    {
        let title = props.config.title.clone();
        use_effect_with(title, |title| {
            browser::set_document_title(title);
            || ()
        });
    }

    // Smooth wheel scrolling; reinstalled if the scroll tuning changes.
    use_effect_with(props.config.scroll.clone(), |scroll| {
        let driver = ScrollDriver::install(scroll);
        move || drop(driver)
    });

    {
        let state = state.clone();
        let show_welcome = show_welcome.clone();
        use_effect_with((), move |_| {
            let listener = KeyListener::install(move |e| {
                if e.key() == "Escape" {
                    show_welcome.set(false);
                    state.dispatch(InteractionAction::ClearSelection);
                }
            });
            if listener.is_none() {
                log::warn!("keyboard shortcuts unavailable");
            }
            move || drop(listener)
        });
    }

    use_effect_with(
        (state.hovered, state.selected, state.active_filter),
        |(hovered, selected, filter)| {
            log::debug!("interaction: hovered={hovered:?} selected={selected:?} filter={filter:?}");
            || ()
        },
    );

    let dismiss_welcome = {
        let show_welcome = show_welcome.clone();
        Callback::from(move |_| show_welcome.set(false))
    };

    let context: InteractionContext = state;
    html! {
        <ContextProvider<ShellConfig> context={props.config.clone()}>
        <ContextProvider<InteractionContext> context={context}>
            <div id="root" style="min-height:100vh; padding:16px 24px; box-sizing:border-box;">
                <div class="mobile-notice" style="padding:48px 16px; text-align:center; font-size:18px;">
                    {"Switch to desktop mode to view the periodic table"}
                </div>
                <div class="desktop-only" style="display:flex; flex-direction:column; align-items:center; gap:8px;">
                    <LegendPanel />
                    <PeriodicTable />
                    <ElementDetail />
                </div>
                <Footer />
                <WelcomeOverlay show={*show_welcome} title={props.config.title.clone()} on_dismiss={dismiss_welcome} />
            </div>
        </ContextProvider<InteractionContext>>
        </ContextProvider<ShellConfig>>
    }
}
