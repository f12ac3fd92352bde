use yew::prelude::*;

use super::element_cell::ElementCell;
use super::hover_tooltip::HoverTooltip;
use crate::config::ShellConfig;
use crate::model::{GRID_COLUMNS, GRID_ROWS};
use crate::state::{InteractionAction, InteractionContext, InteractionState};

type Dispatcher = Option<UseReducerDispatcher<InteractionState>>;

fn send(dispatcher: &Dispatcher, action: InteractionAction) {
    if let Some(d) = dispatcher {
        d.dispatch(action);
    }
}

/// The 18x10 grid. Forwards pointer gestures to the interaction reducer and
/// renders whatever flags it derives.
#[function_component(PeriodicTable)]
pub fn periodic_table() -> Html {
    let state = use_context::<InteractionContext>();
    let config = use_context::<ShellConfig>().unwrap_or_default();

    // Handlers stay identical across renders so unchanged cells skip re-rendering.
    let dispatcher: Dispatcher = state.as_ref().map(|s| s.dispatcher());
    let on_enter = use_callback(dispatcher.clone(), |n: u32, d: &Dispatcher| {
        send(d, InteractionAction::PointerEnter(n))
    });
    let on_leave = use_callback(dispatcher.clone(), |_: (), d: &Dispatcher| {
        send(d, InteractionAction::PointerLeave)
    });
    let on_click = use_callback(dispatcher, |n: u32, d: &Dispatcher| {
        send(d, InteractionAction::ElementClick(n))
    });

    let Some(state) = state else {
        return html! {};
    };

    let cells = state.dataset().in_reading_order().map(|element| {
        let n = element.atomic_number;
        html! {
            <ElementCell
                key={n}
                element={element.clone()}
                cell_px={config.cell_px}
                hovered={state.is_hovered(n)}
                selected={state.is_selected(n)}
                faded={state.is_faded(n)}
                on_enter={on_enter.clone()}
                on_leave={on_leave.clone()}
                on_click={on_click.clone()}
            />
        }
    });

    let tooltip = match state.hovered_element() {
        Some(element) if state.tooltip_visible() => html! {
            <HoverTooltip
                element={element.clone()}
                cell_px={config.cell_px}
                half_width={config.tooltip_half_width}
            />
        },
        _ => html! {},
    };

    html! {
        <div style="position:relative;">
            <div style={format!(
                "display:grid; grid-template-columns:repeat({GRID_COLUMNS}, {px}px); grid-template-rows:repeat({GRID_ROWS}, {px}px); \
                 margin:20px 0; max-width:100%; overflow-x:auto; padding:12px 12px 100px 12px;",
                px = config.cell_px
            )}>
                { for cells }
            </div>
            { tooltip }
        </div>
    }
}
