use super::legend::LegendRow;
use crate::model::Category;
use crate::state::{InteractionAction, InteractionContext};
use yew::prelude::*;

/// Category filter bar; clicking a row toggles that category's filter.
#[function_component]
pub fn LegendPanel() -> Html {
    let Some(state) = use_context::<InteractionContext>() else {
        return html! {};
    };
    let rows = Category::ALL.into_iter().map(|category| {
        let on_click = {
            let state = state.clone();
            Callback::from(move |_| state.dispatch(InteractionAction::CategoryToggle(category)))
        };
        let count = state.dataset().by_category(category).count();
        html! {
            <LegendRow
                key={category.tag()}
                tag={category.tag()}
                label={category.label()}
                {count}
                active={state.active_filter == Some(category)}
                {on_click}
            />
        }
    });
    html! {
        <div style="display:flex; flex-wrap:wrap; gap:12px; width:100%; padding:16px; margin:16px 0; border-radius:8px; justify-content:center;">
            { for rows }
        </div>
    }
}
