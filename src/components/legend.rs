use yew::prelude::*;

use crate::palette::color_for;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    /// Category tag; the swatch colour is looked up from it.
    pub tag: &'static str,
    pub label: &'static str,
    pub count: usize,
    #[prop_or(false)]
    pub active: bool,
    pub on_click: Callback<()>,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    let onclick = {
        let cb = props.on_click.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let background = if props.active { "#1f2937" } else { "transparent" };
    html! {
        <div
            {onclick}
            title={format!("{} elements", props.count)}
            style={format!("display:flex; align-items:center; gap:8px; padding:4px 8px; border-radius:4px; cursor:pointer; background:{};", background)}
        >
            <span style={format!("display:inline-block; width:16px; height:16px; background:{}; border-radius:2px;", color_for(props.tag).accent)}></span>
            <span style="color:#fff; font-size:14px; text-transform:capitalize;">{ props.label }</span>
            <span style="color:#6b7280; font-size:11px; font-variant-numeric:tabular-nums;">{ props.count }</span>
        </div>
    }
}
