use std::rc::Rc;
use yew::prelude::*;

use crate::browser::viewport_width;
use crate::model::ElementRecord;
use crate::util::{tooltip_left, tooltip_top};

#[derive(Properties, PartialEq, Clone)]
pub struct HoverTooltipProps {
    pub element: Rc<ElementRecord>,
    pub cell_px: u32,
    pub half_width: f64,
}

#[function_component(HoverTooltip)]
pub fn hover_tooltip(props: &HoverTooltipProps) -> Html {
    let e = &props.element;
    let left = tooltip_left(e.xpos, props.cell_px, props.half_width, viewport_width());
    let top = tooltip_top(e.ypos, props.cell_px);
    html! {
        <div style={format!(
            "position:absolute; left:{left}px; top:{top}px; transform:translateX(-50%); z-index:100; \
             background:rgba(0,0,0,0.8); border-radius:4px; padding:8px; font-size:12px; color:#fff; pointer-events:none;"
        )}>
            <div style="display:flex; flex-direction:column; gap:4px;">
                <strong>{ e.name.clone() }</strong>
                <span>{ format!("Atomic Number: {}", e.atomic_number) }</span>
                <span>{"Click for details"}</span>
            </div>
        </div>
    }
}
