use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WelcomeOverlayProps {
    pub show: bool,
    pub title: AttrValue,
    pub on_dismiss: Callback<()>,
}

#[function_component(WelcomeOverlay)]
pub fn welcome_overlay(props: &WelcomeOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let dismiss = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:fixed; top:50%; left:50%; transform:translate(-50%, -50%); z-index:50; background:rgba(0,0,0,0.87); border:2px solid #30363d; padding:28px 36px; border-radius:14px; max-width:520px; width:90%; box-shadow:0 0 0 1px #1a1f24, 0 6px 18px rgba(0,0,0,0.6); font-size:14px; line-height:1.4; color:#e5e7eb;">
            <h2 style="margin:0 0 12px 0; font-size:22px; color:#58a6ff; text-align:center;">{ props.title.clone() }</h2>
            <p style="margin:4px 0 10px 0; text-align:center; opacity:0.85;">{"All 118 elements, laid out by period and group."}</p>
            <ul style="margin:0 0 12px 18px; padding:0; list-style:disc; display:flex; flex-direction:column; gap:4px;">
                <li>{"Hover a tile for its name and atomic number."}</li>
                <li>{"Click a tile to open its properties and atomic structure; click it again to close."}</li>
                <li>{"Click a legend entry to highlight one category; click it again to show all."}</li>
                <li>{"Press Escape to close the details panel."}</li>
            </ul>
            <div style="display:flex; gap:12px; justify-content:center; margin-top:8px;">
                <button onclick={dismiss}>{"Start exploring"}</button>
            </div>
            <div style="margin-top:12px; font-size:11px; opacity:0.6; text-align:center;">{"Tip: names in the details panel link to Wikipedia."}</div>
        </div>
    }
}
