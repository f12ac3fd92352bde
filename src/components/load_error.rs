use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadErrorProps {
    pub message: AttrValue,
}

/// Shown in place of the table when the bundled element data fails validation.
#[function_component(LoadError)]
pub fn load_error(props: &LoadErrorProps) -> Html {
    html! {
        <div style="margin:64px auto; max-width:520px; padding:20px 24px; border:1px solid #f85149; border-radius:10px; background:rgba(248,81,73,0.08); color:#e5e7eb;">
            <h2 style="margin:0 0 8px 0; color:#f85149; font-size:18px;">{"Element data could not be loaded"}</h2>
            <pre style="margin:0; white-space:pre-wrap; font-size:13px;">{ props.message.clone() }</pre>
        </div>
    }
}
