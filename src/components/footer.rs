use yew::prelude::*;

use crate::config::ShellConfig;

#[function_component]
pub fn Footer() -> Html {
    let config = use_context::<ShellConfig>().unwrap_or_default();
    let links = config.links.iter().map(|link| {
        html! {
            <a href={link.href.clone()} title={link.title.clone()} target="_blank" rel="noopener noreferrer"
                style="color:#9ca3af; text-decoration:none; font-size:22px; min-width:28px; text-align:center;">
                { link.icon.glyph() }
            </a>
        }
    });
    html! {
        <footer style="margin-top:32px; padding:16px 0; display:flex; flex-direction:column; align-items:center; gap:8px; color:#9ca3af;">
            <div style="display:flex; gap:16px;">{ for links }</div>
            <p style="margin:0; font-size:14px;">
                {"Made by "}
                <a href={config.author_url.clone()} target="_blank" rel="noopener noreferrer" class="link">
                    { config.author_name.clone() }
                </a>
            </p>
        </footer>
    }
}
