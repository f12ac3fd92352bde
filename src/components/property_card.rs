use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PropertyCardProps {
    pub icon: &'static str,
    pub icon_color: &'static str,
    pub name: &'static str,
    #[prop_or_default]
    pub value: Option<String>,
    /// Rendered instead of `value` when present.
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub fn PropertyCard(props: &PropertyCardProps) -> Html {
    let body = match &props.value {
        Some(v) => html! { <p style="margin:0; font-family:monospace; font-weight:600; color:#e5e7eb;">{ v.clone() }</p> },
        None => props.children.clone(),
    };
    html! {
        <div class="property-card" style="padding:12px; border-radius:8px; border:1px solid rgba(55,65,81,0.3); box-shadow:0 1px 3px rgba(0,0,0,0.3);">
            <div style="display:flex; align-items:center; gap:12px;">
                <div class="property-icon" style={format!("flex-shrink:0; padding:8px; border-radius:9999px; color:{}; font-size:18px; width:20px; text-align:center;", props.icon_color)}>
                    { props.icon }
                </div>
                <div style="flex-grow:1;">
                    <p style="margin:0; font-size:14px; color:#9ca3af;">{ props.name }</p>
                    { body }
                </div>
            </div>
        </div>
    }
}
