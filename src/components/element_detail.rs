use yew::prelude::*;

use super::atomic_structure::AtomicStructure;
use super::property_card::PropertyCard;
use crate::state::{InteractionAction, InteractionContext};
use crate::util::{format_quantity, wiki_url};

/// Full property sheet for the selected element; renders nothing without a selection.
#[function_component]
pub fn ElementDetail() -> Html {
    let Some(state) = use_context::<InteractionContext>() else {
        return html! {};
    };
    let Some(element) = state.selected_element().cloned() else {
        return html! {};
    };
    let style = element.category.style();

    let close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(InteractionAction::ClearSelection))
    };

    let names: Vec<&str> = element.discoverers().collect();
    let discoverers = if names.is_empty() {
        html! { <span style="font-family:monospace; font-weight:600;">{"Unknown"}</span> }
    } else {
        let last = names.len() - 1;
        let links = names.iter().enumerate().map(|(i, name)| {
            html! {
                <>
                    <a href={wiki_url(name)} target="_blank" rel="noopener noreferrer" class="link">
                        { name.to_string() }{" \u{2197}"}
                    </a>
                    { if i < last { ", " } else { "" } }
                </>
            }
        });
        html! { <span style="font-family:monospace; font-weight:600;">{ for links }</span> }
    };

    html! {
        <div key={element.atomic_number} class="detail-enter" style="position:relative; padding:24px; border-radius:12px; background:#0f172a; box-shadow:0 10px 15px rgba(0,0,0,0.4); overflow-x:hidden; color:#e5e7eb; max-width:1240px;">
            <button onclick={close} title="Close (Esc)" style="position:absolute; top:12px; right:12px; padding:4px 10px;">{"Close"}</button>
            <div style="display:grid; grid-template-columns:2fr 1fr; gap:24px;">
                <div style="grid-column:1 / span 2; display:flex; align-items:center; gap:16px;">
                    <div class="badge" style={format!("display:flex; align-items:center; justify-content:center; width:96px; height:96px; flex-shrink:0; border-radius:8px; color:#fff; font-weight:700; font-size:30px; background:{};", style.badge)}>
                        { element.symbol.clone() }
                    </div>
                    <div>
                        <h2 style="margin:0; font-size:30px; font-weight:700;">
                            <a href={wiki_url(&element.name)} target="_blank" rel="noopener noreferrer" class="link">
                                { element.name.clone() }{" \u{2197}"}
                            </a>
                        </h2>
                        <div style="display:flex; gap:16px; margin-top:8px; color:#d1d5db;">
                            <p style="margin:0;">{"\u{269b} Atomic Number: "}<b>{ element.atomic_number }</b></p>
                            <p style="margin:0;">{"\u{2696} Atomic Mass: "}<b>{ element.atomic_mass }</b></p>
                        </div>
                        <p style="margin:12px 0 0 0; line-height:1.6; color:#e5e7eb;">{ element.description.clone() }</p>
                    </div>
                </div>

                <div>
                    <h3 style="font-size:20px; font-weight:600; margin:0 0 16px 0;">{"\u{1f50d} Properties"}</h3>
                    <div style="display:grid; grid-template-columns:1fr 1fr; gap:16px;">
                        <PropertyCard icon="\u{26a1}" icon_color="#eab308" name="Electronegativity" value={format_quantity(element.electronegativity, "")} />
                        <PropertyCard icon="\u{1f4cf}" icon_color="#3b82f6" name="Atomic Radius" value={format_quantity(element.atomic_radius, "pm")} />
                        <PropertyCard icon="\u{26a1}" icon_color="#ef4444" name="Ionization Energy" value={format_quantity(element.ionization_energy, "eV")} />
                        <PropertyCard icon="\u{1f4e6}" icon_color="#14b8a6" name="Density" value={format_quantity(element.density, "g/cm\u{b3}")} />
                        <PropertyCard icon="\u{1f321}" icon_color="#f97316" name="Melting Point" value={format_quantity(element.melting_point, "K")} />
                        <PropertyCard icon="\u{1f4a7}" icon_color="#ef4444" name="Boiling Point" value={format_quantity(element.boiling_point, "K")} />
                        <PropertyCard icon="\u{2697}" icon_color="#6366f1" name="Category">
                            <span style={format!("display:inline-block; padding:2px 8px; border-radius:4px; color:#fff; font-size:14px; font-weight:500; text-transform:capitalize; border:1px solid {};", style.accent)}>
                                { element.category.label() }
                            </span>
                        </PropertyCard>
                        <PropertyCard icon="\u{1f464}" icon_color="#6b7280" name="Discovered by">
                            { discoverers }
                        </PropertyCard>
                    </div>
                </div>

                <div style="border-radius:8px; padding:16px; display:flex; justify-content:center; align-items:center;">
                    <AtomicStructure element={element.clone()} />
                </div>
            </div>
        </div>
    }
}
