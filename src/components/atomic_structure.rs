use std::rc::Rc;
use yew::prelude::*;

use crate::model::ElementRecord;
use crate::state::{electron_angles, shell_occupancy};

const SIZE: f64 = 300.0;
const CENTER: f64 = SIZE / 2.0;
const NUCLEUS_R: f64 = 16.0;
const INNER_ORBIT: f64 = 34.0;
const OUTER_ORBIT: f64 = 138.0;
const NUCLEUS_COLOR: &str = "#ff5722";
const ELECTRON_COLOR: &str = "#2196f3";

#[derive(Properties, PartialEq, Clone)]
pub struct AtomicStructureProps {
    pub element: Rc<ElementRecord>,
}

fn orbit_radius(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return (INNER_ORBIT + OUTER_ORBIT) / 2.0;
    }
    INNER_ORBIT + (OUTER_ORBIT - INNER_ORBIT) * index as f64 / (count - 1) as f64
}

/// Illustrative Bohr-style diagram: one rotating ring per electron shell.
#[function_component(AtomicStructure)]
pub fn atomic_structure(props: &AtomicStructureProps) -> Html {
    let e = &props.element;
    let shells = shell_occupancy(e.atomic_number);
    let count = shells.len();

    let rings = shells.iter().enumerate().map(|(i, &electrons)| {
        let r = orbit_radius(i, count);
        // Outer shells turn slower; neighbouring shells counter-rotate.
        let period = 4.0 + 2.0 * i as f64;
        let (from, to) = if i % 2 == 0 { (0, 360) } else { (360, 0) };
        let dots = electron_angles(electrons).into_iter().map(move |deg| {
            let rad = deg.to_radians();
            let cx = CENTER + r * rad.cos();
            let cy = CENTER + r * rad.sin();
            html! { <circle cx={format!("{cx:.2}")} cy={format!("{cy:.2}")} r="4" fill={ELECTRON_COLOR} /> }
        });
        html! {
            <g key={i}>
                <circle cx={CENTER.to_string()} cy={CENTER.to_string()} r={format!("{r:.2}")} fill="none" stroke="rgba(255,255,255,0.18)" stroke-width="1" />
                <g>
                    <animateTransform
                        attributeName="transform"
                        type="rotate"
                        from={format!("{from} {CENTER} {CENTER}")}
                        to={format!("{to} {CENTER} {CENTER}")}
                        dur={format!("{period}s")}
                        repeatCount="indefinite"
                    />
                    { for dots }
                </g>
            </g>
        }
    });

    html! {
        <div style="margin:0 auto; display:flex; flex-direction:column; align-items:center; justify-content:center; width:100%;">
            <div style="width:300px; height:300px; border-radius:8px; overflow:hidden; background:#121212; margin-bottom:10px;">
                <svg width="300" height="300" viewBox={format!("0 0 {SIZE} {SIZE}")}>
                    { for rings }
                    <circle cx={CENTER.to_string()} cy={CENTER.to_string()} r={NUCLEUS_R.to_string()} fill={NUCLEUS_COLOR} />
                    <text x={CENTER.to_string()} y={(CENTER + 4.0).to_string()} text-anchor="middle" font-size="11" fill="#fff">{ e.symbol.clone() }</text>
                </svg>
            </div>
            <div style="display:flex; justify-content:center; margin:6px 0 10px 0;">
                <div style="display:flex; align-items:center; margin:0 10px; font-size:12px;">
                    <div style={format!("width:12px; height:12px; border-radius:9999px; background:{NUCLEUS_COLOR}; margin-right:6px;")}></div>
                    <span>{ format!("Nucleus (Z={})", e.atomic_number) }</span>
                </div>
                <div style="display:flex; align-items:center; margin:0 10px; font-size:12px;">
                    <div style={format!("width:12px; height:12px; border-radius:9999px; background:{ELECTRON_COLOR}; margin-right:6px;")}></div>
                    <span>{"Electrons"}</span>
                </div>
            </div>
            <div style="text-align:center; font-size:12px; color:#d1d5db; margin-top:6px;">
                <p style="margin:0;">{ format!("Electron configuration: {}", e.electron_configuration) }</p>
                <p style="margin:4px 0 0 0; opacity:0.7;">{ format!("Shells: {}", shells.iter().map(u32::to_string).collect::<Vec<_>>().join(" · ")) }</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbits_span_inner_to_outer() {
        assert_eq!(orbit_radius(0, 1), (INNER_ORBIT + OUTER_ORBIT) / 2.0);
        assert_eq!(orbit_radius(0, 7), INNER_ORBIT);
        assert_eq!(orbit_radius(6, 7), OUTER_ORBIT);
        assert!(orbit_radius(2, 4) > orbit_radius(1, 4));
    }
}
