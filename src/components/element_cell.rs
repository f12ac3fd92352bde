use std::rc::Rc;
use yew::prelude::*;

use crate::model::ElementRecord;

#[derive(Properties, PartialEq, Clone)]
pub struct ElementCellProps {
    pub element: Rc<ElementRecord>,
    /// Grid track size; the tile leaves a 10px gutter inside it.
    pub cell_px: u32,
    pub hovered: bool,
    pub selected: bool,
    pub faded: bool,
    pub on_enter: Callback<u32>,
    pub on_leave: Callback<()>,
    pub on_click: Callback<u32>,
}

fn tile_px(cell_px: u32) -> u32 {
    cell_px.saturating_sub(10).max(1)
}

/// One grid cell. Purely reflects the flags it is given; no local state.
#[function_component(ElementCell)]
pub fn element_cell(props: &ElementCellProps) -> Html {
    let e = &props.element;
    let n = e.atomic_number;
    let style = e.category.style();

    let onmouseenter = {
        let cb = props.on_enter.clone();
        Callback::from(move |_: MouseEvent| cb.emit(n))
    };
    let onmouseleave = {
        let cb = props.on_leave.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let onclick = {
        let cb = props.on_click.clone();
        Callback::from(move |_: MouseEvent| cb.emit(n))
    };

    let tile = tile_px(props.cell_px);
    let border_width = if props.selected { 2 } else { 1 };
    let lift = if props.hovered || props.selected {
        "transform:scale(1.1); z-index:10;"
    } else {
        ""
    };
    let shadow = if props.selected {
        "box-shadow:0 25px 50px -12px rgba(0,0,0,0.6);"
    } else if props.hovered {
        "box-shadow:0 0 5px rgba(255,255,255,0.5);"
    } else {
        ""
    };
    let fade = if props.faded {
        "opacity:0.3; filter:saturate(0);"
    } else {
        "opacity:1;"
    };

    html! {
        <div
            class="element-cell"
            {onmouseenter}
            {onmouseleave}
            {onclick}
            style={format!(
                "grid-column:{}; grid-row:{}; width:{}px; height:{}px; box-sizing:border-box; border-radius:4px; padding:4px; \
                 display:flex; flex-direction:column; justify-content:space-between; cursor:pointer; color:#fff; \
                 border:{}px solid {}; background:{}; transition:all 200ms ease-in-out; {} {} {}",
                e.xpos, e.ypos, tile, tile, border_width, style.accent, style.tint, lift, shadow, fade
            )}
        >
            <div style="font-size:14px; text-align:left;">{ n }</div>
            <div style="font-size:14px; font-weight:700; text-align:center;">{ e.symbol.clone() }</div>
            <div style="font-size:8px; text-align:center; white-space:nowrap; overflow:hidden; text-overflow:ellipsis;">{ e.name.clone() }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    struct Handlers {
        enter: Callback<u32>,
        leave: Callback<()>,
        click: Callback<u32>,
    }

    impl Handlers {
        fn new() -> Self {
            Self {
                enter: Callback::from(|_: u32| ()),
                leave: Callback::from(|_: ()| ()),
                click: Callback::from(|_: u32| ()),
            }
        }

        fn props(&self, element: &Rc<ElementRecord>, hovered: bool) -> ElementCellProps {
            ElementCellProps {
                element: element.clone(),
                cell_px: 70,
                hovered,
                selected: false,
                faded: false,
                on_enter: self.enter.clone(),
                on_leave: self.leave.clone(),
                on_click: self.click.clone(),
            }
        }
    }

    #[test]
    fn tile_tracks_cell_size() {
        assert_eq!(tile_px(70), 60);
        assert_eq!(tile_px(40), 30);
        assert_eq!(tile_px(200), 190);
        assert_eq!(tile_px(0), 1);
    }

    #[test]
    fn props_compare_handlers_by_identity() {
        let element = Rc::new(ElementRecord::stub(1, "H", Category::Nonmetal, 1, 1));
        let shared = Handlers::new();
        assert!(shared.props(&element, false) == shared.props(&element, false));
        assert!(shared.props(&element, true) != shared.props(&element, false));
        // Identical closures built again are different handlers.
        assert!(Handlers::new().props(&element, false) != shared.props(&element, false));
    }
}
