// Browser-side glue: window listeners and the requestAnimationFrame scroll loop.
// Both guards detach everything they installed when dropped, so an effect
// cleanup only has to drop them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, KeyboardEvent, WheelEvent, Window};

use crate::config::ScrollConfig;
use crate::state::SmoothScroll;

const LINE_HEIGHT_PX: f64 = 16.0;

fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn max_scroll(window: &Window) -> f64 {
    let page = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);
    (page - viewport_height(window)).max(0.0)
}

fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0)
}

pub fn set_document_title(title: &str) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(title);
    }
}

/// Window-level `keydown` listener.
pub struct KeyListener {
    window: Window,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyListener {
    pub fn install(on_key: impl Fn(&KeyboardEvent) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback =
            Closure::wrap(Box::new(move |e: KeyboardEvent| on_key(&e)) as Box<dyn FnMut(_)>);
        window
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, callback })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Empties a slot whose contents may hold a clone of the slot itself.
fn release<T>(slot: &Rc<RefCell<Option<T>>>) {
    slot.borrow_mut().take();
}

/// Intercepts wheel input and eases the window scroll position.
pub struct ScrollDriver {
    window: Window,
    wheel: Closure<dyn FnMut(WheelEvent)>,
    scroll: Closure<dyn FnMut(Event)>,
    frame: FrameSlot,
    raf_id: Rc<Cell<Option<i32>>>,
}

fn request_frame(window: &Window, frame: &FrameSlot, raf_id: &Cell<Option<i32>>) {
    if raf_id.get().is_some() {
        return;
    }
    if let Some(cb) = frame.borrow().as_ref() {
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            raf_id.set(Some(id));
        }
    }
}

impl ScrollDriver {
    pub fn install(config: &ScrollConfig) -> Option<Self> {
        if !config.enabled {
            log::debug!("smooth scroll disabled");
            return None;
        }
        let window = web_sys::window()?;
        let start = window.scroll_y().unwrap_or(0.0);
        let state = Rc::new(RefCell::new(SmoothScroll::new(config, start)));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let frame: FrameSlot = Rc::new(RefCell::new(None));

        {
            let window_loop = window.clone();
            let state = state.clone();
            let frame_loop = frame.clone();
            let raf_loop = raf_id.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
                raf_loop.set(None);
                let next = state.borrow_mut().tick(now_ms(&window_loop));
                if let Some(y) = next {
                    window_loop.scroll_to_with_x_and_y(0.0, y);
                }
                if state.borrow().is_animating() {
                    request_frame(&window_loop, &frame_loop, &raf_loop);
                }
            }) as Box<dyn FnMut(f64)>));
        }

        let wheel = {
            let window_w = window.clone();
            let state = state.clone();
            let frame = frame.clone();
            let raf_id = raf_id.clone();
            Closure::wrap(Box::new(move |e: WheelEvent| {
                // Leave pinch-zoom and horizontal gestures to the browser.
                if e.ctrl_key() || e.delta_y() == 0.0 {
                    return;
                }
                e.prevent_default();
                let delta = match e.delta_mode() {
                    WheelEvent::DOM_DELTA_LINE => e.delta_y() * LINE_HEIGHT_PX,
                    WheelEvent::DOM_DELTA_PAGE => e.delta_y() * viewport_height(&window_w),
                    _ => e.delta_y(),
                };
                state
                    .borrow_mut()
                    .wheel(delta, max_scroll(&window_w), now_ms(&window_w));
                request_frame(&window_w, &frame, &raf_id);
            }) as Box<dyn FnMut(_)>)
        };
        let opts = AddEventListenerOptions::new();
        opts.set_passive(false);
        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            wheel.as_ref().unchecked_ref(),
            &opts,
        ) {
            log::warn!("smooth scroll unavailable: {err:?}");
            release(&frame);
            return None;
        }

        let scroll = {
            let window_s = window.clone();
            let state = state.clone();
            Closure::wrap(Box::new(move |_e: Event| {
                if let Ok(y) = window_s.scroll_y() {
                    state.borrow_mut().sync(y);
                }
            }) as Box<dyn FnMut(_)>)
        };
        if let Err(err) =
            window.add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref())
        {
            log::debug!("scroll resync listener not installed: {err:?}");
        }

        log::debug!("smooth scroll installed (duration {}s)", config.duration);
        Some(Self {
            window,
            wheel,
            scroll,
            frame,
            raf_id,
        })
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.scroll.as_ref().unchecked_ref());
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // The frame closure holds a clone of its own slot.
        release(&self.frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_breaks_self_reference() {
        let slot: Rc<RefCell<Option<Box<dyn Fn() -> usize>>>> = Rc::new(RefCell::new(None));
        let inner = slot.clone();
        *slot.borrow_mut() = Some(Box::new(move || Rc::strong_count(&inner)));
        assert_eq!(Rc::strong_count(&slot), 2);
        release(&slot);
        assert_eq!(Rc::strong_count(&slot), 1);
        assert!(slot.borrow().is_none());
    }
}
