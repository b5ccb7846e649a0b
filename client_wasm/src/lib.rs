//! Browser client for the Pong simulation.
//!
//! All game rules live in `game_core`; this crate only moves pointer
//! coordinates and pixels across the wasm boundary: canvas bootstrap,
//! pointer listeners, and the fixed-rate tick driver.

mod diag;
pub mod pointer;

#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use game_core::{Game, Params};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Everything wired to one canvas element
#[cfg(target_arch = "wasm32")]
struct App {
    game: Game,
    renderer: renderer::CanvasRenderer,
}

/// Entry point, called from the page once the module is loaded.
///
/// Reads the canvas dimensions once to seed the board bounds, then drives
/// update-then-render at the fixed tick rate until the page goes away.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str("canvas element not found"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    let width = canvas.width() as f32;
    let height = canvas.height() as f32;
    diag::console_log!("starting pong on a {width}x{height} surface");

    let app = Rc::new(RefCell::new(App {
        game: Game::new(width, height),
        renderer: renderer::CanvasRenderer::new(&canvas)?,
    }));

    attach_pointer_listeners(&app, &canvas);

    // Fixed-rate driver: update, then draw
    let tick = {
        let app = Rc::clone(&app);
        Closure::<dyn FnMut()>::new(move || {
            let mut app = app.borrow_mut();
            let App { game, renderer } = &mut *app;
            game.tick();
            if let Err(e) = renderer.draw(&game.snapshot(), game.config()) {
                diag::console_warn!("draw failed: {e:?}");
            }
        })
    };
    let interval_ms = (1000 / Params::TICK_HZ) as i32;
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        interval_ms,
    )?;
    tick.forget();

    Ok(())
}

/// Attach mousemove/mousedown listeners to the canvas
#[cfg(target_arch = "wasm32")]
fn attach_pointer_listeners(app: &Rc<RefCell<App>>, canvas: &web_sys::HtmlCanvasElement) {
    use wasm_bindgen::JsCast;

    // mousemove: steer the left paddle
    {
        let app = Rc::clone(app);
        let canvas_ref = canvas.clone();
        let closure =
            Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |evt: web_sys::MouseEvent| {
                let (_x, y) = pointer::surface_pos(&canvas_ref, &evt);
                app.borrow_mut().game.pointer_moved(y);
            });
        let _ = canvas
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // mousedown: leave the win screen
    {
        let app = Rc::clone(app);
        let closure =
            Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_evt: web_sys::MouseEvent| {
                app.borrow_mut().game.pointer_down();
            });
        let _ = canvas
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
