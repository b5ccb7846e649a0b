//! Pointer-position translation from viewport to surface-local coordinates

/// Remove a surface's on-screen origin and the ambient scroll offset from a
/// viewport coordinate
pub fn to_surface(client: f32, surface_origin: f32, scroll_offset: f32) -> f32 {
    client - surface_origin - scroll_offset
}

/// Surface-local pointer position for a mouse event on the canvas
#[cfg(target_arch = "wasm32")]
pub fn surface_pos(
    canvas: &web_sys::HtmlCanvasElement,
    evt: &web_sys::MouseEvent,
) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let (scroll_x, scroll_y) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| (root.scroll_left() as f32, root.scroll_top() as f32))
        .unwrap_or((0.0, 0.0));

    (
        to_surface(evt.client_x() as f32, rect.left() as f32, scroll_x),
        to_surface(evt.client_y() as f32, rect.top() as f32, scroll_y),
    )
}
