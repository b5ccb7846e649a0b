//! Canvas-2D render adapter.
//!
//! Reads a [`Snapshot`] each tick and issues fill-rect / fill-circle /
//! fill-text calls; it never touches the simulation.

use game_core::{Config, Snapshot};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND: &str = "black";
const FOREGROUND: &str = "white";

// Center net dash layout
const NET_SPACING: f64 = 40.0;
const NET_DASH_WIDTH: f64 = 2.0;
const NET_DASH_HEIGHT: f64 = 20.0;

// Fixed text positions
const SCORE_INSET_X: f64 = 100.0;
const SCORE_Y: f64 = 100.0;
const WIN_TEXT_X: f64 = 350.0;
const WIN_TEXT_Y: f64 = 200.0;
const CONTINUE_TEXT_Y: f64 = 500.0;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Draw one frame from the given snapshot
    pub fn draw(&self, snapshot: &Snapshot, config: &Config) -> Result<(), JsValue> {
        // Blank out the whole surface first
        self.fill_rect(0.0, 0.0, self.width, self.height, BACKGROUND);

        if snapshot.winning {
            return self.draw_win_screen(snapshot);
        }

        self.draw_net();

        let thickness = f64::from(config.paddle_thickness);
        let height = f64::from(config.paddle_height);
        self.fill_rect(
            f64::from(config.paddle_x(0, self.width as f32)),
            f64::from(snapshot.left_paddle_y),
            thickness,
            height,
            FOREGROUND,
        );
        self.fill_rect(
            f64::from(config.paddle_x(1, self.width as f32)),
            f64::from(snapshot.right_paddle_y),
            thickness,
            height,
            FOREGROUND,
        );

        self.fill_circle(
            f64::from(snapshot.ball_x),
            f64::from(snapshot.ball_y),
            f64::from(config.ball_radius),
            FOREGROUND,
        )?;

        self.fill_text(&snapshot.score_left.to_string(), SCORE_INSET_X, SCORE_Y)?;
        self.fill_text(
            &snapshot.score_right.to_string(),
            self.width - SCORE_INSET_X,
            SCORE_Y,
        )?;

        Ok(())
    }

    /// Winner banner plus the continue prompt; nothing else is drawn
    fn draw_win_screen(&self, snapshot: &Snapshot) -> Result<(), JsValue> {
        match snapshot.winner {
            Some(0) => self.fill_text("Left Player Won", WIN_TEXT_X, WIN_TEXT_Y)?,
            Some(_) => self.fill_text("Right Player Won", WIN_TEXT_X, WIN_TEXT_Y)?,
            None => {}
        }
        self.fill_text("click to continue", WIN_TEXT_X, CONTINUE_TEXT_Y)
    }

    fn draw_net(&self) {
        let x = self.width / 2.0 - NET_DASH_WIDTH / 2.0;
        let mut y = 0.0;
        while y < self.height {
            self.fill_rect(x, y, NET_DASH_WIDTH, NET_DASH_HEIGHT, FOREGROUND);
            y += NET_SPACING;
        }
    }

    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.arc(cx, cy, radius, 0.0, std::f64::consts::TAU)?;
        self.ctx.fill();
        Ok(())
    }

    fn fill_text(&self, text: &str, x: f64, y: f64) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(FOREGROUND);
        self.ctx.fill_text(text, x, y)
    }
}
