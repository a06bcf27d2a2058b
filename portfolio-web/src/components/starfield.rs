//! # Starfield Background
//!
//! Full-page canvas of drifting cyan particles with proximity links, drawn
//! behind the slide deck. The simulation ([`StarfieldSim`]) is plain math
//! with injected randomness so it runs under host tests; everything touching
//! the canvas stays in the component half of this module.
//!
//! The time accumulator advances a fixed step per frame, so drift speed
//! follows the display refresh rate. That matches the original look and is
//! kept on purpose.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::callback::Timeout;
use gloo_utils::{document, window};
use leptos::html;
use leptos::prelude::*;
use rand::Rng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::utils::constants::{
    AREA_PER_PARTICLE, HASH_RESIZE_DELAY_MS, LINK_DISTANCE, MAX_DPR, TIME_STEP,
};

/// One particle. `z` is a pseudo-depth in (0.2, 1.0] scaling both opacity
/// and glow size.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub r: f64,
    pub vx: f64,
    pub vy: f64,
    pub base_opacity: f64,
    pub hue: f64,
}

/// Particle field simulation in logical (CSS pixel) coordinates.
#[derive(Debug)]
pub struct StarfieldSim {
    width: f64,
    height: f64,
    time: f64,
    particles: Vec<Particle>,
}

/// Particle count scales with surface area.
pub fn particle_count(width: f64, height: f64) -> usize {
    ((width * height) / AREA_PER_PARTICLE).floor() as usize
}

/// Clamp a raw device pixel ratio to a sane range.
pub fn clamp_dpr(raw: f64) -> f64 {
    if raw > 0.0 {
        raw.min(MAX_DPR)
    } else {
        1.0
    }
}

/// Backing-store dimension for a logical size at the given ratio.
pub fn backing_size(logical: f64, dpr: f64) -> u32 {
    (logical * dpr).floor() as u32
}

impl StarfieldSim {
    pub fn new() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            time: 0.0,
            particles: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Adopt a new surface size and respawn the whole field.
    pub fn resize<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width;
        self.height = height;
        let count = particle_count(width, height);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle {
                x: rng.gen::<f64>() * width,
                y: rng.gen::<f64>() * height,
                z: 0.2 + rng.gen::<f64>() * 0.8,
                r: 0.3 + rng.gen::<f64>() * 1.6,
                vx: (rng.gen::<f64>() - 0.5) * 0.08,
                vy: (rng.gen::<f64>() - 0.5) * 0.08,
                base_opacity: 0.3 + rng.gen::<f64>() * 0.5,
                hue: 180.0 + rng.gen::<f64>() * 60.0,
            });
        }
    }

    /// Advance the shared time accumulator. Call once per frame, before
    /// reading link positions.
    pub fn begin_frame(&mut self) {
        self.time += TIME_STEP;
    }

    /// Move every particle one step, wrapping at the edges.
    pub fn advance(&mut self) {
        let time = self.time;
        let width = self.width;
        let height = self.height;
        for p in &mut self.particles {
            p.x += p.vx + (time + p.x * 0.01).sin() * 0.2;
            p.y += p.vy + (time + p.y * 0.01).cos() * 0.2;

            if p.x < 0.0 {
                p.x = width;
            } else if p.x > width {
                p.x = 0.0;
            }
            if p.y < 0.0 {
                p.y = height;
            } else if p.y > height {
                p.y = 0.0;
            }
        }
    }

    /// Visit every pair closer than the link distance with its line alpha.
    pub fn for_each_link(&self, mut f: impl FnMut(&Particle, &Particle, f64)) {
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < LINK_DISTANCE {
                    let alpha = (1.0 - dist / LINK_DISTANCE) * 0.15 * (a.z + b.z) / 2.0;
                    f(a, b, alpha);
                }
            }
        }
    }

    /// Per-particle twinkle factor, already scaled by the base opacity.
    pub fn pulse(&self, p: &Particle) -> f64 {
        ((self.time * 2.0 + p.x * 0.05 + p.y * 0.05).sin() * 0.3 + 0.7) * p.base_opacity
    }
}

impl Default for StarfieldSim {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Starfield() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    let stopped = Arc::new(AtomicBool::new(false));
    let stop = stopped.clone();
    on_cleanup(move || stop.store(true, Ordering::Relaxed));

    let started = Cell::new(false);
    Effect::new(move || {
        if started.get() {
            return;
        }
        if let Some(canvas) = canvas_ref.get() {
            started.set(true);
            if let Err(e) = start(canvas, stopped.clone()) {
                log::error!("Starfield failed to start: {:?}", e);
            }
        }
    });

    view! {
        <canvas class="starfield" id="starfield" node_ref=canvas_ref></canvas>
    }
}

fn start(canvas: HtmlCanvasElement, stopped: Arc<AtomicBool>) -> Result<(), JsValue> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let dpr = clamp_dpr(window().device_pixel_ratio());
    let sim = Rc::new(RefCell::new(StarfieldSim::new()));

    let resize = {
        let canvas = canvas.clone();
        let ctx = ctx.clone();
        let sim = sim.clone();
        move || {
            let width = document()
                .document_element()
                .map(|root| root.client_width() as f64)
                .unwrap_or(0.0);
            let doc_height = document()
                .document_element()
                .map(|root| root.scroll_height() as f64)
                .unwrap_or(0.0);
            let win_height = window()
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let height = doc_height.max(win_height);

            let style = web_sys::HtmlElement::style(&canvas);
            let _ = style.set_property("width", &format!("{}px", width));
            let _ = style.set_property("height", &format!("{}px", height));
            canvas.set_width(backing_size(width, dpr));
            canvas.set_height(backing_size(height, dpr));
            // Setting width/height resets the context transform.
            let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

            sim.borrow_mut()
                .resize(width, height, &mut rand::thread_rng());
        }
    };
    resize();

    {
        let resize = resize.clone();
        let on_resize = Closure::wrap(Box::new(move || resize()) as Box<dyn FnMut()>);
        window()
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    // Slide changes can grow or shrink the page, so re-measure shortly after
    // each hash change.
    {
        let on_hashchange = Closure::wrap(Box::new(move || {
            let resize = resize.clone();
            Timeout::new(HASH_RESIZE_DELAY_MS, resize).forget();
        }) as Box<dyn FnMut()>);
        window().add_event_listener_with_callback(
            "hashchange",
            on_hashchange.as_ref().unchecked_ref(),
        )?;
        on_hashchange.forget();
    }

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick2 = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if stopped.load(Ordering::Relaxed) {
            // Drop out without rescheduling; the closure stays leaked but
            // inert once the component unmounts.
            return;
        }
        draw_frame(&ctx, &mut sim.borrow_mut());
        if let Some(tick) = tick2.borrow().as_ref() {
            let _ = window().request_animation_frame(tick.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));

    if let Some(tick) = tick.borrow().as_ref() {
        window().request_animation_frame(tick.as_ref().unchecked_ref())?;
    }
    Ok(())
}

fn draw_frame(ctx: &CanvasRenderingContext2d, sim: &mut StarfieldSim) {
    sim.begin_frame();

    // Translucent fill instead of a clear leaves short motion trails.
    ctx.set_fill_style_str("rgba(10, 15, 20, 0.1)");
    ctx.fill_rect(0.0, 0.0, sim.width(), sim.height());

    ctx.set_line_width(0.5);
    sim.for_each_link(|a, b, alpha| {
        ctx.set_stroke_style_str(&format!("rgba(0, 229, 255, {})", alpha));
        ctx.begin_path();
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
        ctx.stroke();
    });

    sim.advance();

    for i in 0..sim.particles().len() {
        let p = sim.particles()[i];
        let glow = sim.pulse(&p);

        // Soft halo.
        if let Ok(gradient) =
            ctx.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, p.r * 4.0)
        {
            let _ = gradient.add_color_stop(
                0.0,
                &format!("hsla({}, 100%, 60%, {})", p.hue, glow * 0.6),
            );
            let _ = gradient.add_color_stop(
                0.5,
                &format!("hsla({}, 100%, 75%, {})", p.hue, glow * 0.3),
            );
            let _ = gradient.add_color_stop(1.0, "transparent");
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.begin_path();
            let _ = ctx.arc(p.x, p.y, p.r * 4.0, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }

        // Main body, depth-faded, with a blurred shadow for bloom.
        ctx.set_fill_style_str(&format!("rgba(0, 229, 255, {})", glow * p.z));
        ctx.set_shadow_color(&format!("rgba(122, 248, 255, {})", glow * 0.8));
        ctx.set_shadow_blur(8.0 * p.z * p.r);
        ctx.begin_path();
        let _ = ctx.arc(p.x, p.y, p.r, 0.0, std::f64::consts::TAU);
        ctx.fill();
        ctx.set_shadow_blur(0.0);
        ctx.set_shadow_color("transparent");

        // Bright core.
        ctx.set_fill_style_str(&format!("rgba(122, 248, 255, {})", glow * 0.9));
        ctx.begin_path();
        let _ = ctx.arc(p.x, p.y, p.r * 0.4, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn seeded_sim(width: f64, height: f64) -> StarfieldSim {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut sim = StarfieldSim::new();
        sim.resize(width, height, &mut rng);
        sim
    }

    #[test]
    fn count_scales_with_area() {
        assert_eq!(particle_count(1920.0, 1080.0), 259);
        assert_eq!(particle_count(800.0, 600.0), 60);
        assert_eq!(particle_count(0.0, 600.0), 0);
    }

    #[test]
    fn spawned_particles_are_in_bounds() {
        let sim = seeded_sim(800.0, 600.0);
        assert_eq!(sim.particles().len(), 60);
        for p in sim.particles() {
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert!(p.z > 0.2 - 1e-9 && p.z <= 1.0);
            assert!(p.r >= 0.3 && p.r <= 1.9);
            assert!(p.vx.abs() <= 0.04 && p.vy.abs() <= 0.04);
            assert!(p.base_opacity >= 0.3 && p.base_opacity <= 0.8);
            assert!(p.hue >= 180.0 && p.hue <= 240.0);
        }
    }

    #[test]
    fn advance_wraps_at_edges() {
        let mut sim = seeded_sim(800.0, 600.0);
        // Park one particle just past the right edge moving right.
        sim.particles[0] = Particle {
            x: 800.5,
            y: 300.0,
            z: 0.5,
            r: 1.0,
            vx: 0.04,
            vy: 0.0,
            base_opacity: 0.5,
            hue: 200.0,
        };
        sim.begin_frame();
        sim.advance();
        let p = sim.particles()[0];
        // Wrapped, or drifted back in; either way it is in bounds now.
        assert!((0.0..=800.0).contains(&p.x));
    }

    #[test]
    fn wrap_is_exact_when_clearly_out() {
        let mut sim = seeded_sim(800.0, 600.0);
        sim.particles.truncate(1);
        sim.particles[0].x = -5.0;
        sim.particles[0].vx = 0.0;
        sim.begin_frame();
        sim.advance();
        // A step can move at most ~0.24px, so a particle 5px out must wrap.
        assert!(sim.particles()[0].x > 700.0);
    }

    #[test]
    fn link_alpha_follows_distance() {
        let mut sim = StarfieldSim::new();
        sim.width = 400.0;
        sim.height = 400.0;
        let base = Particle {
            x: 0.0,
            y: 0.0,
            z: 1.0,
            r: 1.0,
            vx: 0.0,
            vy: 0.0,
            base_opacity: 0.5,
            hue: 200.0,
        };
        sim.particles = vec![
            Particle { x: 100.0, y: 100.0, ..base },
            Particle { x: 200.0, y: 100.0, ..base },
        ];

        let mut links = Vec::new();
        sim.for_each_link(|_, _, alpha| links.push(alpha));
        assert_eq!(links.len(), 1);
        let expected = (1.0 - 100.0 / LINK_DISTANCE) * 0.15;
        assert!((links[0] - expected).abs() < 1e-12);

        // Pull them apart past the threshold and the link disappears.
        sim.particles[1].x = 251.0;
        let mut links = Vec::new();
        sim.for_each_link(|_, _, alpha| links.push(alpha));
        assert!(links.is_empty());
    }

    #[test]
    fn pulse_stays_within_twinkle_band() {
        let mut sim = seeded_sim(800.0, 600.0);
        for _ in 0..100 {
            sim.begin_frame();
            for p in sim.particles() {
                let glow = sim.pulse(p);
                assert!(glow >= 0.4 * p.base_opacity - 1e-9);
                assert!(glow <= p.base_opacity + 1e-9);
            }
        }
    }

    #[test]
    fn dpr_is_clamped() {
        assert_eq!(clamp_dpr(1.0), 1.0);
        assert_eq!(clamp_dpr(3.0), 2.0);
        assert_eq!(clamp_dpr(0.0), 1.0);
        assert_eq!(clamp_dpr(-1.0), 1.0);
    }

    #[test]
    fn backing_size_scales_and_floors() {
        assert_eq!(backing_size(800.0, 2.0), 1600);
        assert_eq!(backing_size(800.5, 1.5), 1200);
        assert_eq!(backing_size(0.0, 2.0), 0);
    }
}
