//! Particle layer drawn as SVG over the hero
//!
//! Starts after a delay, advances one step per frame and reseeds when the
//! hero is resized. Resizes are debounced so a drag only reseeds once.

use dioxus::prelude::*;
use landing_domain::effects::{ParticleField, TimerGate};

use crate::infrastructure::spawn_task;
use crate::ui::presentation::services::use_landing_config;
use crate::use_platform;

#[component]
pub fn ParticleLayer() -> Element {
    let config = use_landing_config();
    let platform = use_platform();

    let mut size = use_signal(|| platform.viewport_size());
    let mut field = use_signal(|| None::<ParticleField>);
    let mut debounce = use_signal(TimerGate::new);

    let count = config.particle_count;
    let start_ms = config.timings.particles_start_ms;
    let frame_ms = config.timings.frame_ms;
    let debounce_ms = config.timings.resize_debounce_ms;

    let platform_for_effect = platform.clone();
    use_effect(move || {
        let platform = platform_for_effect.clone();
        spawn_task(async move {
            platform.sleep_ms(start_ms).await;
            let (width, height) = *size.peek();
            field.set(Some(ParticleField::new(width, height, count, &mut platform.rng())));
            loop {
                platform.sleep_ms(frame_ms).await;
                if let Some(f) = field.write().as_mut() {
                    f.step();
                }
            }
        });
    });

    let on_resize = move |e: ResizeEvent| {
        let Ok(box_size) = e.get_content_box_size() else {
            return;
        };
        size.set((box_size.width, box_size.height));
        let ticket = debounce.write().arm();
        let platform = platform.clone();
        spawn_task(async move {
            platform.sleep_ms(debounce_ms).await;
            if !debounce.write().fire(ticket) {
                return;
            }
            let (width, height) = *size.peek();
            if let Some(f) = field.write().as_mut() {
                f.resize(width, height, &mut platform.rng());
            }
        });
    };

    let particles = field
        .read()
        .as_ref()
        .map(|f| f.particles().to_vec())
        .unwrap_or_default();
    let (width, height) = *size.read();
    rsx! {
        svg {
            class: "hero-particles",
            view_box: "0 0 {width} {height}",
            onresize: on_resize,
            for (i, p) in particles.iter().enumerate() {
                circle {
                    key: "{i}",
                    cx: p.x,
                    cy: p.y,
                    r: p.size,
                    fill: p.fill(),
                }
            }
        }
    }
}
